//! nodekit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for nodekit, an
//! installer that equips a JavaScript/TypeScript project with linting,
//! formatting, commit-message validation, and git hooks.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           nodekit-cli (CLI)             │
//! │  (prompter, progress output, config)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (SetupService, NodePresetService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, CommandRunner, Prompter…)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    nodekit-adapters (Infrastructure)    │
//! │  (LocalFilesystem, ShellCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (package catalog, config generators)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use nodekit_core::domain::{Framework, SetupAnswers, resolve_packages};
//!
//! let answers = SetupAnswers::builder()
//!     .framework(Framework::Next)
//!     .tailwind(true)
//!     .build();
//!
//! let packages = resolve_packages(&answers);
//! assert!(packages.iter().any(|p| p == "@next/eslint-plugin-next"));
//! ```

pub mod domain;

pub mod application;

pub mod error;
