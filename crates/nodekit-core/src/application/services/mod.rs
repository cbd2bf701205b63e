//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! user-facing flows: the interactive setup and the Node.js preset.

pub mod emitter;
pub mod node_preset_service;
pub mod questionnaire;
pub mod setup_service;

pub use emitter::ConfigEmitter;
pub use node_preset_service::{NodePresetService, PresetOutcome};
pub use questionnaire::collect_answers;
pub use setup_service::{SetupOutcome, SetupService};
