//! [`Filesystem`](nodekit_core::application::Filesystem) adapters: the local
//! disk and a shared in-memory tree for flow tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
