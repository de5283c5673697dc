/// The archive storage abstraction.
mod archive_storage;
/// File-backed archive storage.
mod file;
/// Memory-backed archive storage.
mod memory;

pub use archive_storage::*;
pub use file::*;
pub use memory::*;
