//! Key-value storage backends

pub mod file;
pub mod memory;

pub use file::FileKeyValueStorage;
pub use memory::MemoryKeyValueStorage;
