//! Concrete [`PackProvider`](compendium_pack_api::PackProvider) implementations.

mod fs;
mod memory;

pub use fs::FsPackProvider;
pub use memory::MemoryPackProvider;
