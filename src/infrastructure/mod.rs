//! Infrastructure layer - Container access and process plumbing

pub mod logging;
#[cfg(test)]
pub mod memory;
pub mod mp4;
pub mod store;

pub use logging::init_logging;
#[cfg(test)]
pub use memory::MemoryTagStore;
pub use mp4::{Mp4Handle, Mp4TagStore};
pub use store::{ContainerHandle, ContainerTagStore, FileInfo, OpenMode};
