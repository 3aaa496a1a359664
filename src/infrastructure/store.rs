//! Container tag store abstraction

use crate::domain::TagSet;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// How a container was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Modify,
}

/// Summary of a container, produced before it is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub brand: String,
}

/// Abstract access to the tags of container files
pub trait ContainerTagStore {
    type Handle: ContainerHandle;

    /// Check that `path` can be inspected as a container
    fn describe(&self, path: &Path) -> Result<FileInfo>;

    /// Open a container for reading its tags
    fn open_for_read(&self, path: &Path) -> Result<Self::Handle>;

    /// Open a container whose tags will be rewritten on close
    fn open_for_modify(&self, path: &Path) -> Result<Self::Handle>;
}

/// An open container.
///
/// Dropping a handle without calling [`ContainerHandle::close`] discards any
/// stored tags.
pub trait ContainerHandle {
    fn path(&self) -> &Path;

    fn mode(&self) -> OpenMode;

    /// Snapshot of the tags currently held by the handle
    fn fetch_tags(&self) -> TagSet;

    /// Replace the handle's tags. Fails on read-only handles.
    fn store_tags(&mut self, tags: &TagSet) -> Result<()>;

    /// Release the handle, writing stored tags for modify handles
    fn close(self) -> Result<()>
    where
        Self: Sized;
}
