//! In-memory tag store for exercising services without real containers

use crate::domain::TagSet;
use crate::error::{Result, TagCopyError};
use crate::infrastructure::store::{ContainerHandle, ContainerTagStore, FileInfo, OpenMode};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone)]
enum MemoryFile {
    Container(TagSet),
    /// Describable, but the tag cannot be read
    Corrupt,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTagStore {
    files: Rc<RefCell<HashMap<PathBuf, MemoryFile>>>,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, tags: TagSet) {
        self.files
            .borrow_mut()
            .insert(path.into(), MemoryFile::Container(tags));
    }

    pub fn insert_corrupt(&self, path: impl Into<PathBuf>) {
        self.files
            .borrow_mut()
            .insert(path.into(), MemoryFile::Corrupt);
    }

    /// Tags currently persisted for `path`
    pub fn tags(&self, path: impl AsRef<Path>) -> Option<TagSet> {
        match self.files.borrow().get(path.as_ref()) {
            Some(MemoryFile::Container(tags)) => Some(tags.clone()),
            _ => None,
        }
    }

    fn open(&self, path: &Path, mode: OpenMode) -> Result<MemoryHandle> {
        match self.files.borrow().get(path) {
            Some(MemoryFile::Container(tags)) => Ok(MemoryHandle {
                files: Rc::clone(&self.files),
                path: path.to_path_buf(),
                mode,
                tags: tags.clone(),
                dirty: false,
            }),
            Some(MemoryFile::Corrupt) => Err(TagCopyError::InvalidHandle {
                path: path.to_path_buf(),
                reason: "corrupt container".to_string(),
            }),
            None => Err(TagCopyError::InvalidHandle {
                path: path.to_path_buf(),
                reason: "no such container".to_string(),
            }),
        }
    }
}

impl ContainerTagStore for MemoryTagStore {
    type Handle = MemoryHandle;

    fn describe(&self, path: &Path) -> Result<FileInfo> {
        if self.files.borrow().contains_key(path) {
            Ok(FileInfo {
                path: path.to_path_buf(),
                size: 0,
                brand: "mem".to_string(),
            })
        } else {
            Err(TagCopyError::Open {
                path: path.to_path_buf(),
                reason: "No such file or directory".to_string(),
            })
        }
    }

    fn open_for_read(&self, path: &Path) -> Result<MemoryHandle> {
        self.open(path, OpenMode::Read)
    }

    fn open_for_modify(&self, path: &Path) -> Result<MemoryHandle> {
        self.open(path, OpenMode::Modify)
    }
}

#[derive(Debug)]
pub struct MemoryHandle {
    files: Rc<RefCell<HashMap<PathBuf, MemoryFile>>>,
    path: PathBuf,
    mode: OpenMode,
    tags: TagSet,
    dirty: bool,
}

impl ContainerHandle for MemoryHandle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn mode(&self) -> OpenMode {
        self.mode
    }

    fn fetch_tags(&self) -> TagSet {
        self.tags.clone()
    }

    fn store_tags(&mut self, tags: &TagSet) -> Result<()> {
        if self.mode != OpenMode::Modify {
            return Err(TagCopyError::ReadOnlyHandle(self.path.clone()));
        }
        self.tags = tags.clone();
        self.dirty = true;
        Ok(())
    }

    fn close(self) -> Result<()> {
        if self.dirty {
            self.files
                .borrow_mut()
                .insert(self.path.clone(), MemoryFile::Container(self.tags.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentId;

    fn tags_with_id(id: u32) -> TagSet {
        let mut tags = TagSet::new();
        tags.set_content_id(ContentId::new(id));
        tags
    }

    #[test]
    fn test_changes_persist_only_on_close() {
        let store = MemoryTagStore::new();
        store.insert("a.m4a", tags_with_id(1));

        let mut handle = store.open_for_modify(Path::new("a.m4a")).unwrap();
        handle.store_tags(&tags_with_id(2)).unwrap();
        drop(handle);
        assert_eq!(store.tags("a.m4a"), Some(tags_with_id(1)));

        let mut handle = store.open_for_modify(Path::new("a.m4a")).unwrap();
        handle.store_tags(&tags_with_id(2)).unwrap();
        handle.close().unwrap();
        assert_eq!(store.tags("a.m4a"), Some(tags_with_id(2)));
    }

    #[test]
    fn test_read_handle_refuses_store() {
        let store = MemoryTagStore::new();
        store.insert("a.m4a", TagSet::new());

        let mut handle = store.open_for_read(Path::new("a.m4a")).unwrap();
        assert_eq!(handle.mode(), OpenMode::Read);
        assert!(matches!(
            handle.store_tags(&TagSet::new()),
            Err(TagCopyError::ReadOnlyHandle(_))
        ));
    }
}
