//! MP4 tag store backed by mp4ameta

use crate::domain::TagSet;
use crate::error::{Result, TagCopyError};
use crate::infrastructure::store::{ContainerHandle, ContainerTagStore, FileInfo, OpenMode};
use mp4ameta::Tag;
use std::fmt;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Tag store for ISO base media files (mp4, m4a, m4v, m4b)
#[derive(Debug, Clone, Copy, Default)]
pub struct Mp4TagStore;

impl Mp4TagStore {
    pub fn new() -> Self {
        Mp4TagStore
    }

    fn open(&self, path: &Path, mode: OpenMode) -> Result<Mp4Handle> {
        let tag = Tag::read_from_path(path).map_err(|e| TagCopyError::InvalidHandle {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), ?mode, "opened container");

        Ok(Mp4Handle {
            path: path.to_path_buf(),
            mode,
            tag,
            dirty: false,
        })
    }
}

impl ContainerTagStore for Mp4TagStore {
    type Handle = Mp4Handle;

    fn describe(&self, path: &Path) -> Result<FileInfo> {
        let open_error = |reason: String| TagCopyError::Open {
            path: path.to_path_buf(),
            reason,
        };

        let metadata = fs::metadata(path).map_err(|e| open_error(e.to_string()))?;
        if !metadata.is_file() {
            return Err(open_error("not a regular file".to_string()));
        }

        let mut header = [0u8; 12];
        File::open(path)
            .and_then(|mut file| file.read_exact(&mut header))
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::UnexpectedEof => open_error("file is too short".to_string()),
                _ => open_error(e.to_string()),
            })?;

        let brand = parse_ftyp_header(&header)
            .ok_or_else(|| open_error("no ftyp box at the start of the file".to_string()))?;

        Ok(FileInfo {
            path: path.to_path_buf(),
            size: metadata.len(),
            brand,
        })
    }

    fn open_for_read(&self, path: &Path) -> Result<Mp4Handle> {
        self.open(path, OpenMode::Read)
    }

    fn open_for_modify(&self, path: &Path) -> Result<Mp4Handle> {
        self.open(path, OpenMode::Modify)
    }
}

/// Major brand of a file starting with an `ftyp` box
fn parse_ftyp_header(header: &[u8; 12]) -> Option<String> {
    let size = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
    if size < 16 || &header[4..8] != b"ftyp" {
        return None;
    }

    Some(String::from_utf8_lossy(&header[8..12]).trim_end().to_string())
}

/// An open MP4 file. The parsed tag lives in memory until `close`.
pub struct Mp4Handle {
    path: PathBuf,
    mode: OpenMode,
    tag: Tag,
    dirty: bool,
}

impl fmt::Debug for Mp4Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mp4Handle")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl ContainerHandle for Mp4Handle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn mode(&self) -> OpenMode {
        self.mode
    }

    fn fetch_tags(&self) -> TagSet {
        TagSet::from_tag(&self.tag)
    }

    fn store_tags(&mut self, tags: &TagSet) -> Result<()> {
        if self.mode != OpenMode::Modify {
            return Err(TagCopyError::ReadOnlyHandle(self.path.clone()));
        }

        tags.apply_to(&mut self.tag);
        self.dirty = true;
        Ok(())
    }

    fn close(mut self) -> Result<()> {
        if self.dirty {
            self.tag
                .write_to_path(&self.path)
                .map_err(|e| TagCopyError::Write {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })?;
            debug!(path = %self.path.display(), "wrote tags");
        }

        self.dirty = false;
        debug!(path = %self.path.display(), "closed container");
        Ok(())
    }
}

impl Drop for Mp4Handle {
    fn drop(&mut self) {
        if self.dirty {
            warn!(path = %self.path.display(), "discarding unwritten tag changes");
        }
    }
}
