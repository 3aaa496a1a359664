//! Copy tags use case

use crate::domain::{ContentId, TagSet};
use crate::error::{Result, TagCopyError};
use crate::infrastructure::{ContainerHandle, ContainerTagStore};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to copy, and whether to require matching content IDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source: PathBuf,
    pub target: PathBuf,
    pub compare: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub items_copied: usize,
    pub items_replaced: usize,
    /// Present only in compare mode, where both IDs are equal
    pub content_id: Option<ContentId>,
}

/// Service copying the tags of one container onto another.
pub struct CopyTagsService<S: ContainerTagStore> {
    store: S,
}

impl<S: ContainerTagStore> CopyTagsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Copy the source tags onto the target, writing progress lines to `out`.
    ///
    /// Nothing is written to the target unless every check passed. Handles
    /// opened along the way are released on every return path.
    pub fn execute(&self, request: &CopyRequest, out: &mut impl Write) -> Result<CopyReport> {
        writeln!(out, "{}:", request.source.display())?;
        let source_tags = self.read_source(&request.source)?;
        let source_id = if request.compare {
            let id = require_content_id(&source_tags, &request.source)?;
            writeln!(out, "source Content ID: {}", id)?;
            Some(id)
        } else {
            None
        };

        writeln!(out, "{}:", request.target.display())?;
        self.store.describe(&request.target)?;
        let mut target = self.store.open_for_modify(&request.target)?;
        let target_tags = target.fetch_tags();

        if let Some(source_id) = source_id {
            let target_id = require_content_id(&target_tags, &request.target)?;
            writeln!(out, "target Content ID: {}", target_id)?;
            if source_id != target_id {
                debug!(%source_id, %target_id, "content IDs differ, leaving target untouched");
                return Err(TagCopyError::ContentIdMismatch {
                    source_id: source_id.value(),
                    target_id: target_id.value(),
                });
            }
        }

        target.store_tags(&source_tags)?;
        target.close()?;
        info!(
            source = %request.source.display(),
            target = %request.target.display(),
            items = source_tags.len(),
            "copied tags"
        );

        Ok(CopyReport {
            source: request.source.clone(),
            target: request.target.clone(),
            items_copied: source_tags.len(),
            items_replaced: target_tags.len(),
            content_id: source_id,
        })
    }

    fn read_source(&self, path: &Path) -> Result<TagSet> {
        let info = self.store.describe(path)?;
        debug!(
            path = %info.path.display(),
            brand = %info.brand,
            size = info.size,
            "described source"
        );

        let handle = self.store.open_for_read(path)?;
        let tags = handle.fetch_tags();
        debug!(path = %handle.path().display(), items = tags.len(), "fetched source tags");
        handle.close()?;
        Ok(tags)
    }
}

fn require_content_id(tags: &TagSet, path: &Path) -> Result<ContentId> {
    tags.content_id()
        .ok_or_else(|| TagCopyError::MissingContentId(path.to_path_buf()))
}
