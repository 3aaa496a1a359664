//! Domain layer - Tag model

pub mod tag_set;

pub use tag_set::{ContentId, TagSet, CONTENT_ID};
