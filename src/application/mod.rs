//! Application layer - Use cases and orchestration

pub mod copy_tags;

pub use copy_tags::{CopyReport, CopyRequest, CopyTagsService};
