//! mp4tagcopy - copy iTunes-style tags between MP4 files
//!
//! Reads the metadata items of a source container and stores them on a
//! target container, optionally only when both carry the same content ID.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagCopyError;
