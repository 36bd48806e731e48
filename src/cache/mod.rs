//! In-memory file content cache
//!
//! This module caches the textual content of files keyed by canonical
//! absolute path. Entries are validated against the file's last-modified
//! timestamp on every access, and the least-recently-read entry is evicted
//! when the configured capacity is exceeded.

mod entry;
mod reader;
mod store;

pub use reader::{ContentReader, FsReader};
pub use store::{CacheStats, EntryStats, FileCache};
