//! readcache - in-memory file content cache
//!
//! Caches the textual content of files keyed by canonical absolute path to
//! avoid redundant disk reads. Entries are validated against the file's
//! last-modified timestamp on every access, and the least-recently-read
//! entry is evicted when the configured capacity is exceeded.
//!
//! The core is [`cache::FileCache`]; the `cli`, `config`, and `export`
//! modules support the demo binary, which reads a list of paths through the
//! cache and dumps statistics.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
