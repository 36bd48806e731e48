//! Cache entry value type

use std::time::SystemTime;

/// Cached record for a single file
///
/// Owned exclusively by the cache's entry map; nothing else holds a
/// reference into it.
#[derive(Debug)]
pub(crate) struct CacheEntry {
    /// Full normalized text of the file at the time of last read
    pub content: String,
    /// Wall-clock time of the most recent read-or-hit, for reporting
    pub last_read_at: SystemTime,
    /// Logical access counter value at the most recent read-or-hit.
    /// Strictly increasing across the whole cache, so eviction ordering
    /// never ties.
    pub last_read_seq: u64,
    /// Filesystem mtime observed when `content` was captured
    pub modified_at_read: SystemTime,
}

impl CacheEntry {
    pub fn new(content: String, seq: u64, modified_at_read: SystemTime) -> Self {
        Self {
            content,
            last_read_at: SystemTime::now(),
            last_read_seq: seq,
            modified_at_read,
        }
    }

    /// Record a cache hit without touching the content
    pub fn touch(&mut self, seq: u64) {
        self.last_read_at = SystemTime::now();
        self.last_read_seq = seq;
    }

    /// Approximate in-memory size: UTF-16 code units, two bytes each
    ///
    /// Matches the accounting convention of `String.length() * 2` in
    /// UTF-16-based runtimes, so the estimate is deterministic for any
    /// content, not just ASCII.
    pub fn approx_bytes(&self) -> u64 {
        self.content.encode_utf16().count() as u64 * 2
    }
}
