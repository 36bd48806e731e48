//! Cache store implementation

use crate::cache::entry::CacheEntry;
use crate::cache::reader::{ContentReader, FsReader};
use crate::error::{CacheError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Default cache capacity when none is configured
const DEFAULT_CAPACITY: usize = 100;

/// Statistics for a single cached entry
#[derive(Debug, Serialize)]
pub struct EntryStats {
    /// Canonical path of the cached file
    pub path: String,
    /// Approximate in-memory size in bytes
    pub approx_bytes: u64,
    /// Wall-clock time of the last read, milliseconds since the Unix epoch
    pub last_read_ms: u64,
}

/// Read-only snapshot of cache state for reporting
#[derive(Debug, Serialize)]
pub struct CacheStats {
    /// Number of files currently cached
    pub cached_files: usize,
    /// Approximate total in-memory size in bytes
    pub approx_bytes: u64,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// Per-entry statistics, sorted by path
    pub entries: Vec<EntryStats>,
}

/// In-memory file content cache with mtime validation and bounded size
///
/// Content reads are delegated to a [`ContentReader`]; everything else
/// (existence check, mtime query) goes through `std::fs` directly.
///
/// Single-threaded by design: no internal locking, and the check-then-act
/// read sequence is not atomic. Callers needing concurrent access must wrap
/// the whole cache in external synchronization.
pub struct FileCache<R = FsReader> {
    /// Canonical absolute path -> cached entry
    entries: HashMap<PathBuf, CacheEntry>,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
    /// Collaborator performing the actual content reads
    reader: R,
    /// Source of logical access sequence numbers
    next_seq: u64,
}

impl FileCache<FsReader> {
    /// Create a cache with the default capacity of 100 entries
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries
    ///
    /// A capacity of 0 is treated as 1; the cache always holds the most
    /// recently read file.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_reader(capacity, FsReader)
    }
}

impl Default for FileCache<FsReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ContentReader> FileCache<R> {
    /// Create a cache that reads content through the given collaborator
    ///
    /// A capacity of 0 is treated as 1.
    pub fn with_reader(capacity: usize, reader: R) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            reader,
            next_seq: 0,
        }
    }

    /// Read a file through the cache
    ///
    /// Returns the cached content when the entry's stored mtime matches the
    /// file's current mtime, otherwise reads from disk and refreshes the
    /// entry, evicting the least-recently-read entry first if the cache is
    /// at capacity and the key is new.
    ///
    /// The mtime is sampled before the content read, so a write landing
    /// between the two can pair old content with the newer mtime for one
    /// generation. This window is accepted; the next external modification
    /// invalidates the entry as usual.
    ///
    /// # Errors
    /// `CacheError::NotFound` if the path does not exist at call time,
    /// `CacheError::Read` if the stat or content read fails. A failed read
    /// leaves prior cache state untouched.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let key = match fs::canonicalize(path) {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound {
                    path: path.display().to_string(),
                })
            }
            Err(e) => {
                return Err(CacheError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let modified = fs::metadata(&key)
            .and_then(|meta| meta.modified())
            .map_err(|e| CacheError::Read {
                path: key.display().to_string(),
                source: e,
            })?;

        let seq = self.bump_seq();

        if let Some(entry) = self.entries.get_mut(&key) {
            if entry.modified_at_read == modified {
                entry.touch(seq);
                return Ok(entry.content.clone());
            }
        }

        // Miss or stale: read from disk before mutating any cache state
        let content = self.reader.read(&key).map_err(|e| CacheError::Read {
            path: key.display().to_string(),
            source: e,
        })?;

        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.evict_least_recently_read();
        }

        self.entries
            .insert(key, CacheEntry::new(content.clone(), seq, modified));

        Ok(content)
    }

    /// Remove the entry for `path` if present; no-op otherwise
    pub fn invalidate(&mut self, path: impl AsRef<Path>) {
        let key = Self::canonical_key(path.as_ref());
        self.entries.remove(&key);
    }

    /// Remove all entries
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Whether an entry currently exists for `path`
    ///
    /// Presence query only: a stale entry still answers `true`. Freshness
    /// against the current mtime is only consulted by [`read_file`].
    ///
    /// [`read_file`]: FileCache::read_file
    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        let key = Self::canonical_key(path.as_ref());
        self.entries.contains_key(&key)
    }

    /// Number of files currently cached
    pub fn cached_count(&self) -> usize {
        self.entries.len()
    }

    /// Configured maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Approximate total in-memory size in bytes
    ///
    /// Sum over entries of the UTF-16 code unit count of the content,
    /// two bytes per unit.
    pub fn approximate_memory_usage(&self) -> u64 {
        self.entries.values().map(|entry| entry.approx_bytes()).sum()
    }

    /// Snapshot of cache state for reporting, entries sorted by path
    pub fn stats(&self) -> CacheStats {
        let mut entries: Vec<EntryStats> = self
            .entries
            .iter()
            .map(|(path, entry)| EntryStats {
                path: path.display().to_string(),
                approx_bytes: entry.approx_bytes(),
                last_read_ms: entry
                    .last_read_at
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0),
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        CacheStats {
            cached_files: self.entries.len(),
            approx_bytes: self.approximate_memory_usage(),
            capacity: self.capacity,
            entries,
        }
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Drop the entry with the smallest access sequence
    ///
    /// Linear scan; capacities are small and this only runs on insert-time
    /// overflow. Sequences are strictly increasing, so the choice is
    /// deterministic.
    fn evict_least_recently_read(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_read_seq)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }

    /// Resolve a path to its cache key without requiring existence
    ///
    /// `canonicalize` fails for paths that no longer exist, so invalidation
    /// and presence queries fall back to a cwd-joined absolute form.
    fn canonical_key(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}
