//! Configuration types for readcache

/// Output format for the statistics dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON output with structured data
    Json,
}

/// Configuration options for a readcache run
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of files held in the cache (default: 100)
    /// Reading a new file past this limit evicts the least-recently-read entry
    pub capacity: usize,

    /// Number of read passes over the file list (default: 1)
    /// A second pass exercises the warm-cache path
    pub passes: usize,

    /// Path to input file list (or "-" for stdin)
    pub list_filename: String,

    /// Path to statistics output file (or "-" for stdout)
    pub output_filename: String,

    /// Statistics output format (console or json)
    pub output_format: OutputFormat,

    /// Invalidate all entries after the read passes, before the stats dump
    pub clear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 100,
            passes: 1,
            list_filename: String::from("-"),
            output_filename: String::from("-"),
            output_format: OutputFormat::Console,
            clear: false,
        }
    }
}
