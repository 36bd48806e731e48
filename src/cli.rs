//! CLI argument parsing using clap

use crate::config::{Config, OutputFormat};
use crate::error::{CacheError, Result};
use clap::Parser;

/// In-memory file content cache demo driver
#[derive(Parser, Debug)]
#[command(name = "readcache")]
#[command(version)]
#[command(about = "Read files through an mtime-validated content cache", long_about = None)]
pub struct Cli {
    /// Input file containing list of paths to read (one per line)
    /// Use "-" to read from stdin
    #[arg(value_name = "FILE_LIST")]
    pub file_list: String,

    /// Output file for cache statistics (use "-" for stdout)
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output: String,

    /// Maximum number of files held in the cache
    #[arg(
        short = 'c',
        long = "capacity",
        value_name = "N",
        default_value = "100"
    )]
    pub capacity: usize,

    /// Number of read passes over the file list
    #[arg(short = 'p', long = "passes", value_name = "N", default_value = "1")]
    pub passes: usize,

    /// Output statistics in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Invalidate all entries after the read passes, before the stats dump
    #[arg(long = "clear")]
    pub clear: bool,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }

        if self.passes == 0 {
            return Err(CacheError::InvalidConfig(
                "passes must be at least 1".to_string(),
            ));
        }

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        Ok(Config {
            capacity: self.capacity,
            passes: self.passes,
            list_filename: self.file_list,
            output_filename: self.output,
            output_format,
            clear: self.clear,
        })
    }
}
