//! Export system for cache statistics

mod console;
mod json;

use crate::cache::CacheStats;
use crate::config::OutputFormat;
use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for statistics output formatting
pub trait StatsExporter {
    /// Write the complete statistics dump for the given snapshot
    fn export(&self, stats: &CacheStats, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn StatsExporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
