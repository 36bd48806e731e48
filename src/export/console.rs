//! Console (human-readable) statistics exporter

use crate::cache::CacheStats;
use crate::error::Result;
use crate::export::StatsExporter;
use std::io::Write;

/// Human-readable console output exporter
pub struct ConsoleExporter;

impl StatsExporter for ConsoleExporter {
    fn export(&self, stats: &CacheStats, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "Cache statistics:")?;
        writeln!(writer, "  Cached files: {}", stats.cached_files)?;
        writeln!(writer, "  Approximate memory: {} bytes", stats.approx_bytes)?;
        writeln!(writer, "  Capacity: {}", stats.capacity)?;

        if !stats.entries.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Entries:")?;
            for entry in &stats.entries {
                writeln!(
                    writer,
                    "  {}  {} bytes  last read at {} ms",
                    entry.path, entry.approx_bytes, entry.last_read_ms
                )?;
            }
        }

        Ok(())
    }
}
