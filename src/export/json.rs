//! JSON statistics exporter

use crate::cache::CacheStats;
use crate::error::Result;
use crate::export::StatsExporter;
use std::io::Write;

/// JSON output exporter for tool integration
pub struct JsonExporter;

impl StatsExporter for JsonExporter {
    fn export(&self, stats: &CacheStats, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, stats)?;
        writeln!(writer)?;
        Ok(())
    }
}
