//! readcache demo driver
//!
//! Reads a list of paths through the cache, optionally over several passes
//! to exercise the warm path, then dumps cache statistics.

use clap::Parser;
use readcache::cache::FileCache;
use readcache::cli::Cli;
use readcache::error::Result;
use readcache::export::{create_exporter, get_output_writer};
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 1: Load File List ===
    let file_list = match load_file_list(&config.list_filename) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if file_list.is_empty() {
        eprintln!("Error: File list is empty");
        return ExitCode::from(2);
    }

    // === Phase 2: Read Passes ===
    let mut cache = FileCache::with_capacity(config.capacity);
    let mut failed_reads = 0usize;

    for pass in 1..=config.passes {
        let mut pass_errors = 0usize;
        for path in &file_list {
            if let Err(e) = cache.read_file(path) {
                eprintln!("Warning: {}", e);
                pass_errors += 1;
            }
        }
        eprintln!(
            "pass {}: {} files, {} errors",
            pass,
            file_list.len(),
            pass_errors
        );
        failed_reads += pass_errors;
    }

    // === Phase 3: Optional Clear ===
    if config.clear {
        cache.invalidate_all();
        eprintln!("cache cleared, {} files cached", cache.cached_count());
    }

    // === Phase 4: Export Statistics ===
    let exporter = create_exporter(config.output_format);
    let mut writer = match get_output_writer(&config.output_filename) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error creating output: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = exporter.export(&cache.stats(), &mut *writer) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error flushing output: {}", e);
        return ExitCode::from(2);
    }

    // === Phase 5: Exit Code ===
    if failed_reads > 0 {
        ExitCode::from(1) // At least one read failed
    } else {
        ExitCode::SUCCESS
    }
}

/// Load the list of paths to read, one per line, skipping blank lines
///
/// A list filename of "-" reads from stdin.
fn load_file_list(list_filename: &str) -> Result<Vec<String>> {
    let raw = if list_filename == "-" {
        let mut lines = Vec::new();
        for line in io::stdin().lock().lines() {
            lines.push(line?);
        }
        lines.join("\n")
    } else {
        fs::read_to_string(list_filename)?
    };

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
