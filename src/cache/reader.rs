//! File-reading collaborator
//!
//! The cache delegates the actual content read to a `ContentReader` so that
//! tests can substitute an instrumented or failing reader.

use std::fs;
use std::io;
use std::path::Path;

/// Host platform line separator used for normalization
#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Reads the full textual content of an existing file
pub trait ContentReader {
    /// Read the file at `path` into a single string
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Default reader backed by `std::fs`
///
/// Line terminators are normalized: every logical line is emitted followed
/// by the host platform separator, including after the final line. Lines may
/// be terminated by `\r\n`, a lone `\r`, or a lone `\n` in the source file.
/// An empty file yields an empty string. This normalization is part of the
/// cache's observable contract.
#[derive(Debug, Default)]
pub struct FsReader;

impl ContentReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        let raw = fs::read_to_string(path)?;
        let mut content = String::with_capacity(raw.len() + 1);
        let mut rest = raw.as_str();
        while !rest.is_empty() {
            match rest.find(['\r', '\n']) {
                Some(idx) => {
                    content.push_str(&rest[..idx]);
                    content.push_str(LINE_SEPARATOR);
                    // A "\r\n" pair is a single terminator
                    let mut next = idx + 1;
                    if rest.as_bytes()[idx] == b'\r' && rest.as_bytes().get(next) == Some(&b'\n') {
                        next += 1;
                    }
                    rest = &rest[next..];
                }
                None => {
                    content.push_str(rest);
                    content.push_str(LINE_SEPARATOR);
                    rest = "";
                }
            }
        }
        Ok(content)
    }
}
