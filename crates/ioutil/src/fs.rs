//! Whole-file read/write helpers with sentinel error handling.

use std::fs;
use std::path::Path;

/// Reads a file as UTF-8 text.
///
/// Returns the empty string when the file is absent, unreadable, or not
/// valid UTF-8; an empty result is indistinguishable from an empty file.
#[must_use]
pub fn read_text_file(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Reads a file as raw bytes.
///
/// Returns an empty buffer when the file is absent or unreadable.
#[must_use]
pub fn read_binary_file(path: impl AsRef<Path>) -> Vec<u8> {
    fs::read(path).unwrap_or_default()
}

/// Writes text to a file, replacing any existing content.
///
/// Returns `false` on any failure; no partial-write cleanup is attempted.
pub fn write_text_file(path: impl AsRef<Path>, text: &str) -> bool {
    fs::write(path, text).is_ok()
}

/// Writes raw bytes to a file, replacing any existing content.
pub fn write_binary_file(path: impl AsRef<Path>, data: &[u8]) -> bool {
    fs::write(path, data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        assert_eq!(read_text_file("/nonexistent/ioutil/test.txt"), "");
        assert!(read_binary_file("/nonexistent/ioutil/test.bin").is_empty());
    }

    #[test]
    fn write_to_invalid_path_reports_false() {
        assert!(!write_text_file("/nonexistent/ioutil/out.txt", "text"));
        assert!(!write_binary_file("/nonexistent/ioutil/out.bin", b"bytes"));
    }
}
