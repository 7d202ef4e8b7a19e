//! Checksum manifest parsing
//!
//! Decodes the two-column checksum-utility layout every batch carries: 32
//! hex characters, a separator space, a one-character mode flag (space or
//! `*`), then the filename verbatim to end of line. Checksums are taken on
//! trust and never recomputed against content.

use crate::domain::errors::SubmissionError;
use std::collections::HashMap;

/// Length of the hex checksum column
const CHECKSUM_LEN: usize = 32;

/// Byte offset where the filename starts on each line
const FILENAME_OFFSET: usize = CHECKSUM_LEN + 2;

/// Parses manifest bytes into a name-to-checksum mapping
///
/// Blank lines are skipped. A duplicate filename overwrites the earlier
/// entry, so the last line wins. Lines beginning with a backslash use the
/// checksum-utility escaped-filename convention, which is not supported.
///
/// # Errors
///
/// Returns `UnsupportedManifestFormat` when the bytes are not UTF-8 text or
/// any line deviates from the fixed layout.
pub fn parse_manifest(bytes: &[u8]) -> Result<HashMap<String, String>, SubmissionError> {
    let text = std::str::from_utf8(bytes).map_err(|_| SubmissionError::UnsupportedManifestFormat {
        reason: "manifest is not valid UTF-8 text".to_string(),
    })?;

    let mut entries = HashMap::new();

    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let (name, checksum) = parse_line(line).map_err(|reason| {
            SubmissionError::UnsupportedManifestFormat {
                reason: format!("line {}: {}", idx + 1, reason),
            }
        })?;
        entries.insert(name.to_string(), checksum.to_string());
    }

    Ok(entries)
}

/// Splits one manifest line into `(filename, checksum)`
fn parse_line(line: &str) -> Result<(&str, &str), String> {
    if line.starts_with('\\') {
        return Err("escaped filenames are not supported".to_string());
    }

    let bytes = line.as_bytes();
    if bytes.len() <= FILENAME_OFFSET {
        return Err(format!(
            "expected at least {} characters, got {}",
            FILENAME_OFFSET + 1,
            bytes.len()
        ));
    }

    if !bytes[..CHECKSUM_LEN].iter().all(u8::is_ascii_hexdigit) {
        return Err("checksum is not 32 hex characters".to_string());
    }
    if bytes[CHECKSUM_LEN] != b' ' {
        return Err("missing separator after checksum".to_string());
    }
    let flag = bytes[CHECKSUM_LEN + 1];
    if flag != b' ' && flag != b'*' {
        return Err(format!("unknown mode flag '{}'", flag as char));
    }

    // The first 34 bytes are all ASCII at this point, so the filename slice
    // starts on a char boundary.
    Ok((&line[FILENAME_OFFSET..], &line[..CHECKSUM_LEN]))
}
