use std::path::Path;

use crate::parsing::bam::ParseError;

/// Parse a target definition file: one `label<TAB>sequence` entry per line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_targets_file(path: &Path) -> Result<Vec<(String, String)>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_targets_text(&content)
}

/// Parse target definition text: one `label<TAB>sequence` entry per line.
///
/// Blank lines and lines starting with `#` are skipped. Entry order is
/// preserved; it decides the matching tie-break downstream.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has no tab separator, an
/// empty label or sequence, or if no entries are found.
pub fn parse_targets_text(text: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut entries = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let Some((label, sequence)) = line.split_once('\t') else {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has no tab between label and sequence"
            )));
        };

        let label = label.trim();
        let sequence = sequence.trim();

        if label.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty label"
            )));
        }
        if sequence.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty sequence"
            )));
        }

        entries.push((label.to_string(), sequence.to_string()));
    }

    if entries.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No targets found in file".to_string(),
        ));
    }

    Ok(entries)
}
