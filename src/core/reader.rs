//! Delimited input reading
//!
//! Thin wrapper around the `csv` crate. Header handling and width checking
//! are deliberately left to the table builder: the reader is configured with
//! `has_headers(false)` and `flexible(true)` and just hands back raw records.

use crate::utils::error::{TableError, TableResult};
use std::path::Path;

/// Resolve a separator argument to the delimiter byte.
///
/// Accepts the shorthand aliases `t`/`tab`/`\t` (tab), `s`/`semi`/`;`
/// (semicolon) and `c`/`comma`/`,` (comma), or any single ASCII character.
pub fn parse_separator(sep: &str) -> TableResult<u8> {
    match sep.to_lowercase().as_str() {
        "t" | "tab" | "\\t" | "\t" => Ok(b'\t'),
        "s" | "semi" | ";" => Ok(b';'),
        "c" | "comma" | "," => Ok(b','),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(TableError::invalid_separator(sep)),
            }
        }
    }
}

/// Parse delimited text into raw records.
pub fn read_records(input: &str, delimiter: u8) -> TableResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| TableError::IoError {
            message: e.to_string(),
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

/// Read a delimited file into raw records.
///
/// A missing file is reported as `FileNotFound`; other read failures
/// surface as `IoError`.
pub fn read_file_records(path: impl AsRef<Path>, delimiter: u8) -> TableResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TableError::file_not_found(path.to_string_lossy()));
    }
    let content = std::fs::read_to_string(path)?;
    read_records(&content, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_separator_aliases() {
        assert_eq!(parse_separator("t").unwrap(), b'\t');
        assert_eq!(parse_separator("tab").unwrap(), b'\t');
        assert_eq!(parse_separator("TAB").unwrap(), b'\t');
        assert_eq!(parse_separator("s").unwrap(), b';');
        assert_eq!(parse_separator("semi").unwrap(), b';');
        assert_eq!(parse_separator(";").unwrap(), b';');
        assert_eq!(parse_separator("c").unwrap(), b',');
        assert_eq!(parse_separator(",").unwrap(), b',');
    }

    #[test]
    fn test_separator_arbitrary_char() {
        assert_eq!(parse_separator("|").unwrap(), b'|');
        assert_eq!(parse_separator(":").unwrap(), b':');
    }

    #[test]
    fn test_separator_invalid() {
        assert!(parse_separator("||").is_err());
        assert!(parse_separator("").is_err());
        assert!(parse_separator("é").is_err());
    }

    #[test]
    fn test_separator_non_ascii_message_names_restriction() {
        // The csv delimiter is one byte, so a multi-byte character cannot
        // be a separator; the message has to make that visible.
        let err = parse_separator("é").unwrap_err();
        assert!(err.to_string().contains("ASCII"));
    }

    #[test]
    fn test_read_records_comma() {
        let records = read_records("a,b\nc,d\n", b',').unwrap();
        assert_eq!(
            records,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }

    #[test]
    fn test_read_records_flexible_widths() {
        // Width validation belongs to the table builder, not the reader.
        let records = read_records("a,b,c\nd,e\n", b',').unwrap();
        assert_eq!(records[0].len(), 3);
        assert_eq!(records[1].len(), 2);
    }

    #[test]
    fn test_read_records_semicolon() {
        let records = read_records("a;b\n", b';').unwrap();
        assert_eq!(records, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_read_file_missing() {
        let err = read_file_records("definitely/not/here.csv", b',').unwrap_err();
        assert!(matches!(err, TableError::FileNotFound { .. }));
    }
}
