//! Column alignment parsing
//!
//! An alignment spec is a string of `l`, `c` and `r` characters. A single
//! character applies to every column; a string as long as the table is wide
//! assigns one character per column. Anything else is rejected.

use crate::utils::error::{TableError, TableResult};

/// Column alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Convert to the LaTeX column specification character
    pub fn to_char(&self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }

    /// Parse from a column specification character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Alignment::Left),
            'c' => Some(Alignment::Center),
            'r' => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Parse an alignment spec string into one `Alignment` per column.
///
/// A one-character spec is broadcast across all columns; a spec whose length
/// equals `columns` is applied positionally. Any other length, or any
/// character outside `lcr`, yields `InvalidAlignmentSpec`.
pub fn parse_alignment(spec: &str, columns: usize) -> TableResult<Vec<Alignment>> {
    let parsed: Option<Vec<Alignment>> = spec.chars().map(Alignment::from_char).collect();
    let parsed = parsed.ok_or_else(|| TableError::invalid_alignment(spec, columns))?;

    match parsed.len() {
        1 => Ok(vec![parsed[0]; columns]),
        n if n == columns => Ok(parsed),
        _ => Err(TableError::invalid_alignment(spec, columns)),
    }
}

/// Build the tabular column spec string (e.g. `lcr`) from parsed alignments.
pub fn column_spec(aligns: &[Alignment]) -> String {
    aligns.iter().map(Alignment::to_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_char_broadcast() {
        let aligns = parse_alignment("c", 3).unwrap();
        assert_eq!(aligns, vec![Alignment::Center; 3]);

        let aligns = parse_alignment("r", 1).unwrap();
        assert_eq!(aligns, vec![Alignment::Right]);
    }

    #[test]
    fn test_positional_spec() {
        let aligns = parse_alignment("lcr", 3).unwrap();
        assert_eq!(
            aligns,
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(parse_alignment("lc", 3).is_err());
        assert!(parse_alignment("lcrr", 3).is_err());
        assert!(parse_alignment("", 3).is_err());
    }

    #[test]
    fn test_unknown_character_rejected() {
        assert!(parse_alignment("x", 2).is_err());
        assert!(parse_alignment("lp", 2).is_err());
    }

    #[test]
    fn test_column_spec_roundtrip() {
        let aligns = parse_alignment("rcl", 3).unwrap();
        assert_eq!(column_spec(&aligns), "rcl");
    }
}
