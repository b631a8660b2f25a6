//! # textab
//!
//! Turn delimited text files (CSV, TSV, ...) into LaTeX tables.
//!
//! ## Features
//!
//! - **Booktabs Output**: clean `\toprule`/`\midrule`/`\bottomrule` tables
//! - **Configurable Separator**: comma, tab, semicolon or any single character
//! - **Escaping**: LaTeX special characters escaped in a single pass
//! - **Alignment**: one character for all columns or one per column
//! - **Units**: per-column unit labels appended to the header
//! - **Fragments & Documents**: bare rows, floats, or a compilable document
//!
//! ## Usage Examples
//!
//! ```rust
//! use textab::{convert_str, TableOptions};
//!
//! let options = TableOptions {
//!     has_header: false,
//!     indent: false,
//!     ..Default::default()
//! };
//! let table = convert_str("Apples,10.2\nBananas,7.3\n", b',', &options).unwrap();
//! assert!(table.contains("Apples & 10.2 \\\\"));
//! assert!(table.contains("\\begin{tabular}{@{}cc@{}}"));
//! ```
//!
//! Batches of tables can be joined into a standalone document:
//!
//! ```rust
//! use textab::{convert_str, render_document, TableOptions};
//!
//! let options = TableOptions { has_header: false, ..Default::default() };
//! let table = convert_str("a,b\n", b',', &options).unwrap();
//! let doc = render_document(&[table], true);
//! assert!(doc.starts_with("\\documentclass"));
//! ```

/// Core conversion modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export core conversion modules
pub use core::align;
pub use core::escape;
pub use core::reader;
pub use core::table;
pub use core::templates;

// Re-export the common types and entry points
pub use core::align::{parse_alignment, Alignment};
pub use core::escape::escape_field;
pub use core::reader::{parse_separator, read_file_records, read_records};
pub use core::table::{build_table, format_rows, ColumnSpec, Row, Table, TableOptions};
pub use core::templates::render_document;
pub use utils::error::{TableError, TableResult};

use std::path::Path;

/// Convert delimited text to a LaTeX table.
///
/// # Arguments
/// * `input` - delimited text (one record per line)
/// * `delimiter` - field separator byte (see [`parse_separator`])
/// * `options` - table building and rendering options
///
/// # Returns
/// The rendered LaTeX table (a bare row fragment when
/// `options.fragment` is set).
pub fn convert_str(input: &str, delimiter: u8, options: &TableOptions) -> TableResult<String> {
    let records = reader::read_records(input, delimiter)?;
    let table = table::build_table(&records, options, "<input>")?;
    let lines = table::format_rows(&table, options);
    Ok(templates::wrap_table(&lines, &table, options))
}

/// Convert a delimited file to a LaTeX table.
///
/// Error messages (empty input, column mismatches) name the file.
pub fn convert_file(
    path: impl AsRef<Path>,
    delimiter: u8,
    options: &TableOptions,
) -> TableResult<String> {
    let path = path.as_ref();
    let records = reader::read_file_records(path, delimiter)?;
    let table = table::build_table(&records, options, &path.to_string_lossy())?;
    let lines = table::format_rows(&table, options);
    Ok(templates::wrap_table(&lines, &table, options))
}
