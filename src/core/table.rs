//! Table model and row formatting
//!
//! This module turns the raw records produced by the reader into a validated
//! [`Table`] and renders that table into LaTeX row lines. Every row must have
//! the same field count as the header (or first row); the first offending row
//! is reported by its 1-based index in the input file, counting skipped rows.

use log::warn;

use crate::core::align::{parse_alignment, Alignment};
use crate::core::escape::escape_row;
use crate::utils::error::{TableError, TableResult};

/// Placeholder unit values meaning "this column has no unit"
const UNIT_PLACEHOLDERS: [&str; 3] = ["-", "/", "0"];

/// Four spaces per nesting level, matching hand-written LaTeX
pub const INDENT: &str = "    ";

/// A single table row: an ordered sequence of string fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Row { fields }
    }

    /// Number of fields in this row
    pub fn width(&self) -> usize {
        self.fields.len()
    }
}

/// Per-column alignment and optional unit label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub align: Alignment,
    pub unit: Option<String>,
}

impl ColumnSpec {
    pub fn new(align: Alignment) -> Self {
        ColumnSpec { align, unit: None }
    }

    pub fn with_unit(align: Alignment, unit: impl Into<String>) -> Self {
        ColumnSpec {
            align,
            unit: Some(unit.into()),
        }
    }
}

/// A validated table: optional header, body rows, one spec per column
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
    pub columns: Vec<ColumnSpec>,
    pub caption: Option<String>,
    pub label: Option<String>,
}

impl Table {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Options controlling table building and rendering
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Alignment spec: one character for all columns or one per column
    pub align: String,
    /// Caption printed above the table
    pub caption: Option<String>,
    /// Label for cross-referencing
    pub label: Option<String>,
    /// Whether the first (non-skipped) record is a header row
    pub has_header: bool,
    /// Number of leading records to skip
    pub skip: usize,
    /// Unit labels, one per column; `-`, `/` or `0` marks a unit-less column
    pub units: Vec<String>,
    /// Escape LaTeX special characters in fields
    pub escape: bool,
    /// Emit only the formatted rows, without tabular/table wrapping
    pub fragment: bool,
    /// Indent the LaTeX source (purely cosmetic)
    pub indent: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            align: "c".to_string(),
            caption: None,
            label: None,
            has_header: true,
            skip: 0,
            units: Vec::new(),
            escape: true,
            fragment: false,
            indent: true,
        }
    }
}

/// Build a validated [`Table`] from raw records.
///
/// Skips the first `options.skip` records, takes the next one as the header
/// when headers are enabled, checks that every row matches the table width
/// and attaches alignment and units to the columns. `source` is only used in
/// error messages.
pub fn build_table(
    records: &[Vec<String>],
    options: &TableOptions,
    source: &str,
) -> TableResult<Table> {
    let remaining = records.get(options.skip..).unwrap_or(&[]);
    if remaining.is_empty() {
        return Err(TableError::empty_table(source));
    }

    let width = remaining[0].len();
    for (i, record) in remaining.iter().enumerate() {
        if record.len() != width {
            // 1-based index in the input file, counting skipped records
            return Err(TableError::column_mismatch(
                options.skip + i + 1,
                width,
                record.len(),
            ));
        }
    }

    let (header, body) = if options.has_header {
        (Some(Row::new(remaining[0].clone())), &remaining[1..])
    } else {
        (None, remaining)
    };

    let aligns = parse_alignment(&options.align, width)?;
    let units = resolve_units(options, width, header.is_some())?;

    let columns = aligns
        .into_iter()
        .enumerate()
        .map(|(i, align)| ColumnSpec {
            align,
            unit: units.as_ref().and_then(|u| u[i].clone()),
        })
        .collect();

    Ok(Table {
        header,
        rows: body.iter().map(|r| Row::new(r.clone())).collect(),
        columns,
        caption: options.caption.clone(),
        label: options.label.clone(),
    })
}

/// Validate units against the column count and map out the placeholders.
fn resolve_units(
    options: &TableOptions,
    width: usize,
    has_header: bool,
) -> TableResult<Option<Vec<Option<String>>>> {
    if options.units.is_empty() {
        return Ok(None);
    }
    if !has_header {
        warn!("Units are ignored when the table has no header");
        return Ok(None);
    }
    if options.units.len() != width {
        return Err(TableError::invalid_units(width, options.units.len()));
    }
    Ok(Some(
        options
            .units
            .iter()
            .map(|u| {
                if UNIT_PLACEHOLDERS.contains(&u.as_str()) {
                    None
                } else {
                    Some(u.clone())
                }
            })
            .collect(),
    ))
}

/// Render the table into LaTeX row lines.
///
/// The header (when present) comes first with its units appended as
/// ` [unit]`, followed by a `\midrule`, followed by the body rows. Each row
/// joins its fields with ` & ` and ends with ` \\`. Rows sit two indent
/// levels deep, inside the table and tabular environments.
pub fn format_rows(table: &Table, options: &TableOptions) -> Vec<String> {
    let indent = if options.indent { INDENT } else { "" };
    let prefix = format!("{0}{0}", indent);
    let mut lines = Vec::with_capacity(table.rows.len() + 2);

    if let Some(header) = &table.header {
        let mut fields = if options.escape {
            escape_row(&header.fields)
        } else {
            header.fields.clone()
        };
        for (field, col) in fields.iter_mut().zip(&table.columns) {
            if let Some(unit) = &col.unit {
                let unit = if options.escape {
                    crate::core::escape::escape_field(unit)
                } else {
                    unit.clone()
                };
                field.push_str(&format!(" [{}]", unit));
            }
        }
        lines.push(format!("{}{} \\\\", prefix, fields.join(" & ")));
        lines.push(format!("{}\\midrule", prefix));
    }

    for row in &table.rows {
        let fields = if options.escape {
            escape_row(&row.fields)
        } else {
            row.fields.clone()
        };
        lines.push(format!("{}{} \\\\", prefix, fields.join(" & ")));
    }

    lines
}
