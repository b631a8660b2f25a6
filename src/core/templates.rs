//! LaTeX scaffolding around formatted rows
//!
//! Pure string templating: the formatted row lines are wrapped in a booktabs
//! tabular, optionally inside a `table` float with caption and label, and a
//! batch of tables can be wrapped in a complete compilable document.

use std::fmt::Write;

use crate::core::align::column_spec;
use crate::core::table::{Table, TableOptions, INDENT};

/// Document preamble for standalone output
pub const PREAMBLE: &str = "\\documentclass[11pt, a4paper]{article}\n\
                            \\usepackage{booktabs}\n\
                            \\begin{document}";

/// Reminder emitted when tables are produced without a preamble
pub const BOOKTABS_HINT: &str =
    "\n% \\usepackage{booktabs} % move this to preamble and uncomment";

/// Wrap formatted row lines in `table`/`tabular` scaffolding.
///
/// In fragment mode the rows are returned bare, ready to be pasted into an
/// existing tabular environment.
pub fn wrap_table(lines: &[String], table: &Table, options: &TableOptions) -> String {
    if options.fragment {
        return lines.join("\n");
    }

    let indent = if options.indent { INDENT } else { "" };
    let align = column_spec(
        &table
            .columns
            .iter()
            .map(|c| c.align)
            .collect::<Vec<_>>(),
    );

    let mut out = String::new();
    let _ = writeln!(out, "\\begin{{table}}[htb]");
    let _ = writeln!(out, "{}\\centering", indent);
    if let Some(caption) = &table.caption {
        let _ = writeln!(out, "{}\\caption{{{}}}", indent, caption);
    }
    if let Some(label) = &table.label {
        let _ = writeln!(out, "{}\\label{{{}}}", indent, label);
    }
    let _ = writeln!(out, "{}\\begin{{tabular}}{{@{{}}{}@{{}}}}", indent, align);
    let _ = writeln!(out, "{0}{0}\\toprule", indent);
    for line in lines {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "{0}{0}\\bottomrule", indent);
    let _ = writeln!(out, "{}\\end{{tabular}}", indent);
    let _ = write!(out, "\\end{{table}}");
    out
}

/// Join rendered tables into the final output, optionally as a complete
/// document. Without a preamble a commented `\usepackage{booktabs}` hint is
/// prepended so the snippet still compiles once pasted into a document.
pub fn render_document(tables: &[String], preamble: bool) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(tables.len() + 2);
    if preamble {
        parts.push(PREAMBLE);
    } else {
        parts.push(BOOKTABS_HINT);
    }
    for table in tables {
        parts.push(table);
    }
    if preamble {
        parts.push("\\end{document}\n");
    }
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::build_table;
    use pretty_assertions::assert_eq;

    fn sample_table(options: &TableOptions) -> Table {
        let records = vec![
            vec!["Apples".to_string(), "10.2".to_string()],
            vec!["Bananas".to_string(), "7.3".to_string()],
        ];
        build_table(&records, options, "test.csv").unwrap()
    }

    #[test]
    fn test_wrap_table_no_indent() {
        let options = TableOptions {
            has_header: false,
            indent: false,
            ..Default::default()
        };
        let table = sample_table(&options);
        let lines = crate::core::table::format_rows(&table, &options);
        let output = wrap_table(&lines, &table, &options);
        assert_eq!(
            output,
            "\\begin{table}[htb]\n\
             \\centering\n\
             \\begin{tabular}{@{}cc@{}}\n\
             \\toprule\n\
             Apples & 10.2 \\\\\n\
             Bananas & 7.3 \\\\\n\
             \\bottomrule\n\
             \\end{tabular}\n\
             \\end{table}"
        );
    }

    #[test]
    fn test_wrap_table_caption_label_order() {
        let options = TableOptions {
            has_header: false,
            indent: false,
            caption: Some("Fruit".to_string()),
            label: Some("tab:fruit".to_string()),
            ..Default::default()
        };
        let table = sample_table(&options);
        let output = wrap_table(&[], &table, &options);
        let caption_pos = output.find("\\caption{Fruit}").unwrap();
        let label_pos = output.find("\\label{tab:fruit}").unwrap();
        assert!(caption_pos < label_pos);
    }

    #[test]
    fn test_wrap_table_indented() {
        let options = TableOptions {
            has_header: false,
            ..Default::default()
        };
        let table = sample_table(&options);
        let output = wrap_table(&[], &table, &options);
        assert!(output.contains("    \\centering"));
        assert!(output.contains("        \\toprule"));
        assert!(output.contains("    \\end{tabular}"));
        assert!(output.starts_with("\\begin{table}[htb]"));
        assert!(output.ends_with("\\end{table}"));
    }

    #[test]
    fn test_fragment_is_rows_only() {
        let options = TableOptions {
            has_header: false,
            indent: false,
            fragment: true,
            ..Default::default()
        };
        let table = sample_table(&options);
        let lines = crate::core::table::format_rows(&table, &options);
        let output = wrap_table(&lines, &table, &options);
        assert_eq!(output, "Apples & 10.2 \\\\\nBananas & 7.3 \\\\");
    }

    #[test]
    fn test_render_document_with_preamble() {
        let output = render_document(&["TABLE".to_string()], true);
        assert!(output.starts_with("\\documentclass"));
        assert!(output.contains("\\usepackage{booktabs}"));
        assert!(output.contains("\\begin{document}"));
        assert!(output.contains("TABLE"));
        assert!(output.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn test_render_document_snippet_hint() {
        let output = render_document(&["TABLE".to_string()], false);
        assert!(output.contains("% \\usepackage{booktabs}"));
        assert!(!output.contains("\\begin{document}"));
    }
}
