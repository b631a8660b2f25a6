//! Textab CLI - create LaTeX tables from delimited text files

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use log::warn;
#[cfg(feature = "cli")]
use std::fs::OpenOptions;
#[cfg(feature = "cli")]
use std::io::Write;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use textab::{convert_file, parse_separator, render_document, TableOptions};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "textab")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Textab - create LaTeX tables from delimited text files", long_about = None)]
struct Cli {
    /// Input file(s) containing the data to export
    #[arg(required = true)]
    files: Vec<String>,

    /// Column alignment: `l`, `c`, `r`; one character for all columns or one per column
    #[arg(short, long, default_value = "c")]
    align: String,

    /// Caption of the table, printed above it
    #[arg(short, long)]
    caption: Option<String>,

    /// Label of the table, for referencing it
    #[arg(short, long)]
    label: Option<String>,

    /// The input has no header row; every row is table content
    #[arg(short = 'n', long)]
    no_header: bool,

    /// Number of leading rows to skip
    #[arg(short = 'k', long, default_value_t = 0)]
    skip: usize,

    /// Units for each column; use `-`, `/` or `0` for a column without one
    #[arg(short, long, num_args = 1..)]
    units: Vec<String>,

    /// Column separator: `t`/`tab`, `s`/`semi`, `c`/`comma`, or any single character
    #[arg(short, long, default_value = ",")]
    sep: String,

    /// Do not escape LaTeX special characters; fields pass through verbatim
    #[arg(short = 'e', long)]
    no_escape: bool,

    /// Output only the formatted rows, without tabular/table wrapping
    #[arg(short, long)]
    fragment: bool,

    /// Do not indent the LaTeX source (no difference in the rendered table)
    #[arg(short = 'i', long)]
    no_indent: bool,

    /// Output file; results are appended after its existing content
    #[arg(short, long)]
    outfile: Option<String>,

    /// Overwrite the output file instead of appending
    #[arg(short, long)]
    replace: bool,

    /// Save each table to its own file; pass nothing to derive `<input>.tex`
    /// names, a directory, or one path per input file
    #[arg(short = 'x', long, num_args = 0..)]
    separate_outfiles: Option<Vec<String>>,

    /// Produce a whole document (with preamble), ready to be built as a pdf
    #[arg(short, long)]
    preamble: bool,
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let delimiter = match parse_separator(&cli.sep) {
        Ok(d) => d,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let options = TableOptions {
        align: cli.align.clone(),
        caption: cli.caption.clone(),
        label: cli.label.clone(),
        has_header: !cli.no_header,
        skip: cli.skip,
        units: cli.units.clone(),
        escape: !cli.no_escape,
        fragment: cli.fragment,
        indent: !cli.no_indent,
    };

    if cli.fragment && cli.preamble {
        warn!("--preamble has no effect in fragment mode");
    }

    // Convert each file independently; a bad file is reported and skipped
    // so the rest of the batch still goes through.
    let mut tables: Vec<(usize, String)> = Vec::new();
    let mut error_count = 0;
    for (idx, file) in cli.files.iter().enumerate() {
        match convert_file(file, delimiter, &options) {
            Ok(table) => tables.push((idx, table)),
            Err(err) => {
                eprintln!("✗ {}: {}", file, err);
                error_count += 1;
            }
        }
    }

    if tables.is_empty() {
        std::process::exit(1);
    }

    let result = if let Some(ref paths) = cli.separate_outfiles {
        write_separate_files(&cli, &tables, paths, &options)
    } else {
        write_combined(&cli, &tables, &options)
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if error_count > 0 {
        std::process::exit(1);
    }
}

/// Join tables (plus the re-label hint when one label covers several files)
/// into the final output text.
#[cfg(feature = "cli")]
fn assemble(cli: &Cli, tables: &[String], options: &TableOptions) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(tables.len() + 1);
    if cli.label.is_some() && tables.len() > 1 {
        parts.push("% don't forget to manually re-label the tables".to_string());
    }
    parts.extend(tables.iter().cloned());

    if options.fragment {
        parts.join("\n\n")
    } else {
        render_document(&parts, cli.preamble)
    }
}

/// Print to stdout, or append/overwrite a single output file.
#[cfg(feature = "cli")]
fn write_combined(
    cli: &Cli,
    tables: &[(usize, String)],
    options: &TableOptions,
) -> Result<(), String> {
    let bodies: Vec<String> = tables.iter().map(|(_, t)| t.clone()).collect();
    let content = assemble(cli, &bodies, options);

    match &cli.outfile {
        Some(path) => {
            write_output(Path::new(path), &content, cli.replace)
                .map_err(|e| format!("could not write {}: {}", path, e))?;
            if cli.replace {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!("✓ Output appended to: {}", path);
            }
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

/// Write each table to its own output file.
#[cfg(feature = "cli")]
fn write_separate_files(
    cli: &Cli,
    tables: &[(usize, String)],
    paths: &[String],
    options: &TableOptions,
) -> Result<(), String> {
    let outputs = resolve_separate_paths(&cli.files, paths)?;

    for (idx, table) in tables {
        let out_path = &outputs[*idx];
        let content = if options.fragment {
            table.clone()
        } else {
            render_document(std::slice::from_ref(table), cli.preamble)
        };
        write_output(out_path, &content, cli.replace)
            .map_err(|e| format!("could not write {}: {}", out_path.display(), e))?;
        eprintln!("✓ {}", out_path.display());
    }
    Ok(())
}

/// Map the input files to one output path each.
///
/// No paths: `<input>.tex` next to each input. One directory: `<stem>.tex`
/// inside it. Exactly one path per input: pairwise. Anything else is an error.
#[cfg(feature = "cli")]
fn resolve_separate_paths(inputs: &[String], paths: &[String]) -> Result<Vec<PathBuf>, String> {
    if paths.is_empty() {
        return Ok(inputs
            .iter()
            .map(|f| PathBuf::from(f).with_extension("tex"))
            .collect());
    }

    if paths.len() == 1 && Path::new(&paths[0]).is_dir() {
        let dir = Path::new(&paths[0]);
        return Ok(inputs
            .iter()
            .map(|f| {
                let stem = Path::new(f)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "table".to_string());
                dir.join(format!("{}.tex", stem))
            })
            .collect());
    }

    if paths.len() == inputs.len() {
        return Ok(paths.iter().map(PathBuf::from).collect());
    }

    Err(format!(
        "got {} output path(s) for {} input file(s); pass none, a directory, or one per input",
        paths.len(),
        inputs.len()
    ))
}

/// Append to (or overwrite) an output file, creating it if needed.
#[cfg(feature = "cli")]
fn write_output(path: &Path, content: &str, replace: bool) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(!replace)
        .write(true)
        .truncate(replace)
        .open(path)?;
    writeln!(file, "{}", content)
}


#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install textab --features cli");
    eprintln!("  textab [OPTIONS] <FILES>...");
}
