// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::csv::{write_rows, Delim, Row};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// `None` for non-delimited formats.
    pub fn delimiter(self) -> Option<Delim> {
        match self {
            ExportFormat::Csv => Some(Delim::Csv),
            ExportFormat::Tsv => Some(Delim::Tsv),
            ExportFormat::Json => None,
        }
    }
}

/// Where and how query results are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// `None` writes to stdout.
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, include_headers: true, out: None }
    }
}

/// Write rows in the chosen format to any writer.
pub fn write_table<W: Write>(mut w: W, rows: &[Row], export: &ExportOptions) -> io::Result<()> {
    match export.format.delimiter() {
        Some(delim) => write_rows(&mut w, rows, export.include_headers, delim)?,
        None => write_json(&mut w, rows)?,
    }
    w.flush()
}

/// Pretty JSON for any serializable value, newline-terminated.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut w: W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, value).map_err(io::Error::other)?;
    writeln!(w)
}

/// Rows to `export.out` (or stdout). Returns the path written, if any.
pub fn export_rows(rows: &[Row], export: &ExportOptions) -> io::Result<Option<PathBuf>> {
    with_output(export, |w| write_table(w, rows, export))
}

/// A single serializable value to `export.out` (or stdout) as JSON.
pub fn export_value<T: Serialize + ?Sized>(value: &T, export: &ExportOptions) -> io::Result<Option<PathBuf>> {
    with_output(export, |w| write_json(w, value))
}

fn with_output<F>(export: &ExportOptions, write: F) -> io::Result<Option<PathBuf>>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match &export.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
            write(&mut out)?;
            out.flush()?;
            Ok(Some(path.clone()))
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            Ok(None)
        }
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
