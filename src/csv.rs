// src/csv.rs
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/* ---------------- Column layout ---------------- */

/// Header layout shared by every row decoded from one resource.
///
/// `names` holds the distinct header names in first-appearance order.
/// A repeated header resolves to the value in its *last* column.
#[derive(Debug, PartialEq, Eq)]
pub struct Columns {
    names: Vec<String>,
    slots: Vec<usize>,
    index: HashMap<String, usize>,
    width: usize,
}

impl Columns {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut slots: Vec<usize> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut width = 0usize;

        for (pos, h) in headers.into_iter().enumerate() {
            let name = h.into();
            width = pos + 1;
            match index.get(&name) {
                Some(&i) => slots[i] = pos,
                None => {
                    index.insert(name.clone(), names.len());
                    names.push(name);
                    slots.push(pos);
                }
            }
        }

        Self { names, slots, index, width }
    }

    /// Distinct column names, in header order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct keys a row carries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of raw header cells (duplicates included).
    pub fn width(&self) -> usize {
        self.width
    }

    fn slot(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&i| self.slots[i])
    }
}

/* ---------------- Row record ---------------- */

/// One decoded data line: column name → untyped string value.
#[derive(Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<Columns>,
    values: Vec<String>,
}

impl Row {
    /// Build a row against a layout; missing trailing values become `""`,
    /// values beyond the header width are dropped.
    pub fn new(columns: Arc<Columns>, mut values: Vec<String>) -> Self {
        values.resize(columns.width(), s!());
        Self { columns, values }
    }

    /// Single-layout convenience for callers that build rows by hand.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (keys, values): (Vec<String>, Vec<String>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).unzip();
        Self::new(Arc::new(Columns::new(keys)), values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns.slot(name).map(|i| self.values[i].as_str())
    }

    /// Like `get`, but an absent column reads as `""`.
    pub fn field(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn columns(&self) -> &Arc<Columns> {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// (name, value) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.columns
            .names
            .iter()
            .zip(self.columns.slots.iter())
            .map(|(n, &i)| (n.as_str(), self.values[i].as_str()))
    }

    /// Values only, aligned with `columns().names()`.
    pub fn values(&self) -> Vec<String> {
        self.iter().map(|(_, v)| s!(v)).collect()
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/* ---------------- Decoding ---------------- */

/// Decode header-first comma-separated text into rows.
///
/// Naive split: no quoting, so a literal comma inside a field shifts the
/// rest of that line. Never fails; degenerate input yields no rows.
pub fn decode(text: &str) -> Vec<Row> {
    let mut lines = text.trim().split('\n');

    let Some(header_line) = lines.next() else { return Vec::new() };
    let mut data = lines.peekable();
    if data.peek().is_none() {
        return Vec::new();
    }

    let columns = Arc::new(Columns::new(header_line.split(',').map(str::trim)));

    data.map(|line| {
        let values = line.split(',').map(|v| s!(v.trim())).collect();
        Row::new(Arc::clone(&columns), values)
    })
    .collect()
}

/* ---------------- Writing ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV line to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write decoded rows back out. Header comes from the first row's layout.
pub fn write_rows<W: Write>(mut w: W, rows: &[Row], include_headers: bool, delim: Delim) -> io::Result<()> {
    let Some(first) = rows.first() else { return Ok(()) };
    if include_headers {
        write_row(&mut w, first.columns().names(), delim)?;
    }
    for r in rows {
        write_row(&mut w, &r.values(), delim)?;
    }
    Ok(())
}

/// In-memory variant of `write_rows`.
pub fn rows_to_string(rows: &[Row], include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_rows(&mut buf, rows, include_headers, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
