//! Dataset loading: CSV, JSON arrays, JSON lines and spreadsheets into named-field records

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use serde_json::Value;

use crate::config::DatasetConfig;
use crate::error::{Error, Result};

/// One cell of a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Missing,
}

impl FieldValue {
    /// Non-empty textual form of the cell, numbers included
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) if !s.trim().is_empty() => Some(Cow::Borrowed(s)),
            FieldValue::Number(n) if n.is_finite() => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// Numeric form of the cell; text is trimmed and parsed
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
            FieldValue::Missing => return None,
        };
        n.is_finite().then_some(n)
    }

    fn from_cell(cell: String) -> Self {
        if cell.trim().is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::Text(cell)
        }
    }

    fn from_sheet(cell: &Data) -> Self {
        match cell {
            Data::Empty | Data::Error(_) => FieldValue::Missing,
            Data::Int(n) => FieldValue::Number(*n as f64),
            Data::Float(n) => FieldValue::Number(*n),
            Data::String(s) => FieldValue::from_cell(s.clone()),
            other => FieldValue::Text(other.to_string()),
        }
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Missing,
            Value::Number(n) => n.as_f64().map_or(FieldValue::Missing, FieldValue::Number),
            Value::String(s) => FieldValue::from_cell(s),
            Value::Bool(b) => FieldValue::Text(b.to_string()),
            // Lists of strings (e.g. skills) collapse to the delimited form CSV exports use
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        Value::Null => None,
                        other => Some(other.to_string()),
                    })
                    .collect();
                FieldValue::from_cell(parts.join(", "))
            }
            obj @ Value::Object(_) => FieldValue::Text(obj.to_string()),
        }
    }
}

static MISSING: FieldValue = FieldValue::Missing;

/// A single row, keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn with_text(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(field, FieldValue::Text(value.into()))
    }

    pub fn with_number(self, field: impl Into<String>, value: f64) -> Self {
        self.with(field, FieldValue::Number(value))
    }

    /// Cell for `field`, `Missing` when the column is absent from this row
    pub fn get(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&MISSING)
    }
}

/// Loaded rows plus the column order seen in the source
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Rename columns (`old -> new`) in both the header and every record
    pub fn rename_columns(mut self, renames: &HashMap<String, String>) -> Self {
        if renames.is_empty() {
            return self;
        }
        for column in &mut self.columns {
            if let Some(new) = renames.get(column.as_str()) {
                *column = new.clone();
            }
        }
        for record in &mut self.records {
            record.fields = std::mem::take(&mut record.fields)
                .into_iter()
                .map(|(k, v)| match renames.get(&k) {
                    Some(new) => (new.clone(), v),
                    None => (k, v),
                })
                .collect();
        }
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load a dataset, choosing the parser from the file extension
pub fn load_dataset(path: &Path, options: &DatasetConfig) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> std::result::Result<Dataset, String> = match ext.as_str() {
        "csv" => parse_csv,
        "json" => parse_json,
        "jsonl" | "ndjson" => parse_json_lines,
        "xlsx" | "xlsm" | "xls" | "ods" => {
            if !path.exists() {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            return read_workbook(path, options.sheet.as_deref());
        }
        _ => return Err(Error::UnsupportedFormat(ext)),
    };

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse(&content).map_err(|message| malformed(path, message))?;

    tracing::debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

fn malformed(path: &Path, message: String) -> Error {
    Error::Dataset {
        path: PathBuf::from(path),
        message,
    }
}

/// Parse CSV text with a header row. Quoted fields may contain the
/// delimiter, newlines and `""` escapes; blank lines are skipped.
pub fn parse_csv(content: &str) -> std::result::Result<Dataset, String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| e.to_string())?;
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if row.len() > columns.len() {
            tracing::trace!(
                line = row.position().map(|p| p.line()),
                extra = row.len() - columns.len(),
                "ignoring cells beyond header width"
            );
        }
        let fields = columns
            .iter()
            .cloned()
            .zip(row.iter().map(|c| FieldValue::from_cell(c.to_string())))
            .collect();
        records.push(Record { fields });
    }

    Ok(Dataset { columns, records })
}

/// Read one worksheet: the named one, or the first sheet when `sheet` is `None`.
/// The first row is the header.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|e| malformed(path, e.to_string()))?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                malformed(
                    path,
                    format!("no sheet named '{}' (found: {})", wanted, names.join(", ")),
                )
            })?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| malformed(path, "workbook has no sheets".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| malformed(path, e.to_string()))?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return Ok(Dataset::default()),
    };

    let mut records = Vec::new();
    for row in rows {
        let cells: Vec<FieldValue> = row.iter().map(FieldValue::from_sheet).collect();
        if cells.iter().all(|c| *c == FieldValue::Missing) {
            continue;
        }
        let fields = columns.iter().cloned().zip(cells).collect();
        records.push(Record { fields });
    }

    tracing::debug!(sheet = %name, rows = records.len(), "read worksheet");
    Ok(Dataset { columns, records })
}

/// Parse a JSON array of objects
pub fn parse_json(content: &str) -> std::result::Result<Dataset, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let Value::Array(items) = value else {
        return Err("expected a top-level array of objects".to_string());
    };
    collect_objects(items.into_iter().enumerate().map(|(i, v)| (i + 1, v)))
}

/// Parse one JSON object per non-blank line
pub fn parse_json_lines(content: &str) -> std::result::Result<Dataset, String> {
    let mut items = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value =
            serde_json::from_str(line).map_err(|e| format!("line {}: {}", idx + 1, e))?;
        items.push((idx + 1, value));
    }
    collect_objects(items.into_iter())
}

fn collect_objects(
    items: impl Iterator<Item = (usize, Value)>,
) -> std::result::Result<Dataset, String> {
    let mut columns: Vec<String> = Vec::new();
    let mut records = Vec::new();

    for (position, item) in items {
        let Value::Object(map) = item else {
            return Err(format!("record {} is not an object", position));
        };
        let mut fields = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let key = key.trim().to_string();
            if !columns.contains(&key) {
                columns.push(key.clone());
            }
            fields.insert(key, FieldValue::from_json(value));
        }
        records.push(Record { fields });
    }

    Ok(Dataset { columns, records })
}
