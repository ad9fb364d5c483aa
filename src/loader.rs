//! Reading aligned records from plain-text line files or JSON-lines files.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::alignment::zip_longest;
use crate::config::{InputSource, JsonKeys};
use crate::error::{Error, Result};
use crate::types::{MultiRecord, Record};

/// Lines of a UTF-8 file with `\n` / `\r\n` terminators stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read lines");
    Ok(lines)
}

fn warn_on_mismatch(paths: &[&Path], lengths: &[usize]) {
    let longest = lengths.iter().copied().max().unwrap_or(0);
    for (path, len) in paths.iter().zip(lengths) {
        if *len != longest {
            warn!(
                path = %path.display(),
                lines = len,
                expected = longest,
                "line count mismatch, padding with empty lines"
            );
        }
    }
}

pub fn load(input: &InputSource) -> Result<Vec<Record>> {
    match input {
        InputSource::Plain {
            source,
            reference,
            hypothesis,
        } => load_plain(source, reference, hypothesis),
        InputSource::JsonLines { path, keys } => load_json_lines(path, keys),
    }
}

/// Aligns three line files index-wise, padding shorter files with empty strings.
pub fn load_plain(source: &Path, reference: &Path, hypothesis: &Path) -> Result<Vec<Record>> {
    let columns = [read_lines(source)?, read_lines(reference)?, read_lines(hypothesis)?];
    warn_on_mismatch(
        &[source, reference, hypothesis],
        &columns.iter().map(Vec::len).collect::<Vec<_>>(),
    );
    Ok(zip_longest(&columns, String::new())
        .into_iter()
        .map(|row| {
            let mut fields = row.into_iter();
            Record {
                source: fields.next().unwrap_or_default(),
                reference: fields.next().unwrap_or_default(),
                hypothesis: fields.next().unwrap_or_default(),
            }
        })
        .collect())
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn extract_field(
    object: &serde_json::Map<String, Value>,
    key: &str,
    path: &Path,
    line: usize,
) -> Result<String> {
    object
        .get(key)
        .map(field_text)
        .ok_or_else(|| Error::MissingKey {
            path: path.to_path_buf(),
            line,
            key: key.to_string(),
        })
}

/// One record per non-blank line of a JSON-lines file.
pub fn load_json_lines(path: &Path, keys: &JsonKeys) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(raw).map_err(|source| Error::JsonParse {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        let object = value.as_object().ok_or_else(|| Error::NotAnObject {
            path: path.to_path_buf(),
            line,
        })?;
        records.push(Record::new(
            extract_field(object, &keys.source, path, line)?,
            extract_field(object, &keys.reference, path, line)?,
            extract_field(object, &keys.hypothesis, path, line)?,
        ));
    }
    debug!(path = %path.display(), records = records.len(), "read JSON lines");
    Ok(records)
}

/// Aligns source, reference and every hypothesis file, padding to the longest.
pub fn load_multi(
    source: &Path,
    reference: &Path,
    hypotheses: &[PathBuf],
) -> Result<Vec<MultiRecord>> {
    let mut columns = vec![read_lines(source)?, read_lines(reference)?];
    for hypothesis in hypotheses {
        columns.push(read_lines(hypothesis)?);
    }
    let mut paths: Vec<&Path> = vec![source, reference];
    paths.extend(hypotheses.iter().map(PathBuf::as_path));
    warn_on_mismatch(&paths, &columns.iter().map(Vec::len).collect::<Vec<_>>());

    Ok(zip_longest(&columns, String::new())
        .into_iter()
        .map(|row| {
            let mut fields = row.into_iter();
            MultiRecord {
                source: fields.next().unwrap_or_default(),
                reference: fields.next().unwrap_or_default(),
                hypotheses: fields.collect(),
            }
        })
        .collect())
}
