use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::alignment::align_tokens;
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::table::{Cell, Style, Table};
use crate::tokenizer::tokenize;
use crate::types::{resolve_index, MultiRecord};

/// Column labels for hypothesis files: the base name, with `(2)`, `(3)`, ...
/// appended when several files share one.
pub fn hypothesis_labels(paths: &[PathBuf]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    paths
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                name
            } else {
                format!("{} ({})", name, count)
            }
        })
        .collect()
}

/// Token rows of a record: source, reference, then each hypothesis.
pub fn comparison_rows(record: &MultiRecord) -> Vec<Vec<&str>> {
    let mut columns = vec![tokenize(&record.source), tokenize(&record.reference)];
    columns.extend(record.hypotheses.iter().map(|h| tokenize(h)));
    align_tokens(&columns)
}

fn hypothesis_style(token: &str, reference: &str) -> Style {
    if token.is_empty() {
        Style::Plain
    } else if token == reference {
        Style::Match
    } else {
        Style::Mismatch
    }
}

pub fn comparison_table(
    record: &MultiRecord,
    labels: &[String],
    display: &DisplayConfig,
) -> Table {
    let columns = 3 + labels.len();
    let width = display.column_width(columns);
    let headers = ["Token", "Source", "Reference"]
        .into_iter()
        .map(str::to_string)
        .chain(labels.iter().cloned());
    let mut table = Table::new(vec![width; columns]).with_headers(headers);
    for (i, row) in comparison_rows(record).into_iter().enumerate() {
        let reference = row.get(1).copied().unwrap_or("");
        let mut cells = vec![Cell::new(i.to_string(), Style::Label)];
        for (column, token) in row.iter().enumerate() {
            let style = if column < 2 {
                Style::Plain
            } else {
                hypothesis_style(token, reference)
            };
            cells.push(Cell::new(*token, style));
        }
        table.add_row(cells);
    }
    table
}

pub fn compare<W: Write>(
    records: &[MultiRecord],
    index: i64,
    hypothesis_files: &[PathBuf],
    display: &DisplayConfig,
    out: &mut W,
) -> Result<()> {
    let resolved = resolve_index(index, records.len()).ok_or(Error::IndexOutOfRange {
        index,
        len: records.len(),
    })?;
    debug!(index, resolved, systems = hypothesis_files.len(), "comparing hypotheses");
    let labels = hypothesis_labels(hypothesis_files);
    comparison_table(&records[resolved], &labels, display).write_to(out, display.color)?;
    Ok(())
}
