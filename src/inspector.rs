use std::io::Write;

use tracing::debug;

use crate::alignment::align_tokens;
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::table::{Cell, Style, Table};
use crate::tokenizer::tokenize;
use crate::types::{resolve_index, Record};

/// Token rows of a record: one `[source, reference, hypothesis]` triple per position.
pub fn sentence_rows(record: &Record) -> Vec<Vec<&str>> {
    align_tokens(&[
        tokenize(&record.source),
        tokenize(&record.reference),
        tokenize(&record.hypothesis),
    ])
}

pub fn sentence_table(record: &Record, display: &DisplayConfig) -> Table {
    let width = display.column_width(4);
    let mut table =
        Table::new(vec![width; 4]).with_headers(["Token", "Source", "Reference", "Hypothesis"]);
    for (i, row) in sentence_rows(record).into_iter().enumerate() {
        let mut cells = vec![Cell::new(i.to_string(), Style::Label)];
        cells.extend(row.into_iter().map(Cell::from));
        table.add_row(cells);
    }
    table
}

pub fn inspect_sentence<W: Write>(
    records: &[Record],
    index: i64,
    display: &DisplayConfig,
    out: &mut W,
) -> Result<()> {
    let resolved = resolve_index(index, records.len()).ok_or(Error::IndexOutOfRange {
        index,
        len: records.len(),
    })?;
    let table = sentence_table(&records[resolved], display);
    debug!(index, resolved, tokens = table.rows().len(), "inspecting sentence");
    table.write_to(out, display.color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> DisplayConfig {
        DisplayConfig {
            width: 53,
            color: false,
        }
    }

    #[test]
    fn rows_follow_longest_token_list() {
        let record = Record::new("Hello world", "Bonjour le monde", "Bonjour monde");
        assert_eq!(
            sentence_rows(&record),
            vec![
                vec!["Hello", "Bonjour", "Bonjour"],
                vec!["world", "le", "monde"],
                vec!["", "monde", ""],
            ]
        );
    }

    #[test]
    fn blank_record_has_no_rows() {
        let record = Record::new("", "  ", "");
        assert!(sentence_rows(&record).is_empty());
    }

    #[test]
    fn renders_one_table_row_per_token() {
        let records = vec![Record::new("a b", "x", "")];
        let mut out = Vec::new();
        inspect_sentence(&records, 0, &narrow(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\
+------------+------------+------------+------------+
| Token      | Source     | Reference  | Hypothesis |
+============+============+============+============+
| 0          | a          | x          |            |
+------------+------------+------------+------------+
| 1          | b          |            |            |
+------------+------------+------------+------------+
";
        assert_eq!(text, expected);
    }

    #[test]
    fn negative_index_counts_from_end() {
        let records = vec![Record::new("first", "", ""), Record::new("last", "", "")];
        let mut out = Vec::new();
        inspect_sentence(&records, -1, &narrow(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("| last "));
    }

    #[test]
    fn out_of_range_index_fails() {
        let records = vec![Record::default()];
        let mut out = Vec::<u8>::new();
        let err = inspect_sentence(&records, 1, &narrow(), &mut out).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
        assert!(out.is_empty());
    }
}
