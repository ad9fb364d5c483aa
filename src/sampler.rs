use std::io::Write;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{DisplayConfig, MIN_COLUMN_WIDTH};
use crate::error::Result;
use crate::table::{Cell, Style, Table};
use crate::types::Record;

const LABEL_WIDTH: usize = "hypothesis".len();

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Record indices to show, in display order: a uniform shuffle of `0..len`
/// cut down to at most `nsamp` entries.
pub fn sample_indices<R: Rng + ?Sized>(len: usize, nsamp: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices.truncate(nsamp);
    indices
}

/// Stacked source/reference/hypothesis table. The hypothesis row is left out when empty.
pub fn sample_table(
    position: usize,
    index: usize,
    record: &Record,
    display: &DisplayConfig,
) -> Table {
    let text_width = display
        .width
        .saturating_sub(LABEL_WIDTH + 7)
        .max(MIN_COLUMN_WIDTH);
    let mut table = Table::new(vec![LABEL_WIDTH, text_width])
        .with_title(format!("#{} (index {})", position, index));
    let mut fields = vec![("source", &record.source), ("reference", &record.reference)];
    if !record.hypothesis.is_empty() {
        fields.push(("hypothesis", &record.hypothesis));
    }
    for (label, text) in fields {
        table.add_row([Cell::new(label, Style::Label), Cell::from(text.as_str())]);
    }
    table
}

pub fn inspect_translations<W: Write, R: Rng + ?Sized>(
    records: &[Record],
    nsamp: usize,
    rng: &mut R,
    display: &DisplayConfig,
    out: &mut W,
) -> Result<()> {
    let indices = sample_indices(records.len(), nsamp, rng);
    info!(records = records.len(), nsamp, shown = indices.len(), "sampling translations");
    for (i, index) in indices.into_iter().enumerate() {
        debug!(position = i + 1, index, "sample");
        if i > 0 {
            writeln!(out)?;
        }
        sample_table(i + 1, index, &records[index], display).write_to(out, display.color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("src {i}"), format!("ref {i}"), format!("hyp {i}")))
            .collect()
    }

    #[test]
    fn indices_are_distinct_and_valid() {
        let mut rng = make_rng(Some(7));
        let indices = sample_indices(50, 10, &mut rng);
        assert_eq!(indices.len(), 10);
        assert!(indices.iter().all(|&i| i < 50));
        assert_eq!(indices.iter().collect::<HashSet<_>>().len(), 10);
    }

    #[test]
    fn nsamp_larger_than_records_is_truncated() {
        let mut rng = make_rng(Some(1));
        let mut indices = sample_indices(4, 10, &mut rng);
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(sample_indices(0, 10, &mut rng).is_empty());
        assert!(sample_indices(5, 0, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        let a = sample_indices(100, 20, &mut make_rng(Some(42)));
        let b = sample_indices(100, 20, &mut make_rng(Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn table_skips_empty_hypothesis() {
        let display = DisplayConfig::default();
        let with = sample_table(1, 3, &Record::new("a", "b", "c"), &display);
        let without = sample_table(2, 0, &Record::new("a", "b", ""), &display);
        assert_eq!(with.rows().len(), 3);
        assert_eq!(without.rows().len(), 2);
    }

    #[test]
    fn title_reports_position_and_real_index() {
        let display = DisplayConfig {
            width: 40,
            color: false,
        };
        let record = Record::new("Hello", "Bonjour", "");
        let text = sample_table(1, 5, &record, &display).render(false);
        let expected = "\
#1 (index 5)
+------------+-------------------------+
| source     | Hello                   |
+------------+-------------------------+
| reference  | Bonjour                 |
+------------+-------------------------+
";
        assert_eq!(text, expected);
    }

    #[test]
    fn prints_one_table_per_sample() {
        let data = records(12);
        let mut out = Vec::new();
        let mut rng = make_rng(Some(3));
        inspect_translations(&data, 5, &mut rng, &DisplayConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let titles: Vec<&str> = text.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(titles.len(), 5);
        assert!(titles[0].starts_with("#1 (index "));
        assert!(titles[4].starts_with("#5 (index "));
        for title in titles {
            let index: usize = title
                .trim_start_matches(|c: char| c != '(')
                .trim_start_matches("(index ")
                .trim_end_matches(')')
                .parse()
                .unwrap();
            assert!(text.contains(&format!("| src {index} ")));
        }
    }
}
