/// Positional alignment of several sequences.
///
/// Row `i` of the result holds the `i`-th element of every input sequence, in
/// input order. Sequences shorter than the longest one are padded with `fill`,
/// so the result always has as many rows as the longest input and every row
/// has exactly `columns.len()` entries.
pub fn zip_longest<T: Clone>(columns: &[Vec<T>], fill: T) -> Vec<Vec<T>> {
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..rows)
        .map(|i| {
            columns
                .iter()
                .map(|column| column.get(i).cloned().unwrap_or_else(|| fill.clone()))
                .collect()
        })
        .collect()
}

/// Like [`zip_longest`], but for borrowed token sequences; missing cells become `""`.
pub fn align_tokens<'a>(columns: &[Vec<&'a str>]) -> Vec<Vec<&'a str>> {
    zip_longest(columns, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_longest() {
        let rows = align_tokens(&[vec!["a", "b", "c"], vec!["x", "y"], vec!["p"]]);
        assert_eq!(
            rows,
            vec![vec!["a", "x", "p"], vec!["b", "y", ""], vec!["c", "", ""]]
        );
    }

    #[test]
    fn no_columns_or_empty_columns_give_no_rows() {
        assert!(zip_longest::<String>(&[], String::new()).is_empty());
        assert!(align_tokens(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn keeps_column_order() {
        let rows = zip_longest(&[vec![1, 2], vec![3, 4, 5]], 0);
        assert_eq!(rows, vec![vec![1, 3], vec![2, 4], vec![0, 5]]);
    }
}
