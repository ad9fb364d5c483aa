/// One aligned source/reference/hypothesis triple.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub source: String,
    pub reference: String,
    pub hypothesis: String,
}

impl Record {
    pub fn new(
        source: impl Into<String>,
        reference: impl Into<String>,
        hypothesis: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            reference: reference.into(),
            hypothesis: hypothesis.into(),
        }
    }
}

/// Source and reference with one hypothesis per compared system, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiRecord {
    pub source: String,
    pub reference: String,
    pub hypotheses: Vec<String>,
}

/// Resolves a possibly negative index against `len` records, counting
/// negative values from the end (`-1` is the last record).
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len_i = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len_i + index } else { index };
    if (0..len_i).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}
