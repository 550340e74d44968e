use std::collections::HashSet;

use super::model::FrequencyTable;

/// Thematic terms compared side by side in the comparison chart.
pub const THEOLOGICAL_TERMS: &[&str] = &[
    "God", "Jesus", "Christ", "love", "faith", "hope", "sin", "heaven", "hell", "holy", "angel",
    "Moses", "David", "prophet", "blessing", "pray", "worship",
];

// ---------------------------------------------------------------------------
// TermSetQuery
// ---------------------------------------------------------------------------

/// Ordered list of terms of interest. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSetQuery {
    terms: Vec<String>,
}

impl TermSetQuery {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TermSetQuery {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// The default thematic term set.
    pub fn theological() -> Self {
        Self::new(THEOLOGICAL_TERMS.iter().copied())
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

#[cfg(test)]
impl TermSetQuery {
    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Result of running a [`TermSetQuery`] against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Matching records, in source-table order.
    pub table: FrequencyTable,
    /// Query terms with no matching record, in query order.
    pub missing: Vec<String>,
}

/// Pick the records whose word is exactly one of the query terms.
///
/// Absent terms are omitted from the output (no zero-count placeholders) and
/// reported as a warning.
pub fn select_terms(table: &FrequencyTable, query: &TermSetQuery) -> Selection {
    let wanted: HashSet<&str> = query.terms().iter().map(String::as_str).collect();

    let selected: FrequencyTable = table
        .iter()
        .filter(|rec| wanted.contains(rec.word.as_str()))
        .cloned()
        .collect();

    let found: HashSet<&str> = selected.iter().map(|r| r.word.as_str()).collect();
    let mut reported = HashSet::new();
    let missing: Vec<String> = query
        .terms()
        .iter()
        .filter(|t| !found.contains(t.as_str()) && reported.insert(t.as_str()))
        .cloned()
        .collect();

    if !missing.is_empty() {
        log::warn!(
            "The following terms were not found in the text: {}",
            missing.join(", ")
        );
    }

    Selection {
        table: selected,
        missing,
    }
}
