use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// FrequencyRecord – one `word<TAB>count` line
// ---------------------------------------------------------------------------

/// A single word and the number of times the upstream job counted it.
/// `word` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRecord {
    pub word: String,
    pub count: u64,
}

impl FrequencyRecord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        FrequencyRecord {
            word: word.into(),
            count,
        }
    }
}

// ---------------------------------------------------------------------------
// FrequencyTable – the ordered dataset passed through the pipeline
// ---------------------------------------------------------------------------

/// Ordered sequence of records, in input-line order as loaded.
///
/// Duplicate words are kept as separate records. Every stage builds a new
/// table from a borrowed one, so upstream tables stay valid for the other
/// consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    records: Vec<FrequencyRecord>,
}

impl FrequencyTable {
    pub fn from_records(records: Vec<FrequencyRecord>) -> Self {
        FrequencyTable { records }
    }

    pub fn records(&self) -> &[FrequencyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest count in the table, 0 when empty.
    pub fn max_count(&self) -> u64 {
        self.records.iter().map(|r| r.count).max().unwrap_or(0)
    }

    /// Collapse the table into unique `(word, count)` pairs.
    ///
    /// Pairs are ordered by first occurrence; a later record with the same
    /// word replaces the earlier count. The second element is how many records
    /// were overwritten that way.
    pub fn word_frequencies(&self) -> (Vec<(String, u64)>, usize) {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.records.len());
        let mut pairs: Vec<(String, u64)> = Vec::with_capacity(self.records.len());
        let mut collapsed = 0;
        for rec in &self.records {
            match index.get(rec.word.as_str()) {
                Some(&i) => {
                    pairs[i].1 = rec.count;
                    collapsed += 1;
                }
                None => {
                    index.insert(&rec.word, pairs.len());
                    pairs.push((rec.word.clone(), rec.count));
                }
            }
        }
        (pairs, collapsed)
    }
}

impl FromIterator<FrequencyRecord> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = FrequencyRecord>>(iter: I) -> Self {
        FrequencyTable {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyRecord;
    type IntoIter = std::slice::Iter<'a, FrequencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
