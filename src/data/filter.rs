use std::collections::HashSet;

use super::model::FrequencyTable;

/// Records below this count are dropped by default.
pub const DEFAULT_MIN_COUNT: u64 = 10;

/// Common English and archaic function words excluded from thematic views.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "of", "to", "a", "in", "that", "i", "he", "his", "for", "with", "as", "not",
    "is", "be", "by", "on", "thou", "thy", "but", "had", "me", "which", "have", "from", "you",
    "her", "at", "it", "an", "they", "were", "are", "been", "would", "their", "will", "all",
    "no", "when", "one", "your", "could", "them", "shall", "unto", "was", "said", "upon", "ye",
    "thee", "hath", "this", "my", "out", "up", "so", "then", "into", "there", "we", "who", "if",
    "or", "what", "did", "am", "us",
];

// ---------------------------------------------------------------------------
// StopwordSet
// ---------------------------------------------------------------------------

/// Case-insensitive set of excluded words. Entries are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordSet {
    /// Build a set from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        StopwordSet {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
impl StopwordSet {
    /// A set that excludes nothing.
    pub fn empty() -> Self {
        StopwordSet {
            words: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Keep records with `count >= min_count` whose word is not a stopword.
///
/// Surviving records keep their relative order. The input is left untouched.
pub fn filter_table(
    table: &FrequencyTable,
    min_count: u64,
    stopwords: &StopwordSet,
) -> FrequencyTable {
    table
        .iter()
        .filter(|rec| rec.count >= min_count && !stopwords.is_stopword(&rec.word))
        .cloned()
        .collect()
}
