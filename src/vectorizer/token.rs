use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split a document into whitespace-delimited tokens, each lowercased.
///
/// An empty input yields an empty vector. Punctuation stays attached to
/// its word.
///
/// # Examples
/// ```
/// use tf_idf_matrix::tokenize;
/// let tokens = tokenize("The CAT sat.");
/// assert_eq!(tokens, vec!["the", "cat", "sat."]);
/// ```
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// TermFrequency structure
/// Counts term occurrences within one document and keeps the running
/// total, as base data for TF calculation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    /// Create an empty TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add one occurrence of a term
    ///
    /// # Arguments
    /// * `term` - the term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add one occurrence of every term in the slice
    ///
    /// # Arguments
    /// * `terms` - the terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Get the occurrence count of a term
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Get the total number of term occurrences
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Check whether the term occurs at least once
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Get the unique terms, borrowing the stored strings
    ///
    /// Order is first-seen order.
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }
}
