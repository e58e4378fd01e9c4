use super::corpus::{Corpus, Document, Vocabulary};

/// Count non-overlapping occurrences of `term` inside `text`.
///
/// Matching is case-sensitive and byte-exact. An empty needle would match
/// at every position, so it counts as zero.
#[inline]
pub(crate) fn count_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    text.matches(term).count()
}

/// Relative frequency of `term` within `document`.
///
/// `freq / n_terms`, where `freq` is the number of case-sensitive
/// substring occurrences of `term` in the raw document text and `n_terms`
/// is the raw whitespace word count. A term that never occurs, or a
/// document with no words, yields `0.0`.
///
/// Substring matching is intentional: `tf("catalog", "cat")` counts one
/// occurrence even though no token equals `cat`.
///
/// # Examples
/// ```
/// use tf_idf_matrix::tf;
/// assert_eq!(tf("the cat sat", "cat"), 1.0 / 3.0);
/// assert_eq!(tf("the cat sat", "dog"), 0.0);
/// ```
pub fn tf(document: &str, term: &str) -> f64 {
    let n_terms = document.split_whitespace().count();
    let freq = count_occurrences(document, term);
    // n_terms can be 0 with freq > 0 (whitespace-only text probed with a
    // whitespace term), so both zero checks are needed.
    if freq == 0 || n_terms == 0 {
        return 0.0;
    }
    freq as f64 / n_terms as f64
}

/// Document-counting predicate/transform used by the IDF calculator.
///
/// IDF here is a raw per-term document statistic, not the logarithmic
/// formulation, except where a variant says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IDFVariant {
    /// Count of documents containing the term as a case-sensitive
    /// substring.
    Containing,
    /// Count of documents whose first occurrence of the term starts at a
    /// nonzero byte offset, plus documents not containing the term at
    /// all. A match at offset 0 is not counted.
    NonzeroOffset,
    /// `log10(doc_num / df)` with `df` the containing-document count;
    /// `0.0` when no document contains the term.
    LogScaled,
    /// `ln((doc_num + 1) / (df + 1)) + 1` with `df` the
    /// containing-document count; `0.0` when no document contains the
    /// term.
    Smoothed,
}

impl Default for IDFVariant {
    fn default() -> Self {
        IDFVariant::Containing
    }
}

/// Count of corpus documents containing `term` as a substring.
fn containing_count<T>(corpus: &[T], term: &str) -> usize
where
    T: AsRef<str>,
{
    if term.is_empty() {
        return 0;
    }
    corpus
        .iter()
        .filter(|doc| doc.as_ref().contains(term))
        .count()
}

/// Inverse document frequency of `term` over `corpus`, with the default
/// variant ([`IDFVariant::Containing`]).
///
/// # Examples
/// ```
/// use tf_idf_matrix::idf;
/// let corpus = ["the cat sat", "the dog", "a cat"];
/// assert_eq!(idf(&corpus, "cat"), 2.0);
/// ```
pub fn idf<T>(corpus: &[T], term: &str) -> f64
where
    T: AsRef<str>,
{
    idf_with(corpus, term, IDFVariant::default())
}

/// Inverse document frequency of `term` over `corpus` under a chosen
/// [`IDFVariant`].
pub fn idf_with<T>(corpus: &[T], term: &str, variant: IDFVariant) -> f64
where
    T: AsRef<str>,
{
    let doc_num = corpus.len() as f64;
    match variant {
        IDFVariant::Containing => containing_count(corpus, term) as f64,
        IDFVariant::NonzeroOffset => corpus
            .iter()
            // None (absent) passes the filter as well; only a match at
            // the very start of the document is excluded.
            .filter(|doc| doc.as_ref().find(term) != Some(0))
            .count() as f64,
        IDFVariant::LogScaled => {
            let df = containing_count(corpus, term);
            if df == 0 {
                0.0
            } else {
                (doc_num / df as f64).log10()
            }
        }
        IDFVariant::Smoothed => {
            let df = containing_count(corpus, term);
            if df == 0 {
                0.0
            } else {
                ((doc_num + 1.0) / (df as f64 + 1.0)).ln() + 1.0
            }
        }
    }
}

/// TF IDF Calculation Engine Trait
/// Defines how TF rows and IDF columns are produced over a vocabulary.
/// Implement it to plug a different calculation strategy into
/// `TFIDFVectorizer<N, E>`.
pub trait TFIDFEngine<N>
where
    N: num::Num,
{
    /// TF vector of one document over the vocabulary columns.
    ///
    /// # Arguments
    /// * `document` - the document to weight
    /// * `vocab` - the vocabulary defining the column order
    ///
    /// # Returns
    /// * `Vec<N>` - one TF value per vocabulary column
    fn tf_vec(document: &Document, vocab: &Vocabulary) -> Vec<N>;

    /// IDF vector over the vocabulary columns.
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary, variant: IDFVariant) -> Vec<N>;
}

/// Default TF-IDF engine
/// Supports `f32` and `f64` cell types.
#[derive(Debug, Clone)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn tf_vec(document: &Document, vocab: &Vocabulary) -> Vec<f64> {
        let mut tf_vec = Vec::with_capacity(vocab.len());
        let n_terms = document.word_count();
        for term in vocab.iter() {
            let freq = count_occurrences(document.text(), term);
            if freq == 0 || n_terms == 0 {
                tf_vec.push(0.0);
            } else {
                tf_vec.push(freq as f64 / n_terms as f64);
            }
        }
        tf_vec
    }

    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary, variant: IDFVariant) -> Vec<f64> {
        let mut idf_vec = Vec::with_capacity(vocab.len());
        for term in vocab.iter() {
            idf_vec.push(idf_with(corpus.documents(), term, variant));
        }
        idf_vec
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn tf_vec(document: &Document, vocab: &Vocabulary) -> Vec<f32> {
        let mut tf_vec = Vec::with_capacity(vocab.len());
        let n_terms = document.word_count();
        for term in vocab.iter() {
            let freq = count_occurrences(document.text(), term);
            if freq == 0 || n_terms == 0 {
                tf_vec.push(0.0);
            } else {
                tf_vec.push(freq as f32 / n_terms as f32);
            }
        }
        tf_vec
    }

    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary, variant: IDFVariant) -> Vec<f32> {
        let mut idf_vec = Vec::with_capacity(vocab.len());
        for term in vocab.iter() {
            idf_vec.push(idf_with(corpus.documents(), term, variant) as f32);
        }
        idf_vec
    }
}
