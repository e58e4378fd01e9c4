use indexmap::IndexSet;
use log::trace;
use serde::{Deserialize, Serialize};

use super::token::{tokenize, TermFrequency};

/// One corpus entry: the raw text plus the term statistics of its
/// lowercased tokens.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    text: String,
    terms: TermFrequency,
}

impl Document {
    /// Build a document from raw text, tokenizing it once up front.
    pub fn new(text: &str) -> Self {
        let mut terms = TermFrequency::new();
        terms.add_terms(&tokenize(text));
        Document {
            text: text.to_string(),
            terms,
        }
    }

    /// Get the raw text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the lowercased term statistics
    #[inline]
    pub fn terms(&self) -> &TermFrequency {
        &self.terms
    }

    /// Number of whitespace-delimited words in the raw text.
    /// Lowercasing does not change token boundaries, so the stored total
    /// equals the raw word count.
    #[inline]
    pub fn word_count(&self) -> u64 {
        self.terms.term_sum()
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Ordered document collection. Document order defines the row order of
/// the weight matrix and is preserved throughout.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Build a corpus from raw document texts, keeping their order.
    pub fn from_texts<T>(texts: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Corpus {
            documents: texts.iter().map(|t| Document::new(t.as_ref())).collect(),
        }
    }

    /// Append a document at the next row index.
    pub fn add_document(&mut self, text: &str) {
        self.documents.push(Document::new(text));
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a document by row index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Get all documents in row order
    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

/// The distinct lowercased terms of a corpus, held in lexicographic order
/// so that column indexes are reproducible across runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Collect the distinct terms of every document, sorted lexicographically.
    ///
    /// Repeated calls on the same corpus produce the same term order.
    pub fn build(corpus: &Corpus) -> Self {
        let mut terms: Vec<&str> = corpus
            .documents()
            .iter()
            .flat_map(|doc| doc.terms().term_set_ref_str())
            .collect();
        terms.sort_unstable();
        terms.dedup();
        trace!("built vocabulary with {} terms", terms.len());
        Vocabulary {
            terms: terms.into_iter().map(Box::<str>::from).collect(),
        }
    }

    /// Get the number of terms
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether the term is part of the vocabulary
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Get the column index of a term
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Get the term at a column index
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| &**t)
    }

    /// Iterate terms in column order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| &**t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_caches_word_count_and_terms() {
        let doc = Document::new("The black cat and orange cat played together");
        assert_eq!(doc.word_count(), 8);
        assert_eq!(doc.terms().term_count("cat"), 2);
        assert_eq!(doc.terms().term_count("the"), 1);
        assert_eq!(doc.text(), "The black cat and orange cat played together");
    }

    #[test]
    fn empty_document_has_zero_words() {
        let doc = Document::new("");
        assert_eq!(doc.word_count(), 0);
        assert_eq!(doc.terms().term_num(), 0);
    }

    #[test]
    fn corpus_preserves_document_order() {
        let corpus = Corpus::from_texts(&["b doc", "a doc", "c doc"]);
        assert_eq!(corpus.doc_num(), 3);
        assert_eq!(corpus.get(0).unwrap().text(), "b doc");
        assert_eq!(corpus.get(1).unwrap().text(), "a doc");
        assert_eq!(corpus.get(2).unwrap().text(), "c doc");
    }

    #[test]
    fn vocabulary_is_sorted_and_deduplicated() {
        let corpus = Corpus::from_texts(&["the cat sat", "the dog"]);
        let vocab = Vocabulary::build(&corpus);

        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["cat", "dog", "sat", "the"]);
        assert_eq!(vocab.index_of("cat"), Some(0));
        assert_eq!(vocab.index_of("the"), Some(3));
        assert_eq!(vocab.term(1), Some("dog"));
        assert!(vocab.contains("dog"));
        assert!(!vocab.contains("mouse"));
    }

    #[test]
    fn vocabulary_contains_exactly_the_corpus_terms() {
        let corpus = Corpus::from_texts(&[
            "The black cat and orange cat played together",
            "The cat played with the red ball",
        ]);
        let vocab = Vocabulary::build(&corpus);

        assert_eq!(vocab.len(), 10);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(
            terms,
            vec![
                "and", "ball", "black", "cat", "orange", "played", "red", "the", "together",
                "with"
            ]
        );
    }

    #[test]
    fn vocabulary_order_is_stable_across_rebuilds() {
        let corpus = Corpus::from_texts(&["zebra apple", "mango apple zebra"]);
        let first = Vocabulary::build(&corpus);
        let second = Vocabulary::build(&corpus);

        assert_eq!(first, second);
        let order: Vec<&str> = first.iter().collect();
        assert_eq!(order, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn vocabulary_of_empty_corpus_is_empty() {
        assert!(Vocabulary::build(&Corpus::new()).is_empty());

        let blank = Corpus::from_texts(&["", "   "]);
        assert!(Vocabulary::build(&blank).is_empty());
    }
}
