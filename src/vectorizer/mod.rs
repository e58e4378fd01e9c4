pub mod corpus;
pub mod matrix;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use log::debug;
use num::Num;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use self::corpus::{Corpus, Vocabulary};
use self::matrix::TFIDFMatrix;
use self::tfidf::{DefaultTFIDFEngine, IDFVariant, TFIDFEngine};

/// TF-IDF weight matrix builder over an ordered corpus.
///
/// Holds the corpus and the configured [`IDFVariant`]; every call to
/// [`weight_matrix`](TFIDFVectorizer::weight_matrix) derives the
/// vocabulary and the matrix from scratch, so the output only depends on
/// the current documents and configuration.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: matrix cell type (`f32` or `f64`, default `f64`)
/// - `E`: TF-IDF calculation engine type (default [`DefaultTFIDFEngine`])
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Num + Copy + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Ordered corpus; defines the row order of the output matrix
    corpus: Corpus,
    /// Document-counting variant used for the IDF columns
    idf_variant: IDFVariant,
    _marker: PhantomData<(N, E)>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Num + Copy + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Create an empty vectorizer with the default IDF variant.
    pub fn new() -> Self {
        TFIDFVectorizer {
            corpus: Corpus::new(),
            idf_variant: IDFVariant::default(),
            _marker: PhantomData,
        }
    }

    /// Create a vectorizer over an existing corpus.
    pub fn from_corpus(corpus: Corpus) -> Self {
        TFIDFVectorizer {
            corpus,
            idf_variant: IDFVariant::default(),
            _marker: PhantomData,
        }
    }

    /// Select the document-counting variant used for IDF.
    pub fn with_idf_variant(mut self, variant: IDFVariant) -> Self {
        self.idf_variant = variant;
        self
    }

    /// Append a document as the next matrix row.
    pub fn add_document(&mut self, text: &str) {
        self.corpus.add_document(text);
    }

    /// Get the number of documents
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.corpus.doc_num()
    }

    /// Get the corpus
    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Get the configured IDF variant
    #[inline]
    pub fn idf_variant(&self) -> IDFVariant {
        self.idf_variant
    }

    /// Build the vocabulary of the current corpus.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::build(&self.corpus)
    }

    /// Compute the document-by-term weight matrix.
    ///
    /// Each cell is `tf * idf` for its (document, term) pair. IDF values
    /// are computed once per vocabulary column, then the rows are
    /// assembled in parallel; every cell is independent, so the result
    /// does not depend on scheduling.
    pub fn weight_matrix(&self) -> TFIDFMatrix<N> {
        let vocab = self.vocabulary();
        let idf_vec = E::idf_vec(&self.corpus, &vocab, self.idf_variant);
        let rows: Vec<Vec<N>> = self
            .corpus
            .documents()
            .par_iter()
            .map(|doc| {
                let mut row = E::tf_vec(doc, &vocab);
                for (weight, idf) in row.iter_mut().zip(idf_vec.iter()) {
                    *weight = *weight * *idf;
                }
                row
            })
            .collect();
        debug!(
            "assembled {}x{} tf-idf matrix",
            self.corpus.doc_num(),
            vocab.len()
        );
        TFIDFMatrix::from_rows(rows, vocab.len())
    }
}

/// Compute the TF-IDF weight matrix of a corpus with the default engine
/// and IDF variant.
///
/// Rows follow the corpus order, columns the lexicographic vocabulary
/// order. An empty corpus yields a 0x0 matrix.
pub fn compute_tf_idf<T>(corpus: &[T]) -> TFIDFMatrix<f64>
where
    T: AsRef<str>,
{
    TFIDFVectorizer::<f64>::from_corpus(Corpus::from_texts(corpus)).weight_matrix()
}
