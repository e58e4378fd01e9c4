/// This crate builds dense TF-IDF weight matrices for small document corpora.
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The top-level struct of this crate. It collects a corpus of raw text
/// documents and converts it into a dense document-by-term TF-IDF weight
/// matrix.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: matrix cell type (`f32` or `f64`, default `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
///
/// The matrix is derived fresh on every call: rows follow the order the
/// documents were added, columns follow the lexicographic vocabulary
/// order, so repeated runs over the same corpus are bit-identical.
pub use vectorizer::TFIDFVectorizer;

/// One-call pipeline
/// Computes the TF-IDF weight matrix of a slice of raw documents with the
/// default engine and IDF variant.
pub use vectorizer::compute_tf_idf;

/// Corpus, Document and Vocabulary structures
/// `Corpus` manages the ordered document collection, `Document` pairs the
/// raw text of one entry with its lowercased term statistics, and
/// `Vocabulary` holds the distinct corpus terms in lexicographic order,
/// mapping each term to its matrix column.
pub use vectorizer::corpus::{Corpus, Document, Vocabulary};

/// Term Frequency structure
/// A struct for counting term occurrences within a document. It manages
/// the count of occurrences of each term and the total number of terms,
/// as base data for TF calculation.
pub use vectorizer::token::TermFrequency;

/// Tokenizer
/// Splits a document into whitespace-delimited tokens and lowercases
/// them. Punctuation is kept attached to its word.
pub use vectorizer::token::tokenize;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different TF-IDF calculation
/// strategies into `TFIDFVectorizer<N, E>`. The default implementation,
/// `DefaultTFIDFEngine`, supports `f32` and `f64` cells.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// IDF Variant for the TF-IDF Vectorizer
/// The `IDFVariant` enum selects the document-counting predicate used by
/// the IDF calculation.
///
/// Currently, the following variants are supported:
/// - Containing: count of documents containing the term (default)
/// - NonzeroOffset: count of documents whose first match starts past
///   offset 0, plus documents without the term
/// - LogScaled: log10 of the document ratio
/// - Smoothed: shifted natural log of the document ratio
pub use vectorizer::tfidf::IDFVariant;

/// TF and IDF functions
/// Stateless building blocks of the pipeline: `tf` is the relative
/// substring frequency of a term within one raw document, `idf` the
/// document-count statistic of a term over the corpus (`idf_with` selects
/// the variant).
pub use vectorizer::tfidf::{idf, idf_with, tf};

/// TF-IDF Matrix structure
/// The dense document-by-term result matrix. Supports cell and row access
/// and prints as one line per row with tab-separated cells.
pub use vectorizer::matrix::TFIDFMatrix;
