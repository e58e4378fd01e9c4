use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_matrix::{compute_tf_idf, Corpus, TFIDFVectorizer};

const WORDS: &[&str] = &[
    "the", "cat", "sat", "on", "a", "mat", "dog", "played", "with", "ball", "orange", "black",
    "red", "together", "garden",
];

// Deterministic synthetic corpus: cycle through the word list with
// different strides per document.
fn synthetic_corpus(doc_num: usize, words_per_doc: usize) -> Vec<String> {
    (0..doc_num)
        .map(|doc| {
            (0..words_per_doc)
                .map(|word| WORDS[(doc * 7 + word * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn weight_matrix_benchmark(c: &mut Criterion) {
    let texts = synthetic_corpus(64, 120);

    c.bench_function("compute_tf_idf", |b| {
        b.iter(|| compute_tf_idf(&texts));
    });

    let vectorizer: TFIDFVectorizer<f64> =
        TFIDFVectorizer::from_corpus(Corpus::from_texts(&texts));
    c.bench_function("weight_matrix", |b| {
        b.iter(|| vectorizer.weight_matrix());
    });
}

criterion_group!(benches, weight_matrix_benchmark);
criterion_main!(benches);
