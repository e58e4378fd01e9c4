use tf_idf_matrix::{idf, tf, IDFVariant, TFIDFVectorizer};

fn main() {
    // build the corpus
    let mut vectorizer: TFIDFVectorizer<f64> = TFIDFVectorizer::new();
    vectorizer.add_document("The black cat and orange cat played together");
    vectorizer.add_document("The cat played with the red ball");

    // probe a single (document, term) pair
    let corpus = vectorizer.corpus();
    let doc0 = corpus.get(0).unwrap().text();
    println!("tf(doc0, \"cat\") = {}", tf(doc0, "cat"));
    println!("idf(corpus, \"cat\") = {}", idf(corpus.documents(), "cat"));

    // vocabulary defines the column order
    let vocab = vectorizer.vocabulary();
    let terms: Vec<&str> = vocab.iter().collect();
    println!("columns: {:?}", terms);

    // full weight matrix, one row per document
    let matrix = vectorizer.weight_matrix();
    println!("matrix ({}x{}):", matrix.rows(), matrix.cols());
    print!("{}", matrix);

    // same corpus under the offset-quirk document counting
    let compat: TFIDFVectorizer<f64> =
        TFIDFVectorizer::from_corpus(vectorizer.corpus().clone())
            .with_idf_variant(IDFVariant::NonzeroOffset);
    println!("nonzero-offset matrix:");
    print!("{}", compat.weight_matrix());
}
