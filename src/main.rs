use std::{env, fs, io, process};

use tf_idf_matrix::{idf_with, tf, IDFVariant, TFIDFVectorizer};

// Read one document per line. Blank lines stay in as empty documents so
// line numbers keep matching matrix rows.
fn load_corpus(path: &str) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(|line| line.to_string()).collect())
}

fn print_usage() {
    eprintln!("usage: tf-idf-matrix [--corpus <file>] [--term <term>] [--idf <variant>]");
    eprintln!("  --corpus <file>  read documents from <file>, one per line");
    eprintln!("  --term <term>    term to probe (default: cat)");
    eprintln!("  --idf <variant>  containing | nonzero-offset | log-scaled | smoothed");
}

fn main() {
    env_logger::init();

    let mut corpus_path: Option<String> = None;
    let mut term = String::from("cat");
    let mut variant = IDFVariant::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--corpus" => match args.next() {
                Some(path) => corpus_path = Some(path),
                None => {
                    eprintln!("--corpus needs a file path");
                    process::exit(2);
                }
            },
            "--term" => match args.next() {
                Some(t) => term = t,
                None => {
                    eprintln!("--term needs a value");
                    process::exit(2);
                }
            },
            "--idf" => {
                variant = match args.next().as_deref() {
                    Some("containing") => IDFVariant::Containing,
                    Some("nonzero-offset") => IDFVariant::NonzeroOffset,
                    Some("log-scaled") => IDFVariant::LogScaled,
                    Some("smoothed") => IDFVariant::Smoothed,
                    other => {
                        eprintln!("unknown idf variant: {:?}", other);
                        process::exit(2);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    let documents: Vec<String> = match corpus_path {
        Some(path) => match load_corpus(&path) {
            Ok(docs) => docs,
            Err(err) => {
                eprintln!("failed to read corpus from {}: {}", path, err);
                process::exit(1);
            }
        },
        None => vec![
            "The black cat and orange cat played together".to_string(),
            "The cat played with the red ball".to_string(),
        ],
    };

    let mut vectorizer: TFIDFVectorizer<f64> = TFIDFVectorizer::new().with_idf_variant(variant);
    for document in &documents {
        vectorizer.add_document(document);
    }

    // probed term values, then the full matrix row by row
    if let Some(first) = documents.first() {
        println!("{}", tf(first, &term));
    }
    println!("{}", idf_with(&documents, &term, variant));
    print!("{}", vectorizer.weight_matrix());
}
