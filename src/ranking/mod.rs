//! Similarity ranking module
//! TF-IDF vector space construction and cosine-similarity ranking

pub mod ranker;
pub mod tokenizer;
pub mod vectorizer;
