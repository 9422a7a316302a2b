//! Word tokenization for the vector space

use unicode_segmentation::UnicodeSegmentation;

/// Lowercasing word tokenizer over Unicode word boundaries.
///
/// Keeps tokens of at least `min_token_length` characters containing at
/// least one alphanumeric character. No stop-word filtering: rare terms
/// are down-weighted by idf instead.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Tokenizer {
    pub fn new(min_token_length: usize) -> Self {
        Self { min_token_length }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| word.to_lowercase())
            .filter(|token| {
                token.chars().count() >= self.min_token_length
                    && token.chars().any(|c| c.is_alphanumeric())
            })
            .collect()
    }
}
