//! Tokenization shared by the lexical scoring strategies

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
        }
    }

    /// Lowercased word tokens with stop words and single characters dropped.
    /// Purely numeric tokens are dropped as well; years-of-experience digits
    /// carry no similarity signal.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let normalized = word.to_lowercase();

            if self.stop_words.contains(&normalized) || normalized.len() <= 1 {
                continue;
            }
            if normalized.chars().any(|c| c.is_alphabetic()) {
                tokens.push(normalized);
            }
        }

        tokens
    }

    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }

    /// Most frequent tokens, longest-first among equals, for keyword coverage.
    pub fn top_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let mut word_freq = std::collections::HashMap::new();
        for token in self.tokenize(text) {
            if token.len() > 2 {
                *word_freq.entry(token).or_insert(0usize) += 1;
            }
        }

        let mut keywords: Vec<(String, usize)> = word_freq.into_iter().collect();
        keywords.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.len().cmp(&a.0.len())));

        keywords
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word)
            .collect()
    }

    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has",
            "have", "he", "her", "him", "his", "if", "in", "into", "is", "it", "its", "me", "my",
            "no", "not", "of", "on", "or", "our", "out", "she", "so", "some", "such", "than",
            "that", "the", "their", "them", "then", "these", "they", "this", "to", "too", "up",
            "us", "was", "we", "were", "what", "when", "where", "which", "while", "who", "why",
            "will", "with", "would", "you", "your",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Seeking Python developer with 5 years experience.");

        assert!(tokens.contains(&"python".to_string()));
        assert!(tokens.contains(&"developer".to_string()));
        assert!(tokens.contains(&"experience".to_string()));
        // Stop words and bare numbers are dropped
        assert!(!tokens.contains(&"with".to_string()));
        assert!(!tokens.contains(&"5".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.token_set("  \n ").is_empty());
    }

    #[test]
    fn test_top_keywords() {
        let tokenizer = Tokenizer::new();
        let text = "Rust Rust Rust services services deployment";
        let keywords = tokenizer.top_keywords(text, 2);

        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0], "rust");
        assert_eq!(keywords[1], "services");
    }
}
