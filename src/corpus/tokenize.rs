use std::sync::OnceLock;

use regex::Regex;

pub trait Tokenizer {
    fn tokenize(&self, raw: &str) -> Vec<String>;
}

/// Lowercased alphabetic word tokens.
///
/// Characters that are neither word characters nor whitespace are removed
/// before splitting, so contractions collapse (`don't` -> `dont`). Tokens
/// without any alphabetic character (bare numbers) are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

fn non_word() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[^\w\s]+").expect("valid regex"))
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, raw: &str) -> Vec<String> {
        let cleaned = non_word().replace_all(raw, "");
        cleaned
            .split_whitespace()
            .filter(|token| token.chars().any(char::is_alphabetic))
            .map(str::to_lowercase)
            .collect()
    }
}
