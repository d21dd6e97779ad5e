use stylodelta::{Tokenizer, WordTokenizer};

#[test]
fn lowercases_and_strips_punctuation() {
    let tokens = WordTokenizer.tokenize("The Cat, the HAT!  And... the bat?");
    assert_eq!(
        tokens,
        vec!["the", "cat", "the", "hat", "and", "the", "bat"]
    );
}

#[test]
fn contractions_collapse() {
    let tokens = WordTokenizer.tokenize("Don't stop; it's fine.");
    assert_eq!(tokens, vec!["dont", "stop", "its", "fine"]);
}

#[test]
fn numbers_are_dropped_mixed_tokens_kept() {
    let tokens = WordTokenizer.tokenize("Chapter 12 of 1984 was b2b");
    assert_eq!(tokens, vec!["chapter", "of", "was", "b2b"]);
}

#[test]
fn unicode_words() {
    let tokens = WordTokenizer.tokenize("Über café — naïve");
    assert_eq!(tokens, vec!["über", "café", "naïve"]);
}

#[test]
fn empty_text() {
    assert!(WordTokenizer.tokenize("  ... !!! 42 ").is_empty());
}
