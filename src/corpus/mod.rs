mod tokenize;

use indexmap::IndexMap;

use crate::error::DeltaError;

pub use tokenize::{Tokenizer, WordTokenizer};

pub type AuthorLabel = String;

/// Normalized word tokens of one author or of the unknown sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Source of token sequences for one analysis run.
pub trait CorpusStore {
    fn token_sequence(&self, label: &str) -> Result<&TokenSequence, DeltaError>;
    fn unknown_sample(&self) -> &TokenSequence;
}

/// Corpus held entirely in memory, authors kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    authors: IndexMap<AuthorLabel, TokenSequence>,
    unknown: TokenSequence,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from raw texts. Several texts of one author are joined
    /// with a newline before tokenization.
    pub fn from_texts(
        tokenizer: &dyn Tokenizer,
        authors: &[(&str, &[&str])],
        unknown: &[&str],
    ) -> Self {
        let mut corpus = Self::new();
        for (label, texts) in authors {
            let tokens = tokenizer.tokenize(&texts.join("\n"));
            corpus.insert_author(*label, TokenSequence::new(tokens));
        }
        corpus.set_unknown(TokenSequence::new(tokenizer.tokenize(&unknown.join("\n"))));
        corpus
    }

    /// Returns the previous sequence if the label was already present.
    pub fn insert_author(
        &mut self,
        label: impl Into<AuthorLabel>,
        tokens: TokenSequence,
    ) -> Option<TokenSequence> {
        self.authors.insert(label.into(), tokens)
    }

    pub fn set_unknown(&mut self, tokens: TokenSequence) {
        self.unknown = tokens;
    }

    pub fn with_author(mut self, label: impl Into<AuthorLabel>, tokens: TokenSequence) -> Self {
        self.insert_author(label, tokens);
        self
    }

    pub fn with_unknown(mut self, tokens: TokenSequence) -> Self {
        self.set_unknown(tokens);
        self
    }

    pub fn labels(&self) -> Vec<AuthorLabel> {
        self.authors.keys().cloned().collect()
    }
}

impl CorpusStore for InMemoryCorpus {
    fn token_sequence(&self, label: &str) -> Result<&TokenSequence, DeltaError> {
        self.authors
            .get(label)
            .ok_or_else(|| DeltaError::UnknownAuthor {
                label: label.to_string(),
            })
    }

    fn unknown_sample(&self) -> &TokenSequence {
        &self.unknown
    }
}
