//! Stylometric authorship attribution.
//!
//! The crate scores an unknown text against a set of candidate authors with
//! Burrows' Delta: the most frequent words of the pooled candidate corpus are
//! turned into z-scores against a mean-of-means norm, and each candidate is
//! ranked by the mean absolute z-score distance to the unknown sample.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod ctx;
pub mod error;
pub mod features;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod schema;
pub mod scores;

pub use analysis::{DeltaAnalysis, run_delta_analysis};
pub use config::{DegeneratePolicy, DeltaConfig};
pub use corpus::{AuthorLabel, CorpusStore, InMemoryCorpus, TokenSequence, Tokenizer, WordTokenizer};
pub use error::DeltaError;
