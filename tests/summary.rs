use stylodelta::io::summary::format_summary;
use stylodelta::{DeltaConfig, InMemoryCorpus, TokenSequence, run_delta_analysis};

#[test]
fn summary_format() {
    let corpus = InMemoryCorpus::new()
        .with_author("jordan", TokenSequence::from_tokens(["the", "wheel", "turns"]))
        .with_author("sanderson", TokenSequence::from_tokens(["the", "ash", "falls"]))
        .with_unknown(TokenSequence::from_tokens(["the", "wheel", "turns", "again"]));
    let analysis = run_delta_analysis(
        &corpus,
        &corpus.labels(),
        &DeltaConfig::with_feature_count(300),
    )
    .unwrap();

    let s = format_summary(&analysis);
    assert!(s.contains("stylodelta v"));
    assert!(s.contains("Corpus: 2 candidates, unknown=unknown (4 tokens)"));
    assert!(s.contains("Features: 5 selected, 4 scored, policy=exclude"));
    assert!(s.contains("THE"));
    assert!(s.contains("  1. jordan delta=0.176777"));
    assert!(s.contains("Attributed: jordan"));
    assert!(s.contains("warnings:"));
}
