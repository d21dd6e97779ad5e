use std::fs;

use stylodelta::io::tsv_writer::write_tsv;
use stylodelta::{DeltaConfig, InMemoryCorpus, TokenSequence, run_delta_analysis};
use tempfile::TempDir;

#[test]
fn tsv_per_feature_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("zscores.tsv");

    let corpus = InMemoryCorpus::new()
        .with_author("A", TokenSequence::from_tokens(["the", "cat", "sat"]))
        .with_author("B", TokenSequence::from_tokens(["the", "dog", "ran"]))
        .with_unknown(TokenSequence::from_tokens(["the", "dog", "sat"]));
    let analysis = run_delta_analysis(
        &corpus,
        &["A".to_string(), "B".to_string()],
        &DeltaConfig::with_feature_count(3),
    )
    .unwrap();

    write_tsv(&path, &analysis).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "rank\tfeature\tcount\tmean\tstd_dev\tunknown\tA\tB");
    assert!(lines[1].starts_with("1\tthe\t2\t"));
    assert!(lines[1].ends_with("\tNA\tNA\tNA"));
    assert_eq!(lines[2].split('\t').count(), 8);
    assert!(!lines[2].contains("NA"));
}
