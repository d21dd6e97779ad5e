use crate::analysis::DeltaAnalysis;

const TOP_FEATURES: usize = 10;

pub fn format_summary(analysis: &DeltaAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} v{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!(
        "Corpus: {} candidates, unknown={} ({} tokens)\n",
        analysis.candidates.len(),
        analysis.unknown.label,
        analysis.unknown.tokens
    ));
    out.push_str(&format!(
        "Features: {} selected, {} scored, policy={}\n",
        analysis.feature_set.len(),
        analysis.unknown_zscores.scored_len(),
        analysis.config.degenerate_policy.as_str()
    ));

    if !analysis.feature_set.is_empty() {
        out.push_str("  Index     Feature     Frequency\n");
        for (i, feature) in analysis.feature_set.iter().take(TOP_FEATURES).enumerate() {
            out.push_str(&format!(
                "{:5}  {:>10}{:>15}\n",
                i,
                feature.word.to_uppercase(),
                feature.count
            ));
        }
    }

    out.push_str("Ranking:\n");
    for (i, d) in analysis.ranking.iter().enumerate() {
        out.push_str(&format!("{:3}. {} delta={:.6}\n", i + 1, d.author, d.delta));
    }

    match analysis.attributed() {
        Some(best) => out.push_str(&format!("Attributed: {}\n", best.author)),
        None => out.push_str("Attributed: none\n"),
    }

    if !analysis.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &analysis.warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }

    out
}
