use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::analysis::DeltaAnalysis;
use crate::schema::v1::{
    ConfigEcho, CorpusMeta, DeltaReportV1, EntityMeta, FeatureRow, RankingRow,
};

pub fn build_report(analysis: &DeltaAnalysis) -> Result<DeltaReportV1> {
    let config = &analysis.config;
    let n = analysis.feature_set.len();
    if analysis.stats.len() != n || analysis.unknown_zscores.scores.len() != n {
        bail!("feature statistics do not match feature set");
    }

    let features = analysis
        .feature_set
        .iter()
        .zip(&analysis.stats.features)
        .zip(&analysis.unknown_zscores.scores)
        .enumerate()
        .map(|(i, ((feature, stat), z))| FeatureRow {
            rank: i as u64 + 1,
            word: feature.word.clone(),
            count: feature.count as u64,
            mean: stat.mean,
            std_dev: stat.std_dev,
            excluded: analysis.excluded.contains(&feature.word),
            unknown_z: *z,
        })
        .collect::<Vec<_>>();

    let ranking = analysis
        .ranking
        .iter()
        .enumerate()
        .map(|(i, d)| RankingRow {
            rank: i as u64 + 1,
            author: d.author.clone(),
            delta: d.delta,
        })
        .collect::<Vec<_>>();

    let corpus = CorpusMeta {
        candidates: analysis
            .candidates
            .iter()
            .map(|c| EntityMeta {
                label: c.label.clone(),
                tokens: c.tokens as u64,
            })
            .collect(),
        unknown: EntityMeta {
            label: analysis.unknown.label.clone(),
            tokens: analysis.unknown.tokens as u64,
        },
        features_requested: config.feature_count as u64,
        features_selected: n as u64,
        features_scored: analysis.unknown_zscores.scored_len() as u64,
    };

    Ok(DeltaReportV1 {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        method: "burrows_delta".to_string(),
        config: ConfigEcho {
            feature_count: config.feature_count,
            degenerate_policy: config.degenerate_policy,
            unknown_label: config.unknown_label.clone(),
        },
        corpus,
        features,
        ranking,
        attributed: analysis.attributed().map(|d| d.author.clone()),
        warnings: analysis.warnings.clone(),
    })
}

pub fn write_json(path: &Path, analysis: &DeltaAnalysis) -> Result<()> {
    let report = build_report(analysis)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
