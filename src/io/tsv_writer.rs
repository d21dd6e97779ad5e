use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::analysis::DeltaAnalysis;

/// One row per feature: rank, word, pooled count, mean, stddev, then the
/// z-score of the unknown sample and of every candidate. Excluded features
/// carry `NA` z-scores.
pub fn write_tsv(path: &Path, analysis: &DeltaAnalysis) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let n = analysis.feature_set.len();
    ensure_len(analysis.stats.len(), n, "stats")?;
    ensure_len(analysis.unknown_zscores.scores.len(), n, &analysis.unknown.label)?;
    for z in &analysis.candidate_zscores {
        ensure_len(z.scores.len(), n, &z.entity)?;
    }

    write!(w, "rank\tfeature\tcount\tmean\tstd_dev\t{}", analysis.unknown.label)?;
    for z in &analysis.candidate_zscores {
        write!(w, "\t{}", z.entity)?;
    }
    writeln!(w)?;

    for (i, (feature, stat)) in analysis
        .feature_set
        .iter()
        .zip(&analysis.stats.features)
        .enumerate()
    {
        write!(
            w,
            "{}\t{}\t{}\t{:.8}\t{:.8}\t{}",
            i + 1,
            feature.word,
            feature.count,
            stat.mean,
            stat.std_dev,
            fmt_z(analysis.unknown_zscores.scores[i])
        )?;
        for z in &analysis.candidate_zscores {
            write!(w, "\t{}", fmt_z(z.scores[i]))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

fn fmt_z(z: Option<f64>) -> String {
    match z {
        Some(v) => format!("{:.6}", v),
        None => "NA".to_string(),
    }
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}
