use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEATURE_COUNT: usize = 300;
pub const DEFAULT_UNKNOWN_LABEL: &str = "unknown";

/// What to do with a feature whose standard deviation across candidates is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Keep the feature in the feature set but leave it out of scoring.
    #[default]
    Exclude,
    /// Score the feature with a z-score of 0 for every entity.
    Zero,
    /// Abort the run with `DeltaError::DegenerateFeature`.
    Fail,
}

impl DegeneratePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Zero => "zero",
            Self::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaConfig {
    /// Number of most frequent words used as features.
    pub feature_count: usize,
    pub degenerate_policy: DegeneratePolicy,
    /// Label under which the unknown sample is reported.
    pub unknown_label: String,
    /// Worker threads for profiling when built with `mt` (0 = rayon default).
    pub threads: usize,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            feature_count: DEFAULT_FEATURE_COUNT,
            degenerate_policy: DegeneratePolicy::default(),
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_string(),
            threads: 0,
        }
    }
}

impl DeltaConfig {
    pub fn with_feature_count(feature_count: usize) -> Self {
        Self {
            feature_count,
            ..Self::default()
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).context("failed to parse delta config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.unknown_label.trim().is_empty() {
            bail!("unknown_label must not be empty");
        }
        Ok(())
    }
}
