use serde::{Deserialize, Serialize};

use crate::config::DegeneratePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEcho {
    pub feature_count: usize,
    pub degenerate_policy: DegeneratePolicy,
    pub unknown_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMeta {
    pub label: String,
    pub tokens: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusMeta {
    pub candidates: Vec<EntityMeta>,
    pub unknown: EntityMeta,
    pub features_requested: u64,
    pub features_selected: u64,
    pub features_scored: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRow {
    pub rank: u64,
    pub word: String,
    pub count: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub excluded: bool,
    pub unknown_z: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: u64,
    pub author: String,
    pub delta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub method: String,
    pub config: ConfigEcho,
    pub corpus: CorpusMeta,
    pub features: Vec<FeatureRow>,
    pub ranking: Vec<RankingRow>,
    pub attributed: Option<String>,
    pub warnings: Vec<String>,
}
