use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_corpus;
pub mod stage1_features;
pub mod stage2_profile;
pub mod stage3_normalize;
pub mod stage4_zscore;
pub mod stage5_delta;

use stage0_corpus::Stage0Corpus;
use stage1_features::Stage1Features;
use stage2_profile::Stage2Profile;
use stage3_normalize::Stage3Normalize;
use stage4_zscore::Stage4Zscore;
use stage5_delta::Stage5Delta;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Full Burrows' Delta run, corpus resolution through ranking.
    pub fn delta() -> Self {
        Self::new(vec![
            Box::new(Stage0Corpus::new()),
            Box::new(Stage1Features::new()),
            Box::new(Stage2Profile::new()),
            Box::new(Stage3Normalize::new()),
            Box::new(Stage4Zscore::new()),
            Box::new(Stage5Delta::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    error = %err,
                    "stage failed"
                );
                return Err(err.context(format!("stage {} failed", stage.name())));
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
