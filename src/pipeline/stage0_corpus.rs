use std::collections::HashSet;

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::error::DeltaError;
use crate::pipeline::Stage;

pub struct Stage0Corpus;

impl Stage0Corpus {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Corpus {
    fn name(&self) -> &'static str {
        "stage0_corpus"
    }

    fn run(&self, ctx: &mut Ctx<'_>) -> Result<()> {
        let store = ctx.store;
        let unknown_label = ctx.unknown_label().to_string();
        let mut seen = HashSet::with_capacity(ctx.candidates.len());
        let mut tokens = Vec::with_capacity(ctx.candidates.len());

        for label in &ctx.candidates {
            if *label == unknown_label {
                return Err(DeltaError::ReservedLabel {
                    label: label.clone(),
                }
                .into());
            }
            if !seen.insert(label.as_str()) {
                return Err(DeltaError::DuplicateCandidate {
                    label: label.clone(),
                }
                .into());
            }
            let seq = store.token_sequence(label)?;
            info!(author = %label, tokens = seq.len(), "candidate_loaded");
            tokens.push(seq);
        }

        let unknown = store.unknown_sample();
        info!(tokens = unknown.len(), "unknown_sample_loaded");
        if unknown.is_empty() {
            ctx.warnings
                .push(format!("unknown sample '{}' has no tokens", unknown_label));
        }

        ctx.candidate_tokens = tokens;
        ctx.unknown_tokens = Some(unknown);
        Ok(())
    }
}
