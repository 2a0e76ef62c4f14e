use std::path::Path;

use anyhow::{Context, Result};
use reclink_cli::records::load_record;
use reclink_cli::report::{CheckReport, ScoreReport, check_model, score_pair};
use reclink_config::{ModelConfig, patient_model_config};
use tracing::{info, info_span};

use crate::cli::{CheckArgs, ScoreArgs};

pub fn run_score(args: &ScoreArgs) -> Result<ScoreReport> {
    let span = info_span!("score", left = %args.left.display(), right = %args.right.display());
    let _guard = span.enter();
    let model = load_model(args.model.as_deref())?;
    let left = load_record(&args.left)?;
    let right = load_record(&args.right)?;
    score_pair(&model, &left, &right, args.explain)
}

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let span = info_span!("check");
    let _guard = span.enter();
    let model = load_model(args.model.as_deref())?;
    check_model(&model)
}

fn load_model(path: Option<&Path>) -> Result<ModelConfig> {
    let model = match path {
        Some(path) => ModelConfig::from_path(path)
            .with_context(|| format!("load model {}", path.display()))?,
        None => patient_model_config().context("load bundled patient model")?,
    };
    info!(kind = model.kind(), "loaded model");
    Ok(model)
}
