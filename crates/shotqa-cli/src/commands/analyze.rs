//! One-off analysis of a local screenshot.

use anyhow::{Context, Result};
use base64::Engine;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info};

use shotqa_core::{analysis, AnalysisFocus, AnalysisRequest};

use super::GeminiArgs;
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to the screenshot (sent as image/png)
    pub image: PathBuf,

    /// Analysis focus: bug_detection, ux_analysis, or anything else for general QA
    #[arg(long, short, default_value = "bug_detection")]
    pub focus: String,

    /// Also print the raw provider payload
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub gemini: GeminiArgs,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("Failed to read image: {}", args.image.display()))?;
    let image_base64 = base64::engine::general_purpose::STANDARD.encode(&bytes);

    let focus = AnalysisFocus::from_identifier(Some(args.focus.as_str()));
    println!(
        "{} Analyzing {} ({} bytes, focus: {})",
        "→".dimmed(),
        args.image.display(),
        bytes.len(),
        focus.identifier()
    );

    let client = args.gemini.build_client()?;
    info!(
        image = %args.image.display(),
        focus = focus.identifier(),
        endpoint = %client.config().endpoint(),
        "Running one-off analysis"
    );
    let request = AnalysisRequest::new(image_base64, Some(args.focus.as_str()));
    let result = analysis::analyze(&client, request)
        .await
        .context("Analysis failed")?;
    debug!(analysis_len = result.analysis.len(), "Analysis complete");

    output::print_analysis(&result.analysis);

    if args.raw {
        println!();
        println!("{}", "Raw response".bold());
        println!("{}", serde_json::to_string_pretty(&result.raw)?);
    }

    Ok(())
}
