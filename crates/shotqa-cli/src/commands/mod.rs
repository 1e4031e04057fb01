//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use shotqa_gemini::{client, GeminiClient, GeminiConfig};

pub mod analyze;
pub mod prompts;
pub mod serve;

/// Screenshot QA through Gemini Vision
#[derive(Parser)]
#[command(name = "shotqa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (API and upload page)
    Serve(serve::ServeArgs),

    /// Analyze a local screenshot without starting the server
    Analyze(analyze::AnalyzeArgs),

    /// List focus identifiers or print a prompt template
    Prompts(prompts::PromptsArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Prompts(args) => prompts::execute(args),
        }
    }
}

/// Gemini connection settings shared by commands that call the provider.
#[derive(Args, Debug, Clone)]
pub struct GeminiArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Gemini model to use for vision analysis
    #[arg(long, env = "GEMINI_MODEL", default_value = client::DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = client::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "GEMINI_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl GeminiArgs {
    pub fn to_config(&self) -> GeminiConfig {
        GeminiConfig::new(self.api_key.clone())
            .with_base_url(&self.base_url)
            .with_model(&self.model)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }

    pub fn build_client(&self) -> Result<GeminiClient> {
        Ok(GeminiClient::new(self.to_config())?)
    }
}
