//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use shotqa_web::{ServerConfig, ANALYZE_PATH};

use super::GeminiArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SHOTQA_PORT", default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SHOTQA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Maximum request body size in megabytes
    #[arg(long, env = "SHOTQA_BODY_LIMIT_MB", default_value = "20")]
    pub body_limit_mb: usize,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (used with --log)
    #[arg(long, default_value = "shotqa-serve.log")]
    pub log_file: PathBuf,

    #[command(flatten)]
    pub gemini: GeminiArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = args.gemini.build_client()?;

    println!();
    println!("  {} {}", "shotqa".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}    http://{}:{}", "Upload".green(), args.host, args.port);
    println!(
        "  {}       http://{}:{}{}",
        "API".green(),
        args.host,
        args.port,
        ANALYZE_PATH
    );
    println!("  {}     {}", "Model".green(), args.gemini.model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        body_limit: args.body_limit_mb.saturating_mul(1024 * 1024),
    };
    info!(
        endpoint = %client.config().endpoint(),
        body_limit = config.body_limit,
        "Relaying analysis requests to Gemini"
    );

    shotqa_web::run_server(Arc::new(client), config).await?;

    Ok(())
}
