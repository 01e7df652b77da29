use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::annotator::LlmAnnotator;
use resume_parser::config::Config;
use resume_parser::llm_client::{self, LlmClient};
use resume_parser::loader::pdf::{backend_by_name, PdfBackend};
use resume_parser::{DocumentLoader, ResumeParser};

/// Extracts name, contact details, skills, education and experience from one resume
/// and prints them as JSON.
#[derive(Debug, Parser)]
#[command(name = "resume-parser", version)]
struct Cli {
    /// Path to a .pdf or .docx resume
    path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging goes to stderr; stdout carries only the JSON record.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-parser v{}", env!("CARGO_PKG_VERSION"));

    let pdf_backend: Arc<dyn PdfBackend> = backend_by_name(&config.pdf_backend)
        .map(Arc::<dyn PdfBackend>::from)
        .with_context(|| format!("unknown PDF backend '{}'", config.pdf_backend))?;
    let loader = DocumentLoader::new(pdf_backend);
    info!("PDF backend: {}", loader.pdf_backend_name());

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let parser = ResumeParser::new(loader, Arc::new(LlmAnnotator::new(llm)));

    let timeout = Duration::from_secs(config.extraction_timeout_secs);
    let result = tokio::time::timeout(timeout, parser.parse(&cli.path))
        .await
        .with_context(|| {
            format!(
                "extraction of {} timed out after {}s",
                cli.path.display(),
                config.extraction_timeout_secs
            )
        })?
        .with_context(|| format!("failed to parse {}", cli.path.display()))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
