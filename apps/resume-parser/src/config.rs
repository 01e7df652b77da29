use anyhow::{bail, Context, Result};

use crate::loader::pdf::backend_by_name;

const DEFAULT_PDF_BACKEND: &str = "pdf-extract";
const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 120;

/// Binary configuration loaded from environment variables (and `.env` if present).
/// The library itself reads no environment; `main` turns this into explicit dependencies.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub pdf_backend: String,
    pub extraction_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let pdf_backend =
            std::env::var("PDF_BACKEND").unwrap_or_else(|_| DEFAULT_PDF_BACKEND.to_string());
        if backend_by_name(&pdf_backend).is_none() {
            bail!("PDF_BACKEND must be 'pdf-extract' or 'lopdf', got '{pdf_backend}'");
        }

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            pdf_backend,
            extraction_timeout_secs: match std::env::var("EXTRACTION_TIMEOUT_SECS") {
                Ok(v) => v
                    .parse::<u64>()
                    .context("EXTRACTION_TIMEOUT_SECS must be a whole number of seconds")?,
                Err(_) => DEFAULT_EXTRACTION_TIMEOUT_SECS,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
