//! `--check`: probe the dialogue service without starting the TUI.

use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::adapters::ReqwestHttpClient;
use crate::dialogue::DialogueClient;
use crate::startup::ClientConfig;
use crate::traits::HttpClient;

/// Probe the service root and print what answered.
pub async fn run_check(config: &ClientConfig, http: Arc<dyn HttpClient>) -> Result<u16> {
    let client = DialogueClient::new(http, config.base_url(), config.endpoint_url());

    match client.probe().await {
        Ok(status) => {
            println!("✓ {} answered with HTTP {}", config.base_url(), status);
            println!("  chat endpoint: {}", client.endpoint());
            Ok(status)
        }
        Err(e) => Err(eyre!("{} is unreachable: {}", config.base_url(), e)),
    }
}

/// Blocking entry point used by `main`.
pub fn handle_check_command(config: &ClientConfig) -> Result<()> {
    let http = match config.request_timeout {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
        None => ReqwestHttpClient::new(),
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_check(config, Arc::new(http)))?;
    Ok(())
}
