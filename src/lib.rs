pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use crate::core::RateProvider;
use crate::core::currency::normalize_code;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
    Rates {
        base: Option<String>,
    },
    Currencies {
        query: Option<String>,
    },
}

fn load_config(config_path: Option<&str>) -> Result<config::AppConfig> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

fn build_provider(config: &config::AppConfig) -> Result<Arc<dyn RateProvider>> {
    let provider = providers::ExchangeRateApiProvider::new(
        &config.provider.base_url,
        &config.provider.api_key,
    )?;
    Ok(Arc::new(provider))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!(?command, "xconv starting...");

    match command {
        AppCommand::Currencies { query } => {
            cli::currencies::run(query.as_deref().unwrap_or_default());
            Ok(())
        }
        AppCommand::Convert { amount, from, to } => {
            let config = load_config(config_path)?;
            let from = normalize_code(from.as_deref().unwrap_or(&config.default_from));
            let to = normalize_code(to.as_deref().unwrap_or(&config.default_to));
            let provider = build_provider(&config)?;
            cli::convert::run(provider, &amount, &from, &to).await
        }
        AppCommand::Rates { base } => {
            let config = load_config(config_path)?;
            let base = normalize_code(base.as_deref().unwrap_or(&config.default_from));
            let provider = build_provider(&config)?;
            cli::rates::run(provider.as_ref(), &base).await
        }
    }
}
