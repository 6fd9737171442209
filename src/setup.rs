// src/setup.rs

use data_access_objects::{ApiConfig, DaoError, ReqwestTransport};
use desk::Desk;
use tracing_subscriber::EnvFilter;

const LOG_FORMAT_VAR: &str = "INNKEEPER_LOG_FORMAT";

/// Reads `.env` when present. Variables already set win.
pub(super) fn load_env() {
    dotenvy::dotenv().ok();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` takes precedence over `-v`. Logs go to stderr so command
/// output stays clean.
pub(super) fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let json = std::env::var(LOG_FORMAT_VAR)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub(super) fn api_config(api_url: Option<&str>) -> Result<ApiConfig, DaoError> {
    let config = ApiConfig::from_env()?;
    match api_url {
        Some(url) => ApiConfig::new(url, config.timeout),
        None => Ok(config),
    }
}

pub(super) fn connect(api_url: Option<&str>) -> Result<Desk<ReqwestTransport>, DaoError> {
    let config = api_config(api_url)?;
    tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "api configured");
    Ok(Desk::new(ReqwestTransport::new(config)?))
}
