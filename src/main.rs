use std::net::SocketAddr;

use maternity_pay::api::{AppState, create_router};
use maternity_pay::config::ConfigLoader;
use maternity_pay::error::EngineError;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/tax_years";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Server settings read from the environment.
struct Settings {
    config_dir: String,
    tax_year: Option<String>,
    addr: SocketAddr,
}

impl Settings {
    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config_dir = std::env::var("MATERNITY_PAY_CONFIG_DIR")
            .unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
        let tax_year = std::env::var("MATERNITY_PAY_TAX_YEAR").ok();
        let addr = std::env::var("MATERNITY_PAY_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()?;

        Ok(Self {
            config_dir,
            tax_year,
            addr,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,maternity_pay=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let loader = match ConfigLoader::load(&settings.config_dir) {
        Ok(loader) => loader,
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Tax year directory not found, using built-in 2025-26 figures");
            ConfigLoader::builtin()
        }
        Err(err) => return Err(err.into()),
    };

    let mut state = AppState::new(loader);
    if let Some(id) = settings.tax_year {
        state.config().get_tax_year(&id)?;
        state = state.with_default_tax_year(id);
    }

    let loaded: Vec<&str> = state.config().tax_years().iter().map(|t| t.id.as_str()).collect();
    info!(tax_years = ?loaded, addr = %settings.addr, "Starting maternity pay planner");

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
