//! Videos Server - Main entry point

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use videos_common::logging::{init_logging, LogConfig};
use videos_server::{api, config::Config, store::VideoStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("videos-server")
        .filter_directives("videos_server=debug,tower_http=debug")
        .build()
        .with_env_overrides()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting videos server");

    let config = Config::load()?;
    info!(
        base_path = %config.api.base_path,
        "Configuration loaded - server will bind to {}",
        config.bind_address()
    );

    let store = if config.api.seed_demo_data {
        info!("Seeding demo video");
        VideoStore::with_demo_record()
    } else {
        VideoStore::new()
    };

    api::serve(&config, Arc::new(store)).await?;

    Ok(())
}
