//! Serves the schedule API over HTTP.
//!
//! Environment:
//! - `SCHEDULE_CONFIG_DIR`: directory holding `schedule.yaml` (built-in rules when unset)
//! - `SCHEDULE_DATA_FILE`: JSON file the schedule is kept in (default `schedule-data.json`)
//! - `SCHEDULE_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use schedule_engine::api::{AppState, create_router};
use schedule_engine::config::ConfigLoader;
use schedule_engine::service::ScheduleService;
use schedule_engine::storage::JsonFileStore;

const DEFAULT_DATA_FILE: &str = "schedule-data.json";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let loader = match env::var("SCHEDULE_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(dir)?,
        Err(_) => ConfigLoader::defaults(),
    };

    let data_file =
        env::var("SCHEDULE_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let store = Arc::new(JsonFileStore::new(&data_file));
    let service = ScheduleService::new(store, loader.into_config());

    let addr = env::var("SCHEDULE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, data_file = %data_file, "Schedule API listening");

    axum::serve(listener, create_router(AppState::new(service))).await?;
    Ok(())
}
