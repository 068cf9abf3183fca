use std::process::ExitCode;

use departure_board::board::BoardConfig;
use departure_board::config::ServerConfig;
use departure_board::schedule::{ScheduleLoader, ScheduleLocation};
use departure_board::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &config.schedule.location {
        ScheduleLocation::Directory(dir) => {
            info!(dir = %dir.display(), "loading schedules from directory")
        }
        ScheduleLocation::Remote(url) => info!(%url, "loading schedules over HTTP"),
    }
    if config.schedule.day_selection {
        info!("day-based schedule selection enabled");
    }

    let loader = match ScheduleLoader::new(config.schedule.clone()) {
        Ok(loader) => loader,
        Err(e) => {
            error!("failed to create schedule loader: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(loader, BoardConfig::default());
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Departure board listening on http://{}", config.bind_addr);
    info!("  GET  /            - Board page (?station=&direction=&day=&time=)");
    info!("  GET  /departures  - Board as JSON, or HTML with Accept: text/html");
    info!("  GET  /health      - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
