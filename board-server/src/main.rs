use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::warn;

use board_server::config::BoardConfig;
use board_server::events::BoardEvent;
use board_server::huxley::HuxleyClient;
use board_server::scheduler::UpdateTimer;
use board_server::station::Crs;
use board_server::web::{AppState, create_router};
use board_server::widget::DepartureBoardWidget;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get credentials and stations from environment
    let token = std::env::var("HUXLEY_ACCESS_TOKEN").unwrap_or_else(|_| {
        eprintln!("Warning: HUXLEY_ACCESS_TOKEN not set. The board will ask to be configured.");
        String::new()
    });

    let from = station_from_env("BOARD_FROM");
    let to = station_from_env("BOARD_TO");

    let mut config = BoardConfig {
        access_token: token,
        from,
        to,
        ..BoardConfig::default()
    };
    if let Some(max) = env_parse::<usize>("BOARD_MAX_RESULTS") {
        config = config.with_max_results(max);
    }
    if let Some(secs) = env_parse::<u64>("BOARD_UPDATE_INTERVAL_SECS") {
        config = config.with_update_interval(Duration::from_secs(secs));
    }

    let update_interval = config.update_interval;
    let initial_delay = config.initial_load_delay;

    let widget = Arc::new(RwLock::new(DepartureBoardWidget::new(config)));
    let client = HuxleyClient::new().expect("Failed to create Huxley client");

    // The update loop: ask the widget for a request, fetch, feed the
    // result back. Fetch failures become a null payload so the board
    // shows its "no data" message and retries on the next tick.
    let timer_widget = widget.clone();
    let _timer = UpdateTimer::start(initial_delay, update_interval, move || {
        let widget = timer_widget.clone();
        let client = client.clone();
        async move {
            let request = widget.read().await.fetch_request();
            let Some(BoardEvent::RequestDepartures { url }) = request else {
                return;
            };

            let data = match client.get_board(&url).await {
                Ok(data) => data,
                Err(e) => {
                    warn!("departure fetch failed: {e}");
                    None
                }
            };

            widget
                .write()
                .await
                .on_fetch_result(&BoardEvent::DeparturesData { url, data });
        }
    });

    let static_dir =
        std::env::var("BOARD_STATIC_DIR").unwrap_or_else(|_| "board-server/static".to_string());

    let state = AppState::new(widget);
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Departure board listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /        - Board page (auto-refreshing)");
    println!("  GET  /board   - Board table fragment");
    println!("  GET  /health  - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Read a CRS code from the environment, dying on garbage input.
fn station_from_env(var: &str) -> Option<Crs> {
    let value = std::env::var(var).ok()?;
    match Crs::parse_normalized(&value) {
        Ok(crs) => Some(crs),
        Err(e) => {
            eprintln!("Invalid {var} {value:?}: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse an optional environment override.
fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    let value = std::env::var(var).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            eprintln!("Invalid {var} {value:?}");
            std::process::exit(1);
        }
    }
}
