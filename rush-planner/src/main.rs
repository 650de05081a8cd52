use rush_planner::web::{AppState, ServerConfig, create_router};
use rush_planner::workspace::Workspace;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // RUSH_LOG_FORMAT=json switches to machine-readable output
    let log_format = std::env::var("RUSH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rush_planner=info,tower_http=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    let mut workspace = Workspace::default();
    if let Some(path) = &config.scenario {
        workspace
            .load_from(path)
            .expect("Failed to load startup scenario");
    }
    info!(
        nodes = workspace.graph().nodes().len(),
        edges = workspace.graph().edges().len(),
        time_slot = workspace.config().time_slot.key(),
        "workspace ready"
    );

    let app = create_router(AppState::new(workspace));

    info!(addr = %config.addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
