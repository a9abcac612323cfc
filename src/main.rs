use tracing_subscriber::EnvFilter;

use biolink::{app, state::AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let state = AppState::new();
    let bind_addr = format!("0.0.0.0:{}", state.config().port());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|_| panic!("failed to bind to {}", bind_addr));
    tracing::info!(%bind_addr, data_dir = %state.config().values().data_dir.display(), "biolink listening");

    axum::serve(listener, app(state))
        .await
        .expect("server error");
}
