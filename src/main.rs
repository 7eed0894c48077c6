use tokio::net::TcpListener;
use tracing::info;
use article_relay::{
    config::Config,
    api::routes::create_router,
    telemetry::init_tracing,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    init_tracing()?;

    let server_addr = config.server_addr;
    info!(webhook_url = %config.webhook_url, "Starting relay on {}", server_addr);

    let app_state = AppState::new(&config)?;
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
