use tokio::net::TcpListener;
use tracing::info;
use article_relay::{
    config::FormConfig,
    form::{create_router, FormState},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FormConfig::load()?;
    init_tracing()?;

    let server_addr = config.server_addr;
    info!(backend = %config.backend_process_url, "Starting form on {}", server_addr);

    let app = create_router(FormState::new(&config)?);
    let listener = TcpListener::bind(server_addr).await?;

    info!("Open http://{} in a browser", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
