#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let services = stockroom_api::app::AppServices::from_env()?;
    let app = stockroom_api::app::build_app(services);

    let bind = std::env::var("STOCKROOM_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
