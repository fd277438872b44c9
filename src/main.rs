use daily_rate_engine::api::{create_router, AppState};
use daily_rate_engine::config::{ConfigLoader, ServerSettings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = ServerSettings::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rate_table = ConfigLoader::load(&settings.rates_dir)?;
    let router = create_router(AppState::new(rate_table));

    let address = settings.bind_address()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(%address, "Daily rate engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
