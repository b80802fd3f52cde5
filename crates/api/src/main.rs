use anyhow::Context;

use accounts_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    accounts_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let state = app::services::build_services(&config).context("failed to wire services")?;
    let router = app::build_app(state, &config.mount_prefix);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        prefix = %config.mount_prefix,
        "listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
