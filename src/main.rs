use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mergington::config::Config;
use mergington::database::ActivityStore;
use mergington::web::router::{self, LANDING_PAGE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env();
    init_logging(&config);
    if let Some(raw) = &config.invalid_port {
        warn!(port = %raw, fallback = config.port, "invalid PORT, using default");
    }

    let store = ActivityStore::seeded();
    info!(activities = store.len(), "activity catalog seeded");

    let app = router::build_router(store, &config.static_dir);

    let addr = config
        .bind_addr()
        .with_context(|| format!("cannot parse listen address {}:{}", config.host, config.port))?;

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("cannot bind {}: {}", addr, e))?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(addr = %bound_addr, "server listening");
    info!("landing page at http://{}{}", bound_addr, LANDING_PAGE);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
