use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hades_web::api::{bind_listener, create_router, AppState, AssetTree};
use hades_web::config::{Args, Config};
use hades_web::error::FrontendError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(());
        }
        Err(e) => {
            let rendered = e.to_string();
            let line = rendered.lines().next().unwrap_or_default();
            println!("[x] {}", line.trim_start_matches("error: "));
            process::exit(1);
        }
    };

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hades_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let assets = match AssetTree::ensure_present() {
        Ok(assets) => assets,
        Err(e) => {
            println!("{e}");
            process::exit(1);
        }
    };

    let addr = config.bind_address();
    let state = AppState::new(config, assets);

    tracing::info!(
        "Serving {} embedded assets, route profile {:?}",
        state.assets.file_count(),
        state.config.profile
    );
    tracing::info!("  Shell routes: {:?}", state.routes.exact());
    tracing::info!("  Shell route prefixes: {:?}", state.routes.prefixes());
    tracing::info!("  {}", state.csp.connect_src());

    let app = create_router(state);

    let listener = match bind_listener(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            process::exit(1);
        }
    };
    tracing::info!("Hades frontend listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(FrontendError::Io)?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
