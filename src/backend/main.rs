/**
 * Trip Planner Server Entry Point
 *
 * Loads `.env`, reads settings, installs logging, opens the database and
 * serves the API until Ctrl-C or SIGTERM.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use trip_planner::backend::{create_app, Logging};
    use trip_planner::shared::Settings;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::from_env()?;
    let _logging = Logging::init(&settings.log)?;
    tracing::info!("[STARTUP] Server initialization started");

    if settings.uses_default_secret() {
        tracing::warn!("SECRET_KEY is not set; tokens are signed with the default key");
    }

    let port = settings.server_port;
    let app = create_app(settings).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "ssr")]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin trip-planner-server --features ssr");
    std::process::exit(1);
}
