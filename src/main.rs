use gryphon_dashboard::adapters::inbound::{spawn_stdin_commands, WebSocketSource};
use gryphon_dashboard::adapters::outbound::{init_dashboard_logger, FileKeyValueStore, HtmlFilePublisher};
use gryphon_dashboard::application::{spawn_dashboard, DashboardService, TelemetrySource};
use gryphon_dashboard::Config;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Gryphon Dashboard");

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DASHBOARD_CONFIG").ok())
        .unwrap_or_else(|| "config.toml".to_string());
    let config = Config::load(&config_path)?;

    info!("Configuration loaded from {}", config_path);
    info!("Telemetry feed: {}", config.transport.url);
    info!("Publishing dashboard to {}", config.render.output.display());

    let logger = init_dashboard_logger(config.logging.file.as_deref());
    let storage = Arc::new(FileKeyValueStore::new(config.storage.directory.clone()));
    let publisher = Arc::new(HtmlFilePublisher::new(
        config.render.output.clone(),
        config.render.refresh_seconds,
    ));

    let service = DashboardService::new(&config, storage, publisher, logger);
    if let Err(e) = service.publish() {
        warn!("Initial publish failed: {}", e);
    }
    let (dashboard, dashboard_task) = spawn_dashboard(service, config.transport.channel_capacity);

    let source = WebSocketSource::new(config.transport.url.clone());
    let transport_handle = dashboard.clone();
    let transport_task = tokio::spawn(async move {
        if let Err(e) = source.run(transport_handle).await {
            error!("Telemetry feed stopped: {}", e);
        }
    });

    spawn_stdin_commands(dashboard.clone());

    info!("Gryphon Dashboard started; type 'clear' to reset paths, 'quit' to exit");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down Gryphon Dashboard");
            let _ = dashboard.shutdown().await;
        }
        _ = dashboard.closed() => info!("Dashboard stopped by operator"),
    }

    transport_task.abort();
    let service = dashboard_task.await?;
    info!("Dashboard stopped with {} robot path(s) stored", service.paths().len());

    Ok(())
}
