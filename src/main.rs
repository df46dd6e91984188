//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; lookups are delegated to the use cases.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vc_finder::adapters::supabase::PostgrestGateway;
use vc_finder::adapters::ui::tui::TuiInputPort;
use vc_finder::ports::{DirectoryGateway, InputPort};
use vc_finder::shared::config::AppConfig;
use vc_finder::usecases::{CatalogService, SearchSession, SpecialistResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    // --- Config: both store values are required; refuse to start without them ---
    let cfg = AppConfig::load()?;
    let connection = cfg.connection()?;
    info!(url = %connection.url, "store configured");

    vc_finder::adapters::ui::init_ui();

    // --- Store gateway (shared, read-only) ---
    let gateway: Arc<dyn DirectoryGateway> = Arc::new(PostgrestGateway::new(&connection));

    // --- Services ---
    let catalog = Arc::new(CatalogService::new(Arc::clone(&gateway)));
    let resolver = Arc::new(SpecialistResolver::new(Arc::clone(&gateway)));
    let session = Arc::new(SearchSession::new(resolver));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(catalog, session));

    // --- Run (select industry -> search -> results, until Quit) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
