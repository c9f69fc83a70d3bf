//! Admin bootstrap: opens the file-backed store, seeding the reference
//! catalog on first run, and logs a storefront summary.

use dotenvy::dotenv;
use quote_desk::{
    config,
    errors::Result,
    store::{FileBackend, StorageBackend, Store},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars may also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!(
        data_dir = %app_config.data_dir.display(),
        ai_model = %app_config.ai_model,
        "configuration loaded"
    );

    // 4. Open the store; first run seeds the reference catalog
    let backend = Arc::new(FileBackend::open(&app_config.data_dir)?);
    let store = Store::open(backend as Arc<dyn StorageBackend>);

    // 5. Summarize what the store holds
    let products = store.products().get_all()?;
    let active = products.iter().filter(|p| p.is_active).count();
    let quotations = store.quotations().get_all()?;
    info!(
        products = products.len(),
        active,
        quotations = quotations.len(),
        "store ready"
    );

    Ok(())
}
