//! Catalog loader. Fetches the industry list that populates the selector.

use crate::domain::Industry;
use crate::ports::DirectoryGateway;
use std::sync::Arc;
use tracing::{error, info};

/// Loads industries once at startup.
pub struct CatalogService {
    gateway: Arc<dyn DirectoryGateway>,
}

impl CatalogService {
    pub fn new(gateway: Arc<dyn DirectoryGateway>) -> Self {
        Self { gateway }
    }

    /// All industries ordered by name. A store failure is logged and yields an empty
    /// list so the UI stays usable (with nothing to select).
    pub async fn load_industries(&self) -> Vec<Industry> {
        match self.gateway.list_industries().await {
            Ok(industries) => {
                info!(count = industries.len(), "catalog ready");
                industries
            }
            Err(e) => {
                error!(error = %e, "Error fetching industries");
                Vec::new()
            }
        }
    }
}
