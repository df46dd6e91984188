//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Industry, SpecializationMatch};

/// Read-only access to the directory store (industries, specializations, VCs, firms).
#[async_trait::async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Fetch every industry, ordered ascending by name.
    async fn list_industries(&self) -> Result<Vec<Industry>, DomainError>;

    /// Fetch the specialization rows whose industry name equals `industry_name` exactly,
    /// inner-joined to their VC and the VC's firm. Rows come back in the store's
    /// descending order of `expertise_level`.
    async fn find_specializations(
        &self,
        industry_name: &str,
    ) -> Result<Vec<SpecializationMatch>, DomainError>;
}
