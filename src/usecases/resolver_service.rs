//! Specialist resolver: industry name -> VCs specializing in it, with their firm.
//!
//! - Join, filter and upstream ordering are done by the store (DirectoryGateway)
//! - Rows are flattened into `Specialist` records (VC + expertise level + firm)
//! - Final order is by severity rank (High, Medium, Low, unrecognized), stable
//! - Failures degrade to an empty outcome; they are logged, never returned

use crate::domain::{DomainError, Specialist, SpecializationMatch};
use crate::ports::DirectoryGateway;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Terminal state of one search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Specialist>),
    Empty,
    /// The query failed; shown to the user as "no results".
    Degraded,
}

impl SearchOutcome {
    /// Result list to display. Empty for `Empty` and `Degraded`.
    pub fn specialists(&self) -> &[Specialist] {
        match self {
            Self::Found(specialists) => specialists,
            Self::Empty | Self::Degraded => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.specialists().len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialists().is_empty()
    }
}

/// Resolves the specialists for an industry.
pub struct SpecialistResolver {
    gateway: Arc<dyn DirectoryGateway>,
}

impl SpecialistResolver {
    pub fn new(gateway: Arc<dyn DirectoryGateway>) -> Self {
        Self { gateway }
    }

    /// Resolve specialists for `industry_name` (exact, case-sensitive). Never fails:
    /// query errors are logged and reported as `SearchOutcome::Degraded`.
    pub async fn resolve(&self, industry_name: &str) -> SearchOutcome {
        match self.try_resolve(industry_name).await {
            Ok(specialists) if specialists.is_empty() => SearchOutcome::Empty,
            Ok(specialists) => SearchOutcome::Found(specialists),
            Err(e) => {
                error!(industry = industry_name, error = %e, "Error fetching VCs");
                SearchOutcome::Degraded
            }
        }
    }

    /// Same as `resolve` but returns the store error instead of degrading.
    pub async fn try_resolve(&self, industry_name: &str) -> Result<Vec<Specialist>, DomainError> {
        let rows = self.gateway.find_specializations(industry_name).await?;
        let mut specialists: Vec<Specialist> = rows.into_iter().map(flatten).collect();
        // Stable: ties keep the store's order.
        specialists.sort_by(|a, b| b.expertise_level.rank().cmp(&a.expertise_level.rank()));
        info!(
            industry = industry_name,
            count = specialists.len(),
            "specialists resolved"
        );
        Ok(specialists)
    }
}

/// Merge a join row into one record. A firm that is not the VC's own is dropped.
fn flatten(row: SpecializationMatch) -> Specialist {
    let SpecializationMatch {
        expertise_level,
        mut professional,
    } = row;

    let firm_id = professional.vc_firm_id;
    let before = professional.vc_firms.len();
    professional.vc_firms.retain(|f| f.id == firm_id);
    if professional.vc_firms.len() != before {
        warn!(
            vc_id = professional.id,
            vc_firm_id = firm_id,
            "embedded firm does not match vc_firm_id, dropped"
        );
    }

    Specialist {
        profile: professional,
        expertise_level,
    }
}
