//! Application use cases. Orchestrate domain logic via ports.

pub mod catalog_service;
pub mod resolver_service;
pub mod search_session;

pub use catalog_service::CatalogService;
pub use resolver_service::{SearchOutcome, SpecialistResolver};
pub use search_session::{SearchSession, SearchState};
