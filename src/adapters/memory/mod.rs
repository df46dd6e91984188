//! In-memory adapter. Implements DirectoryGateway without a network store.

pub mod directory;

pub use directory::InMemoryDirectory;

#[cfg(test)]
pub(crate) mod fixtures;
