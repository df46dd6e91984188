//! Infrastructure adapters. Implement ports.
//!
//! Supabase store, in-memory store, terminal UI. Map errors to DomainError.

pub mod memory;
pub mod supabase;
pub mod ui;
