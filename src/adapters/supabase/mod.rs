//! Supabase adapter. Reads the directory tables through PostgREST.

pub mod client;

pub use client::PostgrestGateway;
