//! Application configuration. Store endpoint and access key.

use crate::domain::DomainError;
use serde::Deserialize;

/// Environment prefix: `VC_FINDER_SUPABASE_URL`, `VC_FINDER_SUPABASE_ANON_KEY`.
pub const ENV_PREFIX: &str = "VC_FINDER";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Supabase project URL, e.g. `https://xyz.supabase.co`. Read from VC_FINDER_SUPABASE_URL
    /// (falls back to SUPABASE_URL).
    #[serde(default)]
    pub supabase_url: Option<String>,

    /// Supabase anon (public) key. Read from VC_FINDER_SUPABASE_ANON_KEY
    /// (falls back to SUPABASE_ANON_KEY).
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

/// Validated connection parameters for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConnection {
    pub url: String,
    pub anon_key: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX));
        if let Ok(path) = std::env::var("VC_FINDER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Configuration(e.to_string()))?;
        // Unprefixed names so an existing Supabase .env works as-is
        if cfg.supabase_url.is_none() {
            cfg.supabase_url = std::env::var("SUPABASE_URL").ok();
        }
        if cfg.supabase_anon_key.is_none() {
            cfg.supabase_anon_key = std::env::var("SUPABASE_ANON_KEY").ok();
        }
        Ok(cfg)
    }

    /// Validate both connection values. Missing, blank or non-http(s) values are a
    /// configuration error; the caller must not start without them.
    pub fn connection(&self) -> Result<StoreConnection, DomainError> {
        let url = non_blank(self.supabase_url.as_deref()).ok_or_else(|| {
            DomainError::Configuration(
                "Missing Supabase URL: set VC_FINDER_SUPABASE_URL (env or .env)".to_string(),
            )
        })?;
        let anon_key = non_blank(self.supabase_anon_key.as_deref()).ok_or_else(|| {
            DomainError::Configuration(
                "Missing Supabase anon key: set VC_FINDER_SUPABASE_ANON_KEY (env or .env)"
                    .to_string(),
            )
        })?;

        let parsed = reqwest::Url::parse(url)
            .map_err(|e| DomainError::Configuration(format!("Invalid Supabase URL {url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Configuration(format!(
                "Supabase URL must be http(s), got {}",
                parsed.scheme()
            )));
        }

        Ok(StoreConnection {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
