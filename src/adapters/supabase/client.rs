//! Supabase adapter. Implements DirectoryGateway over the PostgREST HTTP interface.
//!
//! The join, filter and ordering are expressed as PostgREST query parameters and
//! executed by the store; this adapter only builds requests and decodes rows.

use crate::domain::{
    DomainError, Industry, SpecializationMatch, VcIndustrySpecialization, VentureCapitalist,
};
use crate::ports::DirectoryGateway;
use crate::shared::config::StoreConnection;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

const INDUSTRIES_TABLE: &str = "industries";
const SPECIALIZATIONS_TABLE: &str = "vc_industry_specializations";

/// Embeds the industry (inner join, filter target) and the VC with its firm.
const SPECIALIZATION_SELECT: &str =
    "*,industries!inner(name),venture_capitalists!inner(*,vc_firms(*))";

/// PostgREST gateway for a Supabase project.
pub struct PostgrestGateway {
    client: Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestGateway {
    /// Create a gateway for the project at `connection.url` (e.g. "https://xyz.supabase.co").
    pub fn new(connection: &StoreConnection) -> Self {
        Self {
            client: Client::new(),
            rest_url: format!("{}/rest/v1", connection.url.trim_end_matches('/')),
            anon_key: connection.anon_key.clone(),
        }
    }

    /// GET `table` with the given query parameters and decode the JSON array body.
    ///
    /// Rows that fail to decode are logged and skipped; a body that is not an array
    /// fails the whole query.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, DomainError> {
        let url = format!("{}/{}", self.rest_url, table);
        debug!(table, ?query, "querying store");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Query(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(table, status = %status, body = %text, "store returned error");
            return Err(DomainError::Query(format!(
                "Store error {} on {}: {}",
                status,
                table,
                text.chars().take(200).collect::<String>()
            )));
        }

        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DomainError::Query(format!("Failed to decode {} rows: {}", table, e)))?;

        Ok(rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!(table, index, error = %e, "skipping undecodable row");
                    None
                }
            })
            .collect())
    }
}

/// One row of `vc_industry_specializations` with its embeds.
#[derive(Deserialize)]
struct SpecializationRow {
    #[serde(flatten)]
    specialization: VcIndustrySpecialization,
    venture_capitalists: VentureCapitalist,
}

#[async_trait::async_trait]
impl DirectoryGateway for PostgrestGateway {
    async fn list_industries(&self) -> Result<Vec<Industry>, DomainError> {
        let industries: Vec<Industry> = self
            .select(INDUSTRIES_TABLE, &[("select", "*"), ("order", "name.asc")])
            .await?;
        info!(count = industries.len(), "industries loaded");
        Ok(industries)
    }

    async fn find_specializations(
        &self,
        industry_name: &str,
    ) -> Result<Vec<SpecializationMatch>, DomainError> {
        let name_filter = format!("eq.{}", industry_name);
        let rows: Vec<SpecializationRow> = self
            .select(
                SPECIALIZATIONS_TABLE,
                &[
                    ("select", SPECIALIZATION_SELECT),
                    ("industries.name", name_filter.as_str()),
                    ("order", "expertise_level.desc"),
                ],
            )
            .await?;
        info!(industry = industry_name, count = rows.len(), "specializations loaded");

        Ok(rows
            .into_iter()
            .map(|row| SpecializationMatch {
                expertise_level: row.specialization.expertise_level,
                professional: row.venture_capitalists,
            })
            .collect())
    }
}
