//! In-memory directory. Implements DirectoryGateway over seeded tables.
//!
//! Performs the same join as the store (exact name filter, inner joins, firm by FK)
//! and orders rows by descending lexical `expertise_level`, like a text column would.

use crate::domain::{
    DomainError, ExpertiseLevel, Industry, SpecializationMatch, VcFirm, VcIndustrySpecialization,
    VentureCapitalist,
};
use crate::ports::DirectoryGateway;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// Table-backed directory. Stands in for the store in use-case tests.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    industries: Vec<Industry>,
    firms: Vec<VcFirm>,
    professionals: Vec<VentureCapitalist>,
    specializations: Vec<VcIndustrySpecialization>,
    /// Simulated latency per industry name for `find_specializations`.
    delays: HashMap<String, Duration>,
    unreachable: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_industry(mut self, id: i64, name: &str) -> Self {
        self.industries.push(Industry {
            id,
            name: name.to_string(),
            description: None,
            created_at: None,
        });
        self
    }

    pub fn with_firm(mut self, firm: VcFirm) -> Self {
        self.firms.push(firm);
        self
    }

    /// Add a VC. Any embedded `vc_firms` are ignored; the join fills them from `vc_firm_id`.
    pub fn with_professional(mut self, mut professional: VentureCapitalist) -> Self {
        professional.vc_firms.clear();
        self.professionals.push(professional);
        self
    }

    pub fn with_specialization(
        mut self,
        vc_id: i64,
        industry_id: i64,
        level: ExpertiseLevel,
    ) -> Self {
        let id = self.specializations.len() as i64 + 1;
        self.specializations.push(VcIndustrySpecialization {
            id,
            vc_id,
            industry_id,
            expertise_level: level,
            created_at: None,
        });
        self
    }

    /// Delay `find_specializations` for `industry_name` by `delay`.
    pub fn with_delay(mut self, industry_name: &str, delay: Duration) -> Self {
        self.delays.insert(industry_name.to_string(), delay);
        self
    }

    /// Every call fails as if the store could not be reached.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    fn check_reachable(&self) -> Result<(), DomainError> {
        if self.unreachable {
            return Err(DomainError::Query(
                "HTTP request failed: connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DirectoryGateway for InMemoryDirectory {
    async fn list_industries(&self) -> Result<Vec<Industry>, DomainError> {
        self.check_reachable()?;
        let mut industries = self.industries.clone();
        industries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(industries)
    }

    async fn find_specializations(
        &self,
        industry_name: &str,
    ) -> Result<Vec<SpecializationMatch>, DomainError> {
        if let Some(delay) = self.delays.get(industry_name) {
            tokio::time::sleep(*delay).await;
        }
        self.check_reachable()?;

        let industry_ids: Vec<i64> = self
            .industries
            .iter()
            .filter(|i| i.name == industry_name)
            .map(|i| i.id)
            .collect();

        let mut rows: Vec<(&VcIndustrySpecialization, SpecializationMatch)> = self
            .specializations
            .iter()
            .filter(|s| industry_ids.contains(&s.industry_id))
            .filter_map(|s| {
                let professional = self.professionals.iter().find(|p| p.id == s.vc_id)?;
                let mut professional = professional.clone();
                professional.vc_firms = self
                    .firms
                    .iter()
                    .filter(|f| f.id == professional.vc_firm_id)
                    .take(1)
                    .cloned()
                    .collect();
                Some((
                    s,
                    SpecializationMatch {
                        expertise_level: s.expertise_level.clone(),
                        professional,
                    },
                ))
            })
            .collect();

        rows.sort_by(|(a, _), (b, _)| {
            b.expertise_level
                .as_str()
                .cmp(a.expertise_level.as_str())
                .then(a.id.cmp(&b.id))
        });

        info!(industry = industry_name, count = rows.len(), "[MEMORY] specializations");
        Ok(rows.into_iter().map(|(_, m)| m).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::fixtures::{firm, vc};

    #[tokio::test]
    async fn industries_sorted_by_name() {
        let dir = InMemoryDirectory::new()
            .with_industry(1, "SaaS")
            .with_industry(2, "AgTech")
            .with_industry(3, "FinTech");

        let names: Vec<String> = dir
            .list_industries()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();

        assert_eq!(names, vec!["AgTech", "FinTech", "SaaS"]);
    }

    #[tokio::test]
    async fn join_fills_firm_from_foreign_key() {
        let dir = InMemoryDirectory::new()
            .with_industry(1, "FinTech")
            .with_firm(firm(10, "Acme Capital"))
            .with_firm(firm(20, "Other Partners"))
            .with_professional(vc(1, "Ada Park", 20))
            .with_specialization(1, 1, ExpertiseLevel::High);

        let rows = dir.find_specializations("FinTech").await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].professional.firm().map(|f| f.id), Some(20));
    }

    #[tokio::test]
    async fn orders_by_lexical_level_descending() {
        let dir = InMemoryDirectory::new()
            .with_industry(1, "FinTech")
            .with_professional(vc(1, "A", 1))
            .with_professional(vc(2, "B", 1))
            .with_professional(vc(3, "C", 1))
            .with_specialization(1, 1, ExpertiseLevel::High)
            .with_specialization(2, 1, ExpertiseLevel::Low)
            .with_specialization(3, 1, ExpertiseLevel::Medium);

        let levels: Vec<ExpertiseLevel> = dir
            .find_specializations("FinTech")
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.expertise_level)
            .collect();

        // Text ordering, not severity ordering.
        assert_eq!(
            levels,
            vec![ExpertiseLevel::Medium, ExpertiseLevel::Low, ExpertiseLevel::High]
        );
    }

    #[tokio::test]
    async fn unreachable_fails_every_call() {
        let dir = InMemoryDirectory::new().with_industry(1, "FinTech").unreachable();

        assert!(matches!(dir.list_industries().await, Err(DomainError::Query(_))));
        assert!(dir.find_specializations("FinTech").await.is_err());
    }
}
