//! Domain entities. Read-only copies of the directory tables.
//!
//! Field names follow the store's column names so rows decode without mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An industry a VC can specialize in. `name` is the unique display key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A venture capital firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcFirm {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    /// Free text, e.g. "$2.5B".
    #[serde(default)]
    pub assets_under_management: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A venture capitalist. Belongs to exactly one firm via `vc_firm_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentureCapitalist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Empty when the column is null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    pub vc_firm_id: i64,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Firm populated by the join. At most one entry; empty when not embedded.
    #[serde(default, deserialize_with = "embedded_firm")]
    pub vc_firms: Vec<VcFirm>,
}

impl VentureCapitalist {
    /// The embedded firm, if the join populated one.
    pub fn firm(&self) -> Option<&VcFirm> {
        self.vc_firms.first()
    }
}

/// Null text columns decode as an empty string instead of failing the row.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// PostgREST embeds a many-to-one relation as an object (or null); some clients
/// expect an array. Accept all three and keep at most one firm.
fn embedded_firm<'de, D>(deserializer: D) -> Result<Vec<VcFirm>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(VcFirm),
        Many(Vec<VcFirm>),
    }

    let mut firms = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(firm)) => vec![firm],
        Some(OneOrMany::Many(firms)) => firms,
    };
    firms.truncate(1);
    Ok(firms)
}

/// Expertise level of a specialization.
///
/// The store only holds `Low`, `Medium` or `High`. Anything else (including null)
/// decodes as `Unrecognized` with the raw text, so a bad row never fails a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpertiseLevel {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl ExpertiseLevel {
    /// Exact, case-sensitive match on the stored value.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Severity rank used for result ordering. Higher is more expert.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unrecognized(_) => 0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ExpertiseLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExpertiseLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(Self::parse)
            .unwrap_or_else(|| Self::Unrecognized(String::new())))
    }
}

/// Join row of `vc_industry_specializations`: one VC specialized in one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcIndustrySpecialization {
    pub id: i64,
    pub vc_id: i64,
    pub industry_id: i64,
    pub expertise_level: ExpertiseLevel,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One specialization row as returned by the join: the level plus the linked VC
/// (with its firm embedded).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecializationMatch {
    pub expertise_level: ExpertiseLevel,
    pub professional: VentureCapitalist,
}

/// Output record of a specialist search: the VC merged with the expertise level
/// of the matching specialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Specialist {
    #[serde(flatten)]
    pub profile: VentureCapitalist,
    pub expertise_level: ExpertiseLevel,
}

impl Specialist {
    pub fn firm(&self) -> Option<&VcFirm> {
        self.profile.firm()
    }
}
