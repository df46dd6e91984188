//! Row builders shared by tests.

use crate::domain::{VcFirm, VentureCapitalist};

pub(crate) fn vc(id: i64, name: &str, firm_id: i64) -> VentureCapitalist {
    VentureCapitalist {
        id,
        name: name.to_string(),
        title: Some("Partner".to_string()),
        email: format!("{}@example.vc", name.to_lowercase().replace(' ', ".")),
        linkedin_url: None,
        twitter_url: None,
        bio: None,
        years_experience: Some(10),
        vc_firm_id: firm_id,
        profile_image_url: None,
        created_at: None,
        vc_firms: Vec::new(),
    }
}

pub(crate) fn firm(id: i64, name: &str) -> VcFirm {
    VcFirm {
        id,
        name: name.to_string(),
        description: None,
        website: None,
        location: None,
        founded_year: None,
        assets_under_management: None,
        logo_url: None,
        created_at: None,
    }
}
