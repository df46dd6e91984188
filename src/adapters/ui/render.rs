//! Result cards. Pure text layout; colors are applied by the TUI.

use crate::domain::{ExpertiseLevel, Specialist};
use crate::usecases::{SearchOutcome, SearchState};

/// Bio is clamped to two lines of this width.
const BIO_WIDTH: usize = 76;
const BIO_LINES: usize = 2;

/// Badge color for an expertise level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Gray,
}

pub fn expertise_tone(level: &ExpertiseLevel) -> Tone {
    match level {
        ExpertiseLevel::High => Tone::Green,
        ExpertiseLevel::Medium => Tone::Yellow,
        ExpertiseLevel::Low | ExpertiseLevel::Unrecognized(_) => Tone::Gray,
    }
}

/// One specialist laid out for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub name: String,
    pub badge: String,
    pub tone: Tone,
    pub details: Vec<String>,
}

impl Card {
    pub fn from_specialist(s: &Specialist) -> Self {
        let vc = &s.profile;
        let firm = s.firm();
        let mut details = Vec::new();

        if let Some(title) = vc.title.as_deref().filter(|t| !t.is_empty()) {
            details.push(title.to_string());
        }
        if let Some(firm) = firm {
            details.push(firm.name.clone());
        }
        if let Some(years) = vc.years_experience {
            details.push(format!("{} years experience", years));
        }
        if let Some(bio) = vc.bio.as_deref() {
            details.extend(clamp_lines(bio, BIO_WIDTH, BIO_LINES));
        }
        if let Some(firm) = firm {
            let mut strip = Vec::new();
            if let Some(location) = firm.location.as_deref() {
                strip.push(location.to_string());
            }
            if let Some(year) = firm.founded_year {
                strip.push(format!("Founded {}", year));
            }
            if let Some(aum) = firm.assets_under_management.as_deref() {
                strip.push(format!("{} AUM", aum));
            }
            if !strip.is_empty() {
                details.push(strip.join(" | "));
            }
        }
        if !vc.email.is_empty() {
            details.push(format!("Email: mailto:{}", vc.email));
        }

        Self {
            name: vc.name.clone(),
            badge: format!("{} Expertise", s.expertise_level),
            tone: expertise_tone(&s.expertise_level),
            details,
        }
    }
}

/// Heading lines above the result list.
pub fn results_header(industry: &str, outcome: &SearchOutcome) -> (String, String) {
    (
        format!("{} Specialists", industry),
        format!("{} VCs found", outcome.len()),
    )
}

pub const NO_RESULTS: [&str; 2] = [
    "No VCs found for this industry",
    "Try selecting a different industry",
];

/// The results section for a finished search.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub title: String,
    pub count: String,
    pub cards: Vec<Card>,
    /// Show `NO_RESULTS` instead of cards.
    pub empty: bool,
}

/// Results section for the session slot. Nothing is shown before the first search
/// or while one is pending.
pub fn results_view(state: &SearchState, search_performed: bool) -> Option<ResultsView> {
    if !search_performed {
        return None;
    }
    let SearchState::Finished { industry, outcome } = state else {
        return None;
    };
    let (title, count) = results_header(industry, outcome);
    Some(ResultsView {
        title,
        count,
        cards: outcome.specialists().iter().map(Card::from_specialist).collect(),
        empty: outcome.is_empty(),
    })
}

/// Word-wrap `text` to `width` columns and keep at most `max_lines`, marking a cut
/// with "...".
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut truncated = false;

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                truncated = true;
                break;
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !truncated && !current.is_empty() {
        lines.push(current);
    }
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        truncated = true;
    }

    if truncated {
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(3);
            if last.chars().count() > keep {
                *last = last.chars().take(keep).collect();
            }
            last.push_str("...");
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDirectory;
    use crate::adapters::memory::fixtures::{firm, vc};
    use crate::usecases::{SearchSession, SpecialistResolver};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn specialist(level: ExpertiseLevel) -> Specialist {
        let mut profile = vc(1, "Ada Park", 10);
        profile.years_experience = Some(12);
        profile.bio = Some("Backs seed-stage payments companies.".to_string());
        let mut f = firm(10, "Acme Capital");
        f.location = Some("Austin, TX".to_string());
        f.founded_year = Some(2011);
        f.assets_under_management = Some("$2.5B".to_string());
        profile.vc_firms = vec![f];
        Specialist {
            profile,
            expertise_level: level,
        }
    }

    #[test]
    fn card_lists_profile_firm_and_contact() {
        let card = Card::from_specialist(&specialist(ExpertiseLevel::High));

        assert_eq!(
            card,
            Card {
                name: "Ada Park".to_string(),
                badge: "High Expertise".to_string(),
                tone: Tone::Green,
                details: vec![
                    "Partner".to_string(),
                    "Acme Capital".to_string(),
                    "12 years experience".to_string(),
                    "Backs seed-stage payments companies.".to_string(),
                    "Austin, TX | Founded 2011 | $2.5B AUM".to_string(),
                    "Email: mailto:ada.park@example.vc".to_string(),
                ],
            }
        );
    }

    #[test]
    fn card_without_firm_skips_firm_lines() {
        let mut s = specialist(ExpertiseLevel::Medium);
        s.profile.vc_firms.clear();
        s.profile.bio = None;

        let card = Card::from_specialist(&s);

        assert_eq!(card.tone, Tone::Yellow);
        assert_eq!(
            card.details,
            vec![
                "Partner".to_string(),
                "12 years experience".to_string(),
                "Email: mailto:ada.park@example.vc".to_string(),
            ]
        );
    }

    #[test]
    fn card_without_email_skips_contact_line() {
        let mut s = specialist(ExpertiseLevel::Low);
        s.profile.email = String::new();

        let card = Card::from_specialist(&s);

        assert!(!card.details.iter().any(|l| l.starts_with("Email:")), "{:?}", card.details);
    }

    #[test]
    fn unrecognized_level_gets_neutral_badge() {
        let card = Card::from_specialist(&specialist(ExpertiseLevel::parse("Guru")));

        assert_eq!(card.tone, Tone::Gray);
        assert_eq!(card.badge, "Guru Expertise");
        assert_eq!(expertise_tone(&ExpertiseLevel::Low), Tone::Gray);
    }

    #[test]
    fn header_counts_results() {
        let outcome = SearchOutcome::Found(vec![specialist(ExpertiseLevel::High)]);

        assert_eq!(
            results_header("FinTech", &outcome),
            ("FinTech Specialists".to_string(), "1 VCs found".to_string())
        );
        assert_eq!(
            results_header("HealthTech", &SearchOutcome::Degraded).1,
            "0 VCs found"
        );
    }

    fn session() -> SearchSession {
        let dir = InMemoryDirectory::new()
            .with_industry(1, "FinTech")
            .with_industry(2, "HealthTech")
            .with_firm(firm(10, "Acme Capital"))
            .with_professional(vc(1, "Ada Park", 10))
            .with_professional(vc(2, "Lee Moss", 10))
            .with_specialization(1, 1, ExpertiseLevel::Low)
            .with_specialization(2, 1, ExpertiseLevel::High);
        SearchSession::new(Arc::new(SpecialistResolver::new(Arc::new(dir))))
    }

    #[tokio::test]
    async fn view_follows_session_slot() {
        let session = session();
        assert_eq!(
            results_view(&session.state().await, session.search_performed().await),
            None
        );

        session.search("FinTech").await;
        let view = results_view(&session.state().await, session.search_performed().await)
            .unwrap();

        assert_eq!(view.title, "FinTech Specialists");
        assert_eq!(view.count, "2 VCs found");
        assert!(!view.empty);
        let names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lee Moss", "Ada Park"]);
    }

    #[tokio::test]
    async fn view_shows_notice_for_empty_search() {
        let session = session();

        session.search("HealthTech").await;
        let view = results_view(&session.state().await, session.search_performed().await)
            .unwrap();

        assert!(view.empty);
        assert!(view.cards.is_empty());
        assert_eq!(view.count, "0 VCs found");
    }

    #[test]
    fn view_hidden_until_finished() {
        let pending = SearchState::Searching {
            industry: "FinTech".to_string(),
        };
        assert_eq!(results_view(&pending, true), None);

        let finished = SearchState::Finished {
            industry: "FinTech".to_string(),
            outcome: SearchOutcome::Degraded,
        };
        assert_eq!(results_view(&finished, false), None);
        assert!(results_view(&finished, true).is_some_and(|v| v.empty));
    }

    #[test]
    fn clamp_keeps_short_text() {
        assert_eq!(clamp_lines("one two three", 20, 2), vec!["one two three"]);
        assert!(clamp_lines("   ", 20, 2).is_empty());
    }

    #[test]
    fn clamp_wraps_and_truncates() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";

        let lines = clamp_lines(text, 12, 2);

        assert_eq!(lines, vec!["alpha beta".to_string(), "gamma del...".to_string()]);
    }
}
