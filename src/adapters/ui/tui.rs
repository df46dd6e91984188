//! Implements InputPort. Inquire-based industry selector with rendered result cards.

use crate::adapters::ui::banner;
use crate::adapters::ui::progress::with_spinner;
use crate::adapters::ui::render::{self, ResultsView, Tone};
use crate::domain::{DomainError, Industry};
use crate::ports::InputPort;
use crate::usecases::{CatalogService, SearchSession};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use inquire::Select;
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::info;

/// Applies the blue prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(PromptColor::LightBlue))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(PromptColor::LightBlue));
    inquire::set_global_render_config(config);
}

/// One entry of the selector.
#[derive(Debug, Clone, PartialEq)]
enum MenuChoice {
    Industry(String),
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Industry(name) => f.write_str(name),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

/// Industries in catalog order, then Quit.
fn menu(industries: &[Industry]) -> Vec<MenuChoice> {
    industries
        .iter()
        .map(|i| MenuChoice::Industry(i.name.clone()))
        .chain(std::iter::once(MenuChoice::Quit))
        .collect()
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Gray => Color::Grey,
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    catalog: Arc<CatalogService>,
    session: Arc<SearchSession>,
}

impl TuiInputPort {
    pub fn new(catalog: Arc<CatalogService>, session: Arc<SearchSession>) -> Self {
        Self { catalog, session }
    }

    /// Prints the finished search held by the session, if any.
    async fn print_results(&self) {
        let state = self.session.state().await;
        let Some(view) = render::results_view(&state, self.session.search_performed().await)
        else {
            return;
        };
        Self::print_view(&view);
    }

    fn print_view(view: &ResultsView) {
        let mut out = stdout();
        let _ = out.execute(SetAttribute(Attribute::Bold));
        let _ = out.execute(Print(format!("\r\n{}", view.title)));
        let _ = out.execute(SetAttribute(Attribute::Reset));
        let _ = out.execute(SetForegroundColor(Color::Blue));
        let _ = out.execute(Print(format!("  ({})\r\n\r\n", view.count)));
        let _ = out.execute(ResetColor);

        if view.empty {
            for line in render::NO_RESULTS {
                let _ = out.execute(Print(format!("  {}\r\n", line)));
            }
        }

        for card in &view.cards {
            let _ = out.execute(SetAttribute(Attribute::Bold));
            let _ = out.execute(Print(format!("  {}", card.name)));
            let _ = out.execute(SetAttribute(Attribute::Reset));
            let _ = out.execute(SetForegroundColor(tone_color(card.tone)));
            let _ = out.execute(Print(format!("  [{}]\r\n", card.badge)));
            let _ = out.execute(ResetColor);
            for line in &card.details {
                let _ = out.execute(Print(format!("    {}\r\n", line)));
            }
            let _ = out.execute(Print("\r\n"));
        }
        let _ = out.flush();
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let industries =
            with_spinner("Loading industries...", self.catalog.load_industries()).await;
        if industries.is_empty() {
            println!("No industries available. Check the connection and try again later.");
        }
        let options = menu(&industries);
        let mut cursor = 0;

        loop {
            let choice = match Select::new("Select an industry...", options.clone())
                .with_starting_cursor(cursor)
                .with_help_message("Enter to find VCs, Esc to quit")
                .prompt()
            {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            let industry = match choice {
                MenuChoice::Industry(name) => name,
                MenuChoice::Quit => break,
            };
            cursor = options
                .iter()
                .position(|o| *o == MenuChoice::Industry(industry.clone()))
                .unwrap_or(0);

            with_spinner("Searching for VCs...", self.session.search(&industry)).await;
            self.print_results().await;
        }

        info!("session ended");
        banner::print_footer();
        Ok(())
    }
}
