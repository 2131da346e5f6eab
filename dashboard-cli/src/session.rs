//! Interactive menu session: the terminal stand-in for the dashboard window.

use anyhow::Result;
use dashboard_core::{AlertProfile, Dashboard};
use inquire::{InquireError, Select, Text};
use std::fmt;

use crate::cli::print_notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    Alerts,
    QuickAlerts,
    History,
    AddJournal,
    ViewJournal,
    NewQuote,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::Search,
        Action::Alerts,
        Action::QuickAlerts,
        Action::History,
        Action::AddJournal,
        Action::ViewJournal,
        Action::NewQuote,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Search => "Search",
            Action::Alerts => "Alerts",
            Action::QuickAlerts => "Quick alerts",
            Action::History => "History",
            Action::AddJournal => "Journal",
            Action::ViewJournal => "View Journal",
            Action::NewQuote => "New Quote",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Run until the user picks Quit or cancels the menu.
pub async fn run(dashboard: &Dashboard) -> Result<()> {
    print_notice(&dashboard.quote());

    // The last city entered, offered as the default for the next prompt.
    let mut city = String::new();

    loop {
        println!();
        let action = match Select::new("Weather Dashboard", Action::ALL.to_vec()).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let notice = match action {
            Action::Quit => break,
            Action::Search => {
                let Some(c) = ask_city(&city)? else { continue };
                city = c;
                dashboard.search(&city).await
            }
            Action::Alerts | Action::QuickAlerts => {
                let Some(c) = ask_city(&city)? else { continue };
                city = c;
                let profile = (action == Action::QuickAlerts).then_some(AlertProfile::Brief);
                dashboard.alerts(&city, profile).await
            }
            Action::History => dashboard.history(),
            Action::AddJournal => {
                let Some(c) = ask_city(&city)? else { continue };
                city = c;
                let Some(text) = ask(&format!("Journal for {}:", city.trim()), "")? else {
                    continue;
                };
                dashboard.add_journal(&city, &text)
            }
            Action::ViewJournal => dashboard.journal(),
            Action::NewQuote => dashboard.quote(),
        };

        print_notice(&notice);
    }

    Ok(())
}

fn ask_city(previous: &str) -> Result<Option<String>> {
    ask("City:", previous)
}

/// Prompt for a line of text. `None` when the user cancels with Esc.
fn ask(message: &str, initial: &str) -> Result<Option<String>> {
    match Text::new(message).with_initial_value(initial).prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
