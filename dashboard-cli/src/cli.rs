use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::{AlertProfile, Config, Dashboard, Notice, Tone};
use inquire::{Password, PasswordDisplayMode, Text};
use std::{path::PathBuf, process::ExitCode};

use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Weather dashboard")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for history, journal and quotes files.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Without a subcommand, an interactive menu session starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure {
        /// Key to store; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,

        /// Default message set for `alerts`.
        #[arg(long, value_enum)]
        alert_profile: Option<ProfileArg>,
    },

    /// Show current weather for a city.
    Search {
        city: String,
    },

    /// Check weather alerts for a city.
    Alerts {
        city: String,

        /// Use the short message set.
        #[arg(long)]
        brief: bool,
    },

    /// Show the most recent searches.
    History,

    /// Write or read the weather journal.
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Show a random quote.
    Quote,
}

#[derive(Debug, Subcommand)]
pub enum JournalAction {
    /// Add an entry for a city.
    Add {
        city: String,

        /// Entry text; prompted for when absent.
        text: Option<String>,
    },

    /// Show the most recent entries.
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Advisory,
    Brief,
}

impl From<ProfileArg> for AlertProfile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Advisory => AlertProfile::Advisory,
            ProfileArg::Brief => AlertProfile::Brief,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let mut config = Config::load_from(&config_path)?;
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }

        let Some(command) = self.command else {
            let dashboard = Dashboard::from_config(&config)?;
            session::run(&dashboard).await?;
            return Ok(ExitCode::SUCCESS);
        };

        let notice = match command {
            Command::Configure { api_key, alert_profile } => {
                configure(config, &config_path, api_key, alert_profile)?;
                return Ok(ExitCode::SUCCESS);
            }
            Command::Search { city } => Dashboard::from_config(&config)?.search(&city).await,
            Command::Alerts { city, brief } => {
                let profile = brief.then_some(AlertProfile::Brief);
                Dashboard::from_config(&config)?.alerts(&city, profile).await
            }
            Command::History => Dashboard::from_config(&config)?.history(),
            Command::Journal { action: JournalAction::Add { city, text } } => {
                let dashboard = Dashboard::from_config(&config)?;
                let text = match text {
                    Some(text) => text,
                    // Dashboard rejects a blank city; don't prompt for text first.
                    None if city.trim().is_empty() => String::new(),
                    None => Text::new(&format!("Journal for {}:", city.trim()))
                        .prompt()
                        .context("Failed to read journal entry")?,
                };
                dashboard.add_journal(&city, &text)
            }
            Command::Journal { action: JournalAction::Show } => {
                Dashboard::from_config(&config)?.journal()
            }
            Command::Quote => Dashboard::from_config(&config)?.quote(),
        };

        print_notice(&notice);

        Ok(if notice.is_error() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
    }
}

fn configure(
    mut config: Config,
    path: &std::path::Path,
    api_key: Option<String>,
    alert_profile: Option<ProfileArg>,
) -> anyhow::Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    config.set_api_key(api_key);
    config.api_key()?;

    if let Some(profile) = alert_profile {
        config.alert_profile = profile.into();
    }

    config.save_to(path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

/// Print a notice: errors to stderr, everything else to stdout.
pub fn print_notice(notice: &Notice) {
    let text = render_notice(notice);
    match notice.tone {
        Tone::Error => eprintln!("{text}"),
        Tone::Info | Tone::Success => println!("{text}"),
    }
}

fn render_notice(notice: &Notice) -> String {
    let rule = "─".repeat(notice.title.chars().count());
    format!("{}\n{}\n{}", notice.title, rule, notice.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_brief_alerts() {
        let cli = Cli::parse_from(["weather-dash", "alerts", "Denver", "--brief"]);
        assert!(matches!(cli.command, Some(Command::Alerts { ref city, brief: true }) if city == "Denver"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["weather-dash", "history", "--data-dir", "/tmp/wd"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/wd")));
    }

    #[test]
    fn renders_title_rule_and_body() {
        let notice = Notice::info("History", "No history yet!");
        assert_eq!(render_notice(&notice), "History\n───────\nNo history yet!");
    }
}
