//! The dashboard's user actions as plain request/response calls.
//!
//! Each action returns a [`Notice`] for the caller to render however it
//! likes. Nothing here prints or prompts.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use crate::{
    alerts::{self, AlertProfile},
    config::Config,
    error::FetchError,
    model::WeatherObservation,
    provider::{WeatherProvider, provider_from_config},
    quotes::{self, QuoteBook},
    report::format_observation,
    store::{HistoryRecord, HistoryStore, JournalEntry, JournalStore, RECENT_LINES},
};

const UNPROCESSABLE: &str = "Unable to process weather data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// Result of one action: a titled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub tone: Tone,
}

impl Notice {
    pub fn new(title: &str, body: impl Into<String>, tone: Tone) -> Self {
        Self { title: title.to_string(), body: body.into(), tone }
    }

    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self::new(title, body, Tone::Info)
    }

    pub fn success(title: &str, body: impl Into<String>) -> Self {
        Self::new(title, body, Tone::Success)
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self::new(title, body, Tone::Error)
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

#[derive(Debug)]
pub struct Dashboard {
    provider: Option<Box<dyn WeatherProvider>>,
    history: HistoryStore,
    journal: JournalStore,
    quotes: QuoteBook,
    alert_profile: AlertProfile,
}

impl Dashboard {
    pub fn new(
        provider: Option<Box<dyn WeatherProvider>>,
        data_dir: &Path,
        quotes: QuoteBook,
        alert_profile: AlertProfile,
    ) -> Self {
        Self {
            provider,
            history: HistoryStore::in_dir(data_dir),
            journal: JournalStore::in_dir(data_dir),
            quotes,
            alert_profile,
        }
    }

    /// Build from config. A missing API key leaves the weather actions
    /// unavailable but is not an error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let data_dir = config.data_dir()?;
        debug!(data_dir = %data_dir.display(), "opening dashboard");

        let provider = if config.is_configured() {
            Some(provider_from_config(config)?)
        } else {
            None
        };

        let quotes = QuoteBook::load(&data_dir.join(quotes::FILE_NAME));

        Ok(Self::new(provider, &data_dir, quotes, config.alert_profile))
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    async fn fetch(&self, city: &str) -> Result<WeatherObservation, Notice> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| Notice::error("Error", FetchError::NotConfigured.to_string()))?;

        provider.current(city).await.map_err(|err| match err {
            FetchError::Decode(_) => Notice::error("Error", UNPROCESSABLE),
            other => Notice::error("Error", other.to_string()),
        })
    }

    /// Look up current conditions and record them in history.
    pub async fn search(&self, city: &str) -> Notice {
        let city = city.trim();
        if city.is_empty() {
            return Notice::error("Missing City", "Please enter a city first!");
        }

        let obs = match self.fetch(city).await {
            Ok(obs) => obs,
            Err(notice) => return notice,
        };

        // Display and history need real readings; no zero defaults here.
        let (Some(condition), Some(_)) = (obs.primary_condition(), obs.main.as_ref()) else {
            return Notice::error("Error", UNPROCESSABLE);
        };

        let record = HistoryRecord::now(city, obs.temperature(), &condition.description);
        if let Err(err) = self.history.append(&record) {
            warn!(error = %err, "failed to save history");
        }

        let body = format!("{}\n{}", obs.icon_glyph(), format_observation(city, &obs));
        Notice::info("Current Weather", body)
    }

    /// Fetch and evaluate alerts. `profile` overrides the configured message set.
    pub async fn alerts(&self, city: &str, profile: Option<AlertProfile>) -> Notice {
        let city = city.trim();
        if city.is_empty() {
            return Notice::error("Alerts", "Enter a city first!");
        }

        let obs = match self.fetch(city).await {
            Ok(obs) => obs,
            Err(notice) => return notice,
        };

        let rules = profile.unwrap_or(self.alert_profile).rules();
        Notice::info("Weather Alerts", alerts::evaluate(rules, &obs).render())
    }

    pub fn history(&self) -> Notice {
        match self.history.read_last(RECENT_LINES) {
            Ok(lines) if !lines.is_empty() => Notice::info("Weather History", lines.join("\n")),
            Ok(_) => Notice::info("History", "No history yet!"),
            Err(err) => {
                warn!(error = %err, "failed to read history");
                Notice::info("History", "No history yet!")
            }
        }
    }

    pub fn add_journal(&self, city: &str, body: &str) -> Notice {
        let city = city.trim();
        if city.is_empty() {
            return Notice::error("Journal", "Enter a city first!");
        }

        let body = body.trim();
        if body.is_empty() {
            return Notice::error("Empty Entry", "Please write something before saving!");
        }

        if let Err(err) = self.journal.append(&JournalEntry::now(city, body)) {
            warn!(error = %err, "failed to save journal entry");
        }

        Notice::success("Saved", "Journal entry saved!")
    }

    pub fn journal(&self) -> Notice {
        if !self.journal.log().exists() {
            return Notice::info("Journal", "No journal entries yet!");
        }

        match self.journal.read_last(RECENT_LINES) {
            Ok(lines) if lines.is_empty() => Notice::info("Journal Entries", "No entries found."),
            Ok(lines) => Notice::info("Journal Entries", lines.join("\n")),
            Err(err) => Notice::error("Error", format!("Could not read journal: {err:#}")),
        }
    }

    pub fn quote(&self) -> Notice {
        Notice::info("Daily Inspiration", self.quotes.pick_random().to_string())
    }
}
