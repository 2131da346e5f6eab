//! Append-only text logs for search history and journal entries.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// How many lines the history and journal views show.
pub const RECENT_LINES: usize = 5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One UTF-8 text file, one record per line, oldest first.
#[derive(Debug, Clone)]
pub struct LineLog {
    path: PathBuf,
}

impl LineLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one line. Embedded line breaks are flattened so a record never
    /// spans lines.
    pub fn append_line(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut record = single_line(line);
        record.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        file.write_all(record.as_bytes())
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;

        Ok(())
    }

    /// The last `n` lines, oldest of the tail first. A missing file reads as empty.
    pub fn read_last(&self, n: usize) -> Result<Vec<String>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(n);

        Ok(lines[start..].iter().map(|l| l.to_string()).collect())
    }
}

fn single_line(s: &str) -> String {
    s.lines().map(str::trim_end).collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Local>,
    pub city: String,
    /// Rounded °F.
    pub temperature: i64,
    pub description: String,
}

impl HistoryRecord {
    pub fn now(city: &str, temperature: f64, description: &str) -> Self {
        Self {
            timestamp: Local::now(),
            city: city.to_string(),
            temperature: temperature.round_ties_even() as i64,
            description: description.to_string(),
        }
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}, {}, {}°F, {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.city,
            self.temperature,
            self.description
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    pub city: String,
    pub body: String,
}

impl JournalEntry {
    pub fn now(city: &str, body: &str) -> Self {
        Self {
            timestamp: Local::now(),
            city: city.to_string(),
            body: body.to_string(),
        }
    }

    pub fn to_line(&self) -> String {
        format!("{}, {}: {}", self.timestamp.format(TIMESTAMP_FORMAT), self.city, self.body)
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    log: LineLog,
}

impl HistoryStore {
    pub const FILE_NAME: &'static str = "weather_history.txt";

    pub fn in_dir(dir: &Path) -> Self {
        Self { log: LineLog::new(dir.join(Self::FILE_NAME)) }
    }

    pub fn append(&self, record: &HistoryRecord) -> Result<()> {
        self.log.append_line(&record.to_line())
    }

    pub fn read_last(&self, n: usize) -> Result<Vec<String>> {
        self.log.read_last(n)
    }

    pub fn log(&self) -> &LineLog {
        &self.log
    }
}

#[derive(Debug, Clone)]
pub struct JournalStore {
    log: LineLog,
}

impl JournalStore {
    pub const FILE_NAME: &'static str = "weather_journal.txt";

    pub fn in_dir(dir: &Path) -> Self {
        Self { log: LineLog::new(dir.join(Self::FILE_NAME)) }
    }

    pub fn append(&self, entry: &JournalEntry) -> Result<()> {
        self.log.append_line(&entry.to_line())
    }

    pub fn read_last(&self, n: usize) -> Result<Vec<String>> {
        self.log.read_last(n)
    }

    pub fn log(&self) -> &LineLog {
        &self.log
    }
}
