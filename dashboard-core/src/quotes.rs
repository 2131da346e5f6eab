use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;
use std::{fmt, path::Path};
use tracing::warn;

pub const FILE_NAME: &str = "quotes.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    fn new(text: &str, author: &str) -> Self {
        Self { text: text.to_string(), author: author.to_string() }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\n— {}", self.text, self.author)
    }
}

#[derive(Debug, Deserialize)]
struct QuoteRow {
    #[serde(rename = "Quote", default)]
    quote: String,
    #[serde(rename = "Author", default)]
    author: String,
}

/// Immutable set of quotes, loaded once. Never empty.
#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn fallback() -> Self {
        Self {
            quotes: vec![
                Quote::new("Every day is a fresh start.", "Unknown"),
                Quote::new("The weather is perfect for staying positive.", "Me"),
            ],
        }
    }

    /// Load from a CSV file with `Quote` and `Author` columns. Any failure,
    /// or a file with no usable rows, yields the fallback quotes.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::fallback();
        }

        match read_quotes(path) {
            Ok(quotes) if !quotes.is_empty() => Self { quotes },
            Ok(_) => Self::fallback(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not load quotes, using defaults");
                Self::fallback()
            }
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Uniform pick, with replacement.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &Quote {
        &self.quotes[rng.gen_range(0..self.quotes.len())]
    }

    pub fn pick_random(&self) -> &Quote {
        self.pick(&mut rand::thread_rng())
    }
}

fn read_quotes(path: &Path) -> Result<Vec<Quote>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open quotes file: {}", path.display()))?;

    let mut quotes = Vec::new();
    for row in reader.deserialize::<QuoteRow>() {
        let row = row.with_context(|| format!("Malformed row in {}", path.display()))?;

        let text = row.quote.trim().trim_matches('"').trim();
        let author = row.author.trim();
        if !text.is_empty() && !author.is_empty() {
            quotes.push(Quote::new(text, author));
        }
    }

    Ok(quotes)
}
