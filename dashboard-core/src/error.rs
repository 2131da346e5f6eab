use thiserror::Error;

/// Failure of a single weather fetch. Each variant renders to the message
/// shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{status} for city '{city}': {body}")]
    Status {
        city: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(
        "No API key configured.\n\
         Hint: run `weather-dash configure` and enter your OpenWeather API key."
    )]
    NotConfigured,
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
