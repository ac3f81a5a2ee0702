// Error types returned by the library. The UI decides how each one is
// printed; none of them is fatal to the menu loop.

use std::path::PathBuf;

/// Failure of a chat-completion round trip.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response has no choices")]
    NoChoices,
}

/// Failure while writing a report to disk.
#[derive(Debug, thiserror::Error)]
#[error("cannot write {}: {source}", .path.display())]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure of a weather lookup, from the request up to the report file.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("weather endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("city not found")]
    CityNotFound,

    #[error("weather response is missing `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Report(#[from] ReportError),
}
