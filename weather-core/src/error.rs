use thiserror::Error;

/// Why a weather snapshot could not be produced.
///
/// Callers at the HTTP boundary treat every variant the same way; the
/// distinction exists for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured for the weather provider")]
    Configuration,

    #[error("weather provider responded with status {status}")]
    Provider { status: u16 },

    #[error("unexpected provider response: {0}")]
    DataShape(String),

    #[error("request to weather provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Network, timeout, and syntax failures, as opposed to a definite answer
    /// from the provider.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Http(_) | FetchError::Decode(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => FetchError::DataShape(err.to_string()),
            _ => FetchError::Decode(err),
        }
    }
}

/// Problems with the city dataset. These are fatal at startup.
#[derive(Debug, Error)]
pub enum CityDataError {
    #[error("failed to read city list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse city list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("city list is empty")]
    Empty,
}
