use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsError {
    #[error("Cannot connect to backend API. Make sure the backend server is running at {backend_url}")]
    Unavailable { backend_url: String },
    #[error("{message}")]
    Backend { message: String },
    #[error("request to {endpoint} timed out after {seconds}s")]
    Timeout { endpoint: String, seconds: u64 },
    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{endpoint} reported success without any data")]
    MissingData { endpoint: String },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl MapsError {
    /// Text shown to the user when this error ends a tool call.
    /// `action` reads like "searching places".
    pub fn display_text(&self, action: &str) -> String {
        match self {
            MapsError::Unavailable { .. } => format!("❌ {}", self),
            MapsError::Backend { message } => format!("Error {}: {}", action, message),
            other => format!("❌ Error: {}", other),
        }
    }

    /// Message placed under the `error` key of a structured record.
    /// `action` reads like "search places".
    pub fn record_message(&self, action: &str) -> String {
        match self {
            MapsError::Unavailable { .. } | MapsError::Backend { .. } => self.to_string(),
            other => format!("Failed to {}: {}", action, other),
        }
    }
}

#[derive(Debug, Error)]
pub enum ToolInvokeError {
    #[error("tool '{name}' is not registered")]
    NotFound { name: String },
    #[error("invalid arguments for tool '{name}': {source}")]
    InvalidArguments {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
