use serde::{Deserialize, Serialize};

/// Uniform wrapper the maps backend puts around every response.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<EnvelopeError>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct EnvelopeError {
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Message to surface when the backend reported `success=false`.
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
