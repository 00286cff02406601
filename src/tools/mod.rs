pub mod error;
pub mod maps_adapter;
pub mod maps_tools;
pub mod registry;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::helpers::progress::ProgressEmitter;
use crate::tools::error::ToolInvokeError;

/// How a tool hands its result back to the host.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown-style text meant to be shown as is.
    #[default]
    Text,
    /// Fixed-key record for programmatic use.
    Record,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Record(Value),
}

impl ToolOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text(text) => Some(text.as_str()),
            ToolOutput::Record(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&Value> {
        match self {
            ToolOutput::Record(record) => Some(record),
            ToolOutput::Text(_) => None,
        }
    }
}

/// A named capability exposed to an AI host.
///
/// `execute` only fails when the host sent arguments that do not fit
/// [`Tool::parameters`]; every failure of the call itself is reported inside
/// the returned [`ToolOutput`].
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// JSON Schema of the arguments object.
    fn parameters(&self) -> Value;
    async fn execute(
        &self,
        args: Value,
        format: OutputFormat,
        emitter: &dyn ProgressEmitter,
    ) -> Result<ToolOutput, ToolInvokeError>;
}
