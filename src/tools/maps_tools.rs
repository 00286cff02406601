use std::future::Future;
use std::sync::Arc;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::warn;
use crate::helpers::progress::{ProgressEmitter, ProgressEvent};
use crate::models::params::{DirectionsParams, PlaceDetailsParams, SearchPlacesParams};
use crate::tools::error::{MapsError, ToolInvokeError};
use crate::tools::maps_adapter::{MapsAdapter, Report};
use crate::tools::{OutputFormat, Tool, ToolOutput};

/// Wording used around one operation, for progress events and failures.
struct Labels {
    started: String,
    finished: &'static str,
    failed: &'static str,
    /// "Error searching places: ..."
    text_action: &'static str,
    /// "Failed to search places: ..."
    record_action: &'static str,
}

async fn invoke<R, F>(
    format: OutputFormat,
    emitter: &dyn ProgressEmitter,
    labels: Labels,
    call: F,
) -> ToolOutput
where
    R: Report,
    F: Future<Output = Result<R, MapsError>>,
{
    emitter.emit(ProgressEvent::status(labels.started, false));

    match call.await {
        Ok(report) => {
            emitter.emit(ProgressEvent::status(labels.finished, true));
            match format {
                OutputFormat::Text => ToolOutput::Text(report.to_text()),
                OutputFormat::Record => ToolOutput::Record(report.to_record()),
            }
        }
        Err(e) => {
            warn!("Maps tool call failed while {}: {}", labels.text_action, e);
            emitter.emit(ProgressEvent::status(labels.failed, true));
            match format {
                OutputFormat::Text => ToolOutput::Text(e.display_text(labels.text_action)),
                OutputFormat::Record => {
                    ToolOutput::Record(json!({ "error": e.record_message(labels.record_action) }))
                }
            }
        }
    }
}

fn parse_args<T: DeserializeOwned>(
    name: &str,
    args: Value,
) -> Result<T, ToolInvokeError> {
    serde_json::from_value(args).map_err(|source| ToolInvokeError::InvalidArguments {
        name: name.to_string(),
        source,
    })
}

pub struct SearchPlacesTool {
    pub adapter: Arc<MapsAdapter>,
}

#[async_trait]
impl Tool for SearchPlacesTool {
    fn name(&self) -> &str { "search_places" }
    fn description(&self) -> &str {
        "Search for places, restaurants, shops, or any location based on a text query. \
         Use this when users ask to find places, restaurants, cafes, or any business."
    }
    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., \"coffee shops\", \"italian restaurants\")"
                },
                "location": {
                    "type": "string",
                    "description": "Optional location to search near (e.g., \"New York\", \"40.7128,-74.0060\")"
                },
                "radius": {
                    "type": "integer",
                    "description": "Search radius in meters (default: 5000, max: 50000)",
                    "default": 5000,
                    "minimum": 1
                }
            },
            "required": ["query"]
        })
    }
    async fn execute(
        &self,
        args: Value,
        format: OutputFormat,
        emitter: &dyn ProgressEmitter,
    ) -> Result<ToolOutput, ToolInvokeError> {
        let params: SearchPlacesParams = parse_args(self.name(), args)?;
        let labels = Labels {
            started: format!("Searching for {}...", params.query),
            finished: "Search completed",
            failed: "Search failed",
            text_action: "searching places",
            record_action: "search places",
        };

        Ok(invoke(format, emitter, labels, self.adapter.search_places(&params)).await)
    }
}

pub struct GetDirectionsTool {
    pub adapter: Arc<MapsAdapter>,
}

#[async_trait]
impl Tool for GetDirectionsTool {
    fn name(&self) -> &str { "get_directions" }
    fn description(&self) -> &str {
        "Get directions and route information between two locations. \
         Use this when users ask for directions, routes, or how to get somewhere."
    }
    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "Starting location (address or coordinates)"
                },
                "destination": {
                    "type": "string",
                    "description": "Destination location (address or coordinates)"
                },
                "mode": {
                    "type": "string",
                    "description": "Travel mode - one of: driving, walking, bicycling, transit (default: driving)",
                    "enum": ["driving", "walking", "bicycling", "transit"],
                    "default": "driving"
                }
            },
            "required": ["origin", "destination"]
        })
    }
    async fn execute(
        &self,
        args: Value,
        format: OutputFormat,
        emitter: &dyn ProgressEmitter,
    ) -> Result<ToolOutput, ToolInvokeError> {
        let params: DirectionsParams = parse_args(self.name(), args)?;
        let labels = Labels {
            started: "Getting directions...".to_string(),
            finished: "Directions ready",
            failed: "Directions failed",
            text_action: "getting directions",
            record_action: "get directions",
        };

        Ok(invoke(format, emitter, labels, self.adapter.get_directions(&params)).await)
    }
}

pub struct GetPlaceDetailsTool {
    pub adapter: Arc<MapsAdapter>,
}

#[async_trait]
impl Tool for GetPlaceDetailsTool {
    fn name(&self) -> &str { "get_place_details" }
    fn description(&self) -> &str {
        "Get detailed information about a specific place including ratings, reviews, \
         opening hours, contact info. Use this when users want more details about a place."
    }
    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "placeId": {
                    "type": "string",
                    "description": "Google Maps Place ID (from search results)"
                }
            },
            "required": ["placeId"]
        })
    }
    async fn execute(
        &self,
        args: Value,
        format: OutputFormat,
        emitter: &dyn ProgressEmitter,
    ) -> Result<ToolOutput, ToolInvokeError> {
        let params: PlaceDetailsParams = parse_args(self.name(), args)?;
        let labels = Labels {
            started: "Getting place details...".to_string(),
            finished: "Details loaded",
            failed: "Details unavailable",
            text_action: "getting place details",
            record_action: "get place details",
        };

        Ok(invoke(format, emitter, labels, self.adapter.get_place_details(&params)).await)
    }
}
