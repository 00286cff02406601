use std::collections::BTreeMap;
use std::sync::Arc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use crate::helpers::progress::ProgressEmitter;
use crate::tools::error::ToolInvokeError;
use crate::tools::maps_adapter::MapsAdapter;
use crate::tools::maps_tools::{GetDirectionsTool, GetPlaceDetailsTool, SearchPlacesTool};
use crate::tools::{OutputFormat, Tool, ToolOutput};

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ToolDefinition {
    pub r#type: String,
    pub function: FunctionDefinition,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Registry holding `search_places`, `get_directions` and `get_place_details`.
    pub fn with_maps_tools(adapter: Arc<MapsAdapter>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SearchPlacesTool { adapter: adapter.clone() }));
        registry.register(Box::new(GetDirectionsTool { adapter: adapter.clone() }));
        registry.register(Box::new(GetPlaceDetailsTool { adapter }));
        registry
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        info!("Registering tool {}", tool.name());
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn get_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| {
            ToolDefinition {
                r#type: "function".to_string(),
                function: FunctionDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters(),
                },
            }
        }).collect()
    }

    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        format: OutputFormat,
        emitter: &dyn ProgressEmitter,
    ) -> Result<ToolOutput, ToolInvokeError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolInvokeError::NotFound { name: name.to_string() })?;
        tool.execute(args, format, emitter).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
