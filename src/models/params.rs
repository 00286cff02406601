use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: u32 = 5000;
pub const DEFAULT_MODE: &str = "driving";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SearchPlacesParams {
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_radius")]
    pub radius: u32,
}

impl SearchPlacesParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
            radius: DEFAULT_RADIUS,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct DirectionsParams {
    pub origin: String,
    pub destination: String,
    /// One of driving, walking, bicycling, transit. The backend validates it.
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl DirectionsParams {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsParams {
    pub place_id: String,
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}
