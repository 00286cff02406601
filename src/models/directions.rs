use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Directions {
    #[serde(default)]
    pub summary: Option<String>,
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_address: String,
    pub end_address: String,
    pub google_maps_url: String,
    pub embed_map_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TextValue {
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Step {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}
