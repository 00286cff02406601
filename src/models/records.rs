//! Compact records handed to callers that post-process tool results
//! instead of displaying them.

use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum SearchRecord {
    Found {
        found: usize,
        places: Vec<PlaceSummary>,
    },
    Empty {
        message: String,
    },
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub google_maps_url: String,
    pub embed_map_url: String,
    pub place_id: Option<String>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsRecord {
    pub summary: Option<String>,
    pub distance: String,
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
    pub google_maps_url: String,
    pub embed_map_url: String,
    pub steps: Vec<StepRecord>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct StepRecord {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsRecord {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub google_maps_url: String,
    pub embed_map_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<HoursRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewRecord>>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoursRecord {
    pub open_now: Option<bool>,
    pub hours: Vec<String>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ReviewRecord {
    pub author: String,
    pub rating: u8,
    pub text: String,
}
