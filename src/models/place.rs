use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub google_maps_url: String,
    pub embed_map_url: String,
    /// Search results always carry it, detail payloads may omit it.
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, alias = "hours")]
    pub weekday_text: Vec<String>,
}

impl OpeningHours {
    /// `{}` from the backend carries no hours information at all.
    pub fn is_empty(&self) -> bool {
        self.open_now.is_none() && self.weekday_text.is_empty()
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "author")]
    pub author_name: String,
    pub rating: u8,
    #[serde(default)]
    pub text: String,
}
