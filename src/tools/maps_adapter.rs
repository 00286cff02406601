//! Core of the maps tools.
//!
//! Every operation is one backend round-trip followed by the truncation
//! policy. The resulting report can then be viewed either as display text or
//! as a compact record, so both views always agree on what was returned.

use serde_json::{json, Value};
use tracing::info;
use crate::helpers::text_format;
use crate::models::directions::Directions;
use crate::models::params::{DirectionsParams, PlaceDetailsParams, SearchPlacesParams};
use crate::models::place::{Place, Review};
use crate::models::records::{
    DirectionsRecord, HoursRecord, PlaceDetailsRecord, PlaceSummary, ReviewRecord, SearchRecord,
    StepRecord,
};
use crate::repositories::maps_backend_repo::MapsBackendRepo;
use crate::tools::error::MapsError;

pub const DEFAULT_MAX_PLACES: usize = 5;
pub const DEFAULT_MAX_STEPS: usize = 10;
pub const DEFAULT_MAX_REVIEWS: usize = 3;
pub const DEFAULT_REVIEW_TEXT_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TruncationLimits {
    pub max_places: usize,
    pub max_steps: usize,
    pub max_reviews: usize,
    pub review_text_chars: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            max_places: DEFAULT_MAX_PLACES,
            max_steps: DEFAULT_MAX_STEPS,
            max_reviews: DEFAULT_MAX_REVIEWS,
            review_text_chars: DEFAULT_REVIEW_TEXT_CHARS,
        }
    }
}

/// Both views a tool can hand back to its caller.
pub trait Report {
    fn to_text(&self) -> String;
    fn to_record(&self) -> Value;
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceSearch {
    pub query: String,
    /// Number of places the backend returned, before truncation.
    pub total: usize,
    pub places: Vec<Place>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub directions: Directions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
}

pub struct MapsAdapter {
    repo: MapsBackendRepo,
    limits: TruncationLimits,
}

impl MapsAdapter {
    pub fn new(
        repo: MapsBackendRepo,
        limits: TruncationLimits,
    ) -> Self {
        Self {
            repo,
            limits,
        }
    }

    pub fn limits(&self) -> TruncationLimits {
        self.limits
    }

    pub fn backend_url(&self) -> &str {
        self.repo.backend_url()
    }

    pub async fn search_places(
        &self,
        params: &SearchPlacesParams,
    ) -> Result<PlaceSearch, MapsError> {
        if params.query.trim().is_empty() {
            return Err(MapsError::InvalidArgument("query must not be empty".to_string()));
        }

        info!("Searching places for '{}' (location: {:?}, radius: {})", params.query, params.location, params.radius);
        let mut places = self.repo.search_places(params).await?;
        let total = places.len();
        places.truncate(self.limits.max_places);

        Ok(PlaceSearch {
            query: params.query.clone(),
            total,
            places,
        })
    }

    pub async fn get_directions(
        &self,
        params: &DirectionsParams,
    ) -> Result<Route, MapsError> {
        info!("Getting {} directions from '{}' to '{}'", params.mode, params.origin, params.destination);
        let mut directions = self.repo.directions(params).await?;
        directions.steps.truncate(self.limits.max_steps);

        Ok(Route {
            origin: params.origin.clone(),
            destination: params.destination.clone(),
            mode: params.mode.clone(),
            directions,
        })
    }

    pub async fn get_place_details(
        &self,
        params: &PlaceDetailsParams,
    ) -> Result<PlaceDetails, MapsError> {
        if params.place_id.trim().is_empty() {
            return Err(MapsError::InvalidArgument("placeId must not be empty".to_string()));
        }

        info!("Getting place details for {}", params.place_id);
        let mut place = self.repo.place_details(params).await?;
        if let Some(reviews) = place.reviews.as_mut() {
            reviews.truncate(self.limits.max_reviews);
            for review in reviews.iter_mut() {
                review.text = truncate_chars(&review.text, self.limits.review_text_chars);
            }
        }

        Ok(PlaceDetails { place })
    }
}

/// Cuts on character boundaries, never inside a multi-byte sequence.
pub fn truncate_chars(
    text: &str,
    max_chars: usize,
) -> String {
    text.chars().take(max_chars).collect()
}

fn to_value<T: serde::Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or_else(|e| json!({ "error": e.to_string() }))
}

impl Report for PlaceSearch {
    fn to_text(&self) -> String {
        text_format::render_place_search(self)
    }

    fn to_record(&self) -> Value {
        let record = if self.places.is_empty() {
            SearchRecord::Empty {
                message: format!("No places found for '{}'", self.query),
            }
        } else {
            SearchRecord::Found {
                found: self.total,
                places: self
                    .places
                    .iter()
                    .map(|place| PlaceSummary {
                        name: place.name.clone(),
                        address: place.address.clone(),
                        rating: place.rating,
                        google_maps_url: place.google_maps_url.clone(),
                        embed_map_url: place.embed_map_url.clone(),
                        place_id: place.place_id.clone(),
                    })
                    .collect(),
            }
        };
        to_value(&record)
    }
}

impl Report for Route {
    fn to_text(&self) -> String {
        text_format::render_route(self)
    }

    fn to_record(&self) -> Value {
        let directions = &self.directions;
        to_value(&DirectionsRecord {
            summary: directions.summary.clone(),
            distance: directions.distance.text.clone(),
            duration: directions.duration.text.clone(),
            start_address: directions.start_address.clone(),
            end_address: directions.end_address.clone(),
            google_maps_url: directions.google_maps_url.clone(),
            embed_map_url: directions.embed_map_url.clone(),
            steps: directions
                .steps
                .iter()
                .map(|step| StepRecord {
                    instruction: step.instruction.clone(),
                    distance: step.distance.clone(),
                    duration: step.duration.clone(),
                })
                .collect(),
        })
    }
}

impl Report for PlaceDetails {
    fn to_text(&self) -> String {
        text_format::render_place_details(self)
    }

    fn to_record(&self) -> Value {
        let place = &self.place;
        to_value(&PlaceDetailsRecord {
            name: place.name.clone(),
            address: place.address.clone(),
            rating: place.rating,
            user_ratings_total: place.user_ratings_total,
            phone_number: place.phone_number.clone(),
            website: place.website.clone(),
            google_maps_url: place.google_maps_url.clone(),
            embed_map_url: place.embed_map_url.clone(),
            opening_hours: place
                .opening_hours
                .as_ref()
                .filter(|hours| !hours.is_empty())
                .map(|hours| HoursRecord {
                    open_now: hours.open_now,
                    hours: hours.weekday_text.clone(),
                }),
            reviews: place
                .reviews
                .as_ref()
                .filter(|reviews| !reviews.is_empty())
                .map(|reviews| reviews.iter().map(review_record).collect()),
        })
    }
}

fn review_record(review: &Review) -> ReviewRecord {
    ReviewRecord {
        author: review.author_name.clone(),
        rating: review.rating,
        text: review.text.clone(),
    }
}
