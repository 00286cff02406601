use std::time::Duration;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use crate::models::directions::Directions;
use crate::models::envelope::Envelope;
use crate::models::params::{DirectionsParams, PlaceDetailsParams, SearchPlacesParams};
use crate::models::place::Place;
use crate::tools::error::MapsError;

pub const SEARCH_PLACES_PATH: &str = "search-places";
pub const DIRECTIONS_PATH: &str = "directions";
pub const PLACE_DETAILS_PATH: &str = "place-details";

/// Thin client over the maps backend. One POST per call, no retries.
pub struct MapsBackendRepo {
    client: reqwest::Client,
    backend_url: String,
    timeout: Duration,
}

impl MapsBackendRepo {
    pub fn new(
        backend_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the maps backend")?;

        Ok(Self {
            client,
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub async fn search_places(
        &self,
        params: &SearchPlacesParams,
    ) -> Result<Vec<Place>, MapsError> {
        let places = self
            .post::<_, Vec<Place>>(SEARCH_PLACES_PATH, params)
            .await?;

        Ok(places.unwrap_or_default())
    }

    pub async fn directions(
        &self,
        params: &DirectionsParams,
    ) -> Result<Directions, MapsError> {
        self.post::<_, Directions>(DIRECTIONS_PATH, params)
            .await?
            .ok_or_else(|| MapsError::MissingData { endpoint: DIRECTIONS_PATH.to_string() })
    }

    pub async fn place_details(
        &self,
        params: &PlaceDetailsParams,
    ) -> Result<Place, MapsError> {
        self.post::<_, Place>(PLACE_DETAILS_PATH, params)
            .await?
            .ok_or_else(|| MapsError::MissingData { endpoint: PLACE_DETAILS_PATH.to_string() })
    }

    async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, MapsError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.backend_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(path, e))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| self.classify(path, e))?;

        if !status.is_success() {
            // Some backend failures come back as non-2xx with a regular envelope.
            if let Ok(envelope) = serde_json::from_str::<Envelope<Value>>(&payload) {
                if !envelope.success {
                    warn!("Maps backend rejected {} with HTTP {}: {}", path, status, envelope.error_message());
                    return Err(MapsError::Backend { message: envelope.error_message() });
                }
            }
            warn!("Maps backend responded to {} with HTTP {}", path, status);
            return Err(MapsError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        // `data` only has to fit `T` once the backend reported success.
        let envelope: Envelope<Value> = serde_json::from_str(&payload)
            .map_err(|source| MapsError::Decode { endpoint: path.to_string(), source })?;

        if !envelope.success {
            warn!("Maps backend reported failure for {}: {}", path, envelope.error_message());
            return Err(MapsError::Backend { message: envelope.error_message() });
        }

        envelope
            .data
            .map(serde_json::from_value::<T>)
            .transpose()
            .map_err(|source| MapsError::Decode { endpoint: path.to_string(), source })
    }

    fn classify(
        &self,
        path: &str,
        e: reqwest::Error,
    ) -> MapsError {
        if e.is_connect() {
            warn!("Cannot reach maps backend at {} due to: {}", self.backend_url, e);
            MapsError::Unavailable { backend_url: self.backend_url.clone() }
        } else if e.is_timeout() {
            warn!("Request to {} timed out after {:?}", path, self.timeout);
            MapsError::Timeout { endpoint: path.to_string(), seconds: self.timeout.as_secs() }
        } else {
            warn!("Request to {} failed due to: {}", path, e);
            MapsError::Transport { endpoint: path.to_string(), source: e }
        }
    }
}
