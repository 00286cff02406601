#![allow(dead_code)]
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use maps_tool_adapter::repositories::maps_backend_repo::MapsBackendRepo;
use maps_tool_adapter::tools::maps_adapter::{MapsAdapter, TruncationLimits};
use maps_tool_adapter::tools::registry::ToolRegistry;

/// Request bodies the mock backend received, in arrival order.
#[derive(Clone, Default)]
pub struct Captured(pub Arc<Mutex<Vec<Value>>>);

impl Captured {
    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }
}

pub fn respond_with(
    endpoint: &str,
    status: StatusCode,
    response: Value,
    captured: Captured,
) -> Router {
    Router::new().route(
        &format!("/api/maps/{}", endpoint),
        post(move |Json(body): Json<Value>| {
            let response = response.clone();
            let captured = captured.clone();
            async move {
                captured.0.lock().unwrap().push(body);
                (status, Json(response))
            }
        }),
    )
}

pub fn success(endpoint: &str, data: Value) -> Router {
    respond_with(endpoint, StatusCode::OK, json!({ "success": true, "data": data }), Captured::default())
}

pub fn failure(endpoint: &str, message: &str) -> Router {
    respond_with(
        endpoint,
        StatusCode::OK,
        json!({ "success": false, "error": { "message": message } }),
        Captured::default(),
    )
}

/// Serves `app` on an ephemeral port and returns its root url.
pub async fn spawn_router(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });
    format!("http://{}", address)
}

/// Serves a mock maps backend and returns its base url.
pub async fn spawn_backend(app: Router) -> String {
    format!("{}/api/maps", spawn_router(app).await)
}

/// Base url of a port nobody listens on.
pub fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/maps", address)
}

pub fn adapter_for(backend_url: &str) -> Arc<MapsAdapter> {
    adapter_with_timeout(backend_url, Duration::from_secs(10))
}

pub fn adapter_with_timeout(backend_url: &str, timeout: Duration) -> Arc<MapsAdapter> {
    let repo = MapsBackendRepo::new(backend_url, timeout).unwrap();
    Arc::new(MapsAdapter::new(repo, TruncationLimits::default()))
}

pub fn registry_for(backend_url: &str) -> ToolRegistry {
    ToolRegistry::with_maps_tools(adapter_for(backend_url))
}

pub fn place_json(i: usize) -> Value {
    json!({
        "name": format!("Cafe {}", i),
        "address": format!("{} Main St, Springfield", i),
        "rating": 4.5,
        "userRatingsTotal": 100 + i,
        "googleMapsUrl": format!("https://www.google.com/maps/place/?q=place_id:place-{}", i),
        "embedMapUrl": format!("https://www.google.com/maps/embed/v1/place?q=place_id:place-{}", i),
        "placeId": format!("place-{}", i)
    })
}

pub fn places_json(count: usize) -> Value {
    Value::Array((1..=count).map(place_json).collect())
}

pub fn directions_json(step_count: usize) -> Value {
    let steps: Vec<Value> = (1..=step_count)
        .map(|i| {
            json!({
                "instruction": format!("Continue onto Route {}", i),
                "distance": format!("{} mi", i),
                "duration": format!("{} mins", i)
            })
        })
        .collect();

    json!({
        "summary": "I-95 N",
        "distance": { "text": "215 mi", "value": 346000 },
        "duration": { "text": "3 hours 45 mins", "value": 13500 },
        "startAddress": "New York, NY",
        "endAddress": "Boston, MA",
        "googleMapsUrl": "https://www.google.com/maps/dir/?api=1&origin=New+York&destination=Boston",
        "embedMapUrl": "https://www.google.com/maps/embed/v1/directions?origin=New+York&destination=Boston",
        "steps": steps
    })
}

pub fn details_json(review_count: usize, review_len: usize) -> Value {
    let reviews: Vec<Value> = (1..=review_count)
        .map(|i| {
            json!({
                "authorName": format!("Reviewer {}", i),
                "rating": 5,
                "text": "x".repeat(review_len),
                "time": 1700000000 + i
            })
        })
        .collect();

    json!({
        "name": "Joe's Pizza",
        "address": "7 Carmine St, New York, NY",
        "rating": 4.6,
        "userRatingsTotal": 5231,
        "phoneNumber": "(212) 366-1182",
        "website": "https://www.joespizzanyc.com",
        "googleMapsUrl": "https://maps.google.com/?cid=123",
        "embedMapUrl": "https://www.google.com/maps/embed/v1/place?q=place_id:joes",
        "placeId": "joes",
        "openingHours": {
            "openNow": true,
            "weekdayText": ["Monday: 10:00 AM – 4:00 AM", "Tuesday: 10:00 AM – 4:00 AM"]
        },
        "reviews": reviews
    })
}
