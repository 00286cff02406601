mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use maps_tool_adapter::helpers::progress::{NoopEmitter, ProgressEvent, RecordingEmitter};
use maps_tool_adapter::models::params::SearchPlacesParams;
use maps_tool_adapter::tools::maps_adapter::Report;
use maps_tool_adapter::tools::OutputFormat;
use common::*;

#[tokio::test]
async fn search_lists_only_the_first_five_places() {
    let url = spawn_backend(success("search-places", places_json(8))).await;
    let registry = registry_for(&url);

    let output = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    let text = output.as_text().unwrap();

    assert!(text.starts_with("Found 8 places for 'coffee':"));
    for i in 1..=5 {
        assert!(text.contains(&format!("{}. **Cafe {}**", i, i)));
        assert!(text.contains(&format!("📍 {} Main St, Springfield", i)));
    }
    assert!(!text.contains("Cafe 6"));
    assert_eq!(text.matches("📌 Place ID:").count(), 5);
    assert!(text.contains("⭐ Rating: 4.5 (101 reviews)"));
}

#[tokio::test]
async fn search_record_reports_total_and_top_five() {
    let url = spawn_backend(success("search-places", places_json(8))).await;
    let registry = registry_for(&url);

    let output = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Record, &NoopEmitter)
        .await
        .unwrap();
    let record = output.as_record().unwrap();

    assert_eq!(record["found"], 8);
    let places = record["places"].as_array().unwrap();
    assert_eq!(places.len(), 5);
    assert_eq!(
        places[0],
        json!({
            "name": "Cafe 1",
            "address": "1 Main St, Springfield",
            "rating": 4.5,
            "googleMapsUrl": "https://www.google.com/maps/place/?q=place_id:place-1",
            "embedMapUrl": "https://www.google.com/maps/embed/v1/place?q=place_id:place-1",
            "placeId": "place-1"
        })
    );
}

#[tokio::test]
async fn empty_result_mentions_the_query() {
    let url = spawn_backend(success("search-places", json!([]))).await;
    let registry = registry_for(&url);

    let text = registry
        .execute("search_places", json!({ "query": "unicorn stables" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(
        text.as_text().unwrap(),
        "No places found for 'unicorn stables'. Try a different search term or location."
    );

    let record = registry
        .execute("search_places", json!({ "query": "unicorn stables" }), OutputFormat::Record, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(record.as_record().unwrap(), &json!({ "message": "No places found for 'unicorn stables'" }));
}

#[tokio::test]
async fn null_data_counts_as_no_places() {
    let url = spawn_backend(respond_with(
        "search-places",
        StatusCode::OK,
        json!({ "success": true, "data": null }),
        Captured::default(),
    ))
    .await;
    let adapter = adapter_for(&url);

    let search = adapter.search_places(&SearchPlacesParams::new("tacos")).await.unwrap();
    assert_eq!(search.total, 0);
    assert!(search.to_text().starts_with("No places found for 'tacos'"));
}

#[tokio::test]
async fn request_body_carries_defaults() {
    let captured = Captured::default();
    let url = spawn_backend(respond_with(
        "search-places",
        StatusCode::OK,
        json!({ "success": true, "data": [] }),
        captured.clone(),
    ))
    .await;
    let registry = registry_for(&url);

    registry
        .execute("search_places", json!({ "query": "pharmacy" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    registry
        .execute(
            "search_places",
            json!({ "query": "pharmacy", "location": "40.7128,-74.0060", "radius": 1200 }),
            OutputFormat::Text,
            &NoopEmitter,
        )
        .await
        .unwrap();

    assert_eq!(
        captured.bodies(),
        vec![
            json!({ "query": "pharmacy", "location": null, "radius": 5000 }),
            json!({ "query": "pharmacy", "location": "40.7128,-74.0060", "radius": 1200 }),
        ]
    );
}

#[tokio::test]
async fn backend_failure_message_is_surfaced() {
    let url = spawn_backend(failure("search-places", "Quota exceeded")).await;
    let registry = registry_for(&url);

    let text = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(text.as_text().unwrap(), "Error searching places: Quota exceeded");

    let record = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Record, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(record.as_record().unwrap(), &json!({ "error": "Quota exceeded" }));
}

#[tokio::test]
async fn enveloped_http_error_still_surfaces_backend_message() {
    let url = spawn_backend(respond_with(
        "search-places",
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "error": { "message": "Invalid location" } }),
        Captured::default(),
    ))
    .await;
    let registry = registry_for(&url);

    let text = registry
        .execute("search_places", json!({ "query": "coffee", "location": "???" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(text.as_text().unwrap(), "Error searching places: Invalid location");
}

#[tokio::test]
async fn empty_query_is_rejected_without_calling_the_backend() {
    let captured = Captured::default();
    let url = spawn_backend(respond_with(
        "search-places",
        StatusCode::OK,
        json!({ "success": true, "data": [] }),
        captured.clone(),
    ))
    .await;
    let registry = registry_for(&url);

    let text = registry
        .execute("search_places", json!({ "query": "  " }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(text.as_text().unwrap(), "❌ Error: query must not be empty");
    assert!(captured.bodies().is_empty());
}

#[tokio::test]
async fn malformed_place_is_a_generic_error() {
    let url = spawn_backend(success("search-places", json!([{ "address": "no name here" }]))).await;
    let registry = registry_for(&url);

    let text = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    let text = text.as_text().unwrap();
    assert!(text.starts_with("❌ Error: malformed response from search-places"));

    let record = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Record, &NoopEmitter)
        .await
        .unwrap();
    let message = record.as_record().unwrap()["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Failed to search places: malformed response"));
}

#[tokio::test]
async fn progress_is_reported_before_and_after() {
    let url = spawn_backend(success("search-places", places_json(2))).await;
    let registry = registry_for(&url);
    let emitter = RecordingEmitter::default();

    registry
        .execute("search_places", json!({ "query": "bagels" }), OutputFormat::Text, &emitter)
        .await
        .unwrap();

    assert_eq!(
        emitter.events(),
        vec![
            ProgressEvent::status("Searching for bagels...", false),
            ProgressEvent::status("Search completed", true),
        ]
    );
}

#[tokio::test]
async fn closure_emitter_sees_failure_completion() {
    let url = spawn_backend(failure("search-places", "Quota exceeded")).await;
    let registry = registry_for(&url);
    let seen = std::sync::Mutex::new(Vec::<Value>::new());
    let emitter = |event: ProgressEvent| seen.lock().unwrap().push(serde_json::to_value(event).unwrap());

    registry
        .execute("search_places", json!({ "query": "bagels" }), OutputFormat::Text, &emitter)
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1], json!({ "type": "status", "data": { "description": "Search failed", "done": true } }));
}

#[tokio::test]
async fn failure_with_mismatched_data_still_surfaces_backend_message() {
    let url = spawn_backend(respond_with(
        "search-places",
        StatusCode::OK,
        json!({ "success": false, "data": { "results": [] }, "error": { "message": "Quota exceeded" } }),
        Captured::default(),
    ))
    .await;
    let registry = registry_for(&url);

    let text = registry
        .execute("search_places", json!({ "query": "coffee" }), OutputFormat::Text, &NoopEmitter)
        .await
        .unwrap();
    assert_eq!(text.as_text().unwrap(), "Error searching places: Quota exceeded");
}
