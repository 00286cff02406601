use crate::models::place::Place;
use crate::tools::maps_adapter::{PlaceDetails, PlaceSearch, Route};

const MAX_STARS: u8 = 5;

pub fn render_place_search(search: &PlaceSearch) -> String {
    if search.places.is_empty() {
        return format!(
            "No places found for '{}'. Try a different search term or location.",
            search.query
        );
    }

    let mut result = format!("Found {} places for '{}':\n\n", search.total, search.query);
    for (i, place) in search.places.iter().enumerate() {
        result.push_str(&format!("{}. **{}**\n", i + 1, place.name));
        result.push_str(&format!("   📍 {}\n", place.address));
        if let Some(rating) = rating_line(place) {
            result.push_str(&format!("   ⭐ Rating: {}\n", rating));
        }
        result.push_str(&format!("   🔗 [View on Google Maps]({})\n", place.google_maps_url));
        result.push_str(&format!("   🗺️ [Embedded Map]({})\n", place.embed_map_url));
        if let Some(place_id) = &place.place_id {
            result.push_str(&format!("   📌 Place ID: `{}`\n", place_id));
        }
        result.push('\n');
    }
    result
}

pub fn render_route(route: &Route) -> String {
    let directions = &route.directions;
    let mut result = format!("**Directions from {} to {}**\n\n", route.origin, route.destination);
    result.push_str(&format!("🚗 Mode: {}\n", capitalize(&route.mode)));
    result.push_str(&format!("📏 Distance: {}\n", directions.distance.text));
    result.push_str(&format!("⏱️ Duration: {}\n", directions.duration.text));
    result.push_str(&format!("📍 Start: {}\n", directions.start_address));
    result.push_str(&format!("🎯 End: {}\n\n", directions.end_address));

    if let Some(summary) = directions.summary.as_deref().filter(|s| !s.is_empty()) {
        result.push_str(&format!("**Route:** {}\n\n", summary));
    }

    result.push_str("**Turn-by-turn directions:**\n");
    for (i, step) in directions.steps.iter().enumerate() {
        result.push_str(&format!("{}. {}\n", i + 1, step.instruction));
        result.push_str(&format!("   ({}, ~{})\n\n", step.distance, step.duration));
    }

    result.push_str(&format!("\n🔗 [View on Google Maps]({})\n", directions.google_maps_url));
    result.push_str(&format!("🗺️ [Embedded Map]({})\n", directions.embed_map_url));
    result
}

pub fn render_place_details(details: &PlaceDetails) -> String {
    let place = &details.place;
    let mut result = format!("**{}**\n\n", place.name);
    result.push_str(&format!("📍 **Address:** {}\n", place.address));

    if let Some(rating) = rating_line(place) {
        result.push_str(&format!("⭐ **Rating:** {}\n", rating));
    }
    if let Some(phone) = place.phone_number.as_deref().filter(|s| !s.is_empty()) {
        result.push_str(&format!("📞 **Phone:** {}\n", phone));
    }
    if let Some(website) = place.website.as_deref().filter(|s| !s.is_empty()) {
        result.push_str(&format!("🌐 **Website:** {}\n", website));
    }

    if let Some(hours) = place.opening_hours.as_ref().filter(|h| !h.is_empty()) {
        let status = if hours.open_now.unwrap_or(false) {
            "🟢 Open now"
        } else {
            "🔴 Closed"
        };
        result.push_str(&format!("\n**Hours:** {}\n", status));

        if !hours.weekday_text.is_empty() {
            result.push_str("```\n");
            for day_hours in &hours.weekday_text {
                result.push_str(day_hours);
                result.push('\n');
            }
            result.push_str("```\n");
        }
    }

    if let Some(reviews) = place.reviews.as_ref().filter(|r| !r.is_empty()) {
        result.push_str("\n**Recent Reviews:**\n");
        for (i, review) in reviews.iter().enumerate() {
            let stars = "⭐".repeat(review.rating.min(MAX_STARS) as usize);
            result.push_str(&format!("\n{}. **{}** - {}\n", i + 1, review.author_name, stars));
            result.push_str(&format!("   \"{}\"\n", review.text));
        }
    }

    result.push_str(&format!("\n🔗 [View on Google Maps]({})\n", place.google_maps_url));
    result.push_str(&format!("🗺️ [Embedded Map]({})\n", place.embed_map_url));
    result
}

/// "4.5 (120 reviews)", or just the rating when no count was given.
fn rating_line(place: &Place) -> Option<String> {
    let rating = format_rating(place.rating.filter(|r| *r > 0.0)?);
    match place.user_ratings_total.filter(|n| *n > 0) {
        Some(total) => Some(format!("{} ({} reviews)", rating, total)),
        None => Some(rating),
    }
}

/// Whole numbers keep one decimal place: 4.0, not 4.
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
