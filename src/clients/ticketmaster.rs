use serde::Deserialize;

use crate::models::event::Event;

pub const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200?text=No+Image";

type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Deserialize)]
struct DiscoveryResponse {
    #[serde(rename = "_embedded")]
    embedded: Option<Embedded>,
}

#[derive(Debug, Deserialize)]
struct Embedded {
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    name: String,
    #[serde(default)]
    dates: Option<RawDates>,
    #[serde(default)]
    images: Vec<RawImage>,
    #[serde(default)]
    classifications: Vec<RawClassification>,
    #[serde(rename = "_embedded", default)]
    embedded: Option<RawEventEmbedded>,
    #[serde(default)]
    place: Option<RawPlace>,
}

#[derive(Debug, Deserialize)]
struct RawDates {
    #[serde(default)]
    start: Option<RawStart>,
}

#[derive(Debug, Deserialize)]
struct RawStart {
    #[serde(rename = "localDate", default)]
    local_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    url: String,
    #[serde(default)]
    ratio: Option<String>,
    #[serde(default)]
    width: u32,
}

#[derive(Debug, Deserialize)]
struct RawClassification {
    #[serde(default)]
    segment: Option<RawNamed>,
    #[serde(default)]
    genre: Option<RawNamed>,
    #[serde(rename = "subGenre", default)]
    sub_genre: Option<RawNamed>,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEventEmbedded {
    #[serde(default)]
    venues: Vec<RawVenue>,
}

#[derive(Debug, Deserialize)]
struct RawVenue {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    city: Option<RawNamed>,
}

/// Queries upcoming events for a city. A missing or rejected credential is
/// reported as an error so the gateway can degrade to sample data; a success
/// with no embedded events yields an empty vec for the same reason.
pub async fn fetch_events(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    city: &str,
    country_code: &str,
) -> Result<Vec<Event>, ClientError> {
    let url = format!("{}/events.json", base_url);
    let response = http
        .get(&url)
        .query(&[
            ("apikey", api_key),
            ("city", city),
            ("countryCode", country_code),
            ("size", "20"),
            ("sort", "date,asc"),
        ])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("events request failed with status {}", status).into());
    }
    let parsed: DiscoveryResponse = response.json().await?;
    let raw_events = parsed.embedded.map(|e| e.events).unwrap_or_default();
    Ok(raw_events
        .into_iter()
        .map(|raw| normalize(raw, city))
        .collect())
}

fn normalize(raw: RawEvent, city: &str) -> Event {
    let category = raw
        .classifications
        .first()
        .and_then(|c| {
            [&c.segment, &c.genre, &c.sub_genre]
                .into_iter()
                .flatten()
                .find_map(|named| named.name.clone())
        })
        .unwrap_or_else(|| "Event".to_string());

    let image = raw
        .images
        .iter()
        .find(|img| img.ratio.as_deref() == Some("16_9") && img.width >= 500)
        .or_else(|| raw.images.first())
        .map(|img| img.url.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let venue = raw
        .embedded
        .and_then(|e| e.venues.into_iter().next())
        .and_then(|v| v.name);
    let place_city = raw.place.and_then(|p| p.city).and_then(|c| c.name);
    let location = venue
        .or(place_city)
        .or_else(|| (!city.is_empty()).then(|| city.to_string()))
        .unwrap_or_else(|| "Unknown Venue".to_string());

    let date = raw
        .dates
        .and_then(|d| d.start)
        .and_then(|s| s.local_date)
        .unwrap_or_else(|| "TBD".to_string());

    Event {
        id: raw.id,
        name: raw.name,
        date,
        image,
        category,
        location,
    }
}
