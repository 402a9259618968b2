use serde::Deserialize;

use crate::models::sun::SunTimes;

pub const DEFAULT_BASE_URL: &str = "https://api.sunrise-sunset.org";

type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Deserialize)]
struct SunResponse {
    status: String,
    results: Option<RawResults>,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    sunrise: String,
    sunset: String,
    solar_noon: String,
    civil_twilight_begin: String,
    civil_twilight_end: String,
    day_length: u64,
}

/// Fetches today's sun times for a geolocation. `formatted=0` makes the
/// service return ISO-8601 UTC timestamps and the day length in seconds.
pub async fn fetch_sun_times(
    http: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
) -> Result<SunTimes, ClientError> {
    let url = format!("{}/json", base_url);
    let response = http
        .get(&url)
        .query(&[
            ("lat", lat.to_string()),
            ("lng", lon.to_string()),
            ("date", "today".to_string()),
            ("formatted", "0".to_string()),
        ])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("sun times request failed with status {}", status).into());
    }
    let parsed: SunResponse = response.json().await?;
    if parsed.status != "OK" {
        return Err(format!("sun times service reported status {}", parsed.status).into());
    }
    let results = parsed.results.ok_or("sun times response had no results")?;
    Ok(SunTimes {
        sunrise: results.sunrise,
        sunset: results.sunset,
        solar_noon: results.solar_noon,
        civil_twilight_begin: results.civil_twilight_begin,
        civil_twilight_end: results.civil_twilight_end,
        day_length_seconds: results.day_length,
    })
}
