use serde::Deserialize;

use crate::models::weather::{CurrentConditions, DailyForecast, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: RawCurrent,
    daily: RawDaily,
}

#[derive(Debug, Deserialize)]
struct RawCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: i64,
}

#[derive(Debug, Deserialize)]
struct RawDaily {
    time: Vec<String>,
    weather_code: Vec<i64>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
}

pub async fn fetch_weather(
    http: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
) -> Result<WeatherReport, ClientError> {
    let url = format!("{}/forecast", base_url);
    let response = http
        .get(&url)
        .query(&[
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            (
                "current",
                "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m".to_string(),
            ),
            (
                "daily",
                "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset".to_string(),
            ),
            ("timezone", "auto".to_string()),
        ])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("weather request failed with status {}", status).into());
    }
    let parsed: ForecastResponse = response.json().await?;
    Ok(WeatherReport {
        current: CurrentConditions {
            temperature: parsed.current.temperature_2m,
            humidity: parsed.current.relative_humidity_2m,
            wind_speed: parsed.current.wind_speed_10m,
            weather_code: parsed.current.weather_code,
        },
        daily: DailyForecast {
            time: parsed.daily.time,
            weather_code: parsed.daily.weather_code,
            temperature_max: parsed.daily.temperature_2m_max,
            temperature_min: parsed.daily.temperature_2m_min,
            sunrise: parsed.daily.sunrise,
            sunset: parsed.daily.sunset,
        },
    })
}
