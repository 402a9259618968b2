use serde::Deserialize;

use crate::models::country::CountrySummary;
use crate::models::holiday::{Holiday, LongWeekend};

pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Deserialize)]
struct AvailableCountry {
    #[serde(rename = "countryCode")]
    country_code: String,
    name: String,
}

pub async fn fetch_countries(
    http: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<CountrySummary>, ClientError> {
    let url = format!("{}/AvailableCountries", base_url);
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("country list request failed with status {}", status).into());
    }
    let countries: Vec<AvailableCountry> = response.json().await?;
    Ok(countries
        .into_iter()
        .map(|c| CountrySummary {
            code: c.country_code,
            name: c.name,
        })
        .collect())
}

pub async fn fetch_holidays(
    http: &reqwest::Client,
    base_url: &str,
    year: i32,
    country_code: &str,
) -> Result<Vec<Holiday>, ClientError> {
    let url = format!("{}/PublicHolidays/{}/{}", base_url, year, country_code);
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("holidays request failed with status {}", status).into());
    }
    Ok(response.json().await?)
}

pub async fn fetch_long_weekends(
    http: &reqwest::Client,
    base_url: &str,
    year: i32,
    country_code: &str,
) -> Result<Vec<LongWeekend>, ClientError> {
    let url = format!("{}/LongWeekend/{}/{}", base_url, year, country_code);
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("long weekends request failed with status {}", status).into());
    }
    Ok(response.json().await?)
}
