use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::country::{Country, CurrencyInfo};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    area: f64,
    #[serde(default)]
    currencies: BTreeMap<String, RawCurrency>,
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    borders: Vec<String>,
    #[serde(default)]
    timezones: Vec<String>,
    #[serde(default)]
    idd: RawIdd,
    #[serde(default)]
    car: RawCar,
    #[serde(rename = "capitalInfo", default)]
    capital_info: RawCapitalInfo,
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    #[serde(default)]
    name: String,
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawIdd {
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    suffixes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCar {
    #[serde(default)]
    side: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCapitalInfo {
    #[serde(default)]
    latlng: Vec<f64>,
}

/// Fetches the country-detail document for an ISO code. The service returns
/// an array; only the first element is meaningful here.
pub async fn fetch_country_detail(
    http: &reqwest::Client,
    base_url: &str,
    country_code: &str,
) -> Result<Country, ClientError> {
    let url = format!("{}/alpha/{}", base_url, country_code);
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("country detail request failed with status {}", status).into());
    }
    let raw: Vec<RawCountry> = response.json().await?;
    let first = raw
        .into_iter()
        .next()
        .ok_or("country detail response was empty")?;
    Ok(normalize(first))
}

fn normalize(raw: RawCountry) -> Country {
    let calling_code = raw.idd.root.map(|root| {
        // A single suffix completes the code; multiple suffixes share the root.
        match raw.idd.suffixes.as_slice() {
            [only] => format!("{}{}", root, only),
            _ => root,
        }
    });
    let capital_latlng = match raw.capital_info.latlng.as_slice() {
        [lat, lng, ..] => Some((*lat, *lng)),
        _ => None,
    };
    Country {
        name: raw.name.common,
        capitals: raw.capital,
        population: raw.population,
        area: raw.area,
        currencies: raw
            .currencies
            .into_iter()
            .map(|(code, c)| {
                (
                    code,
                    CurrencyInfo {
                        name: c.name,
                        symbol: c.symbol,
                    },
                )
            })
            .collect(),
        languages: raw.languages.into_values().collect(),
        borders: raw.borders,
        timezones: raw.timezones,
        calling_code,
        driving_side: raw.car.side,
        capital_latlng,
    }
}
