use std::collections::HashMap;

use serde::Deserialize;

use crate::models::currency::ExchangeRates;

pub const DEFAULT_BASE_URL: &str = "https://open.er-api.com/v6";

type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    #[serde(rename = "base_code", default)]
    base_code: String,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

pub async fn fetch_exchange_rates(
    http: &reqwest::Client,
    base_url: &str,
    base_currency: &str,
) -> Result<ExchangeRates, ClientError> {
    let url = format!("{}/latest/{}", base_url, base_currency);
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("exchange rates request failed with status {}", status).into());
    }
    let parsed: RatesResponse = response.json().await?;
    if parsed.result != "success" {
        return Err(format!("exchange rate service reported result {}", parsed.result).into());
    }
    Ok(ExchangeRates {
        base: parsed.base_code,
        rates: parsed.rates,
    })
}
