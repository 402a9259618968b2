use async_trait::async_trait;
use tracing::warn;

use crate::clients::{
    exchange_rate, nager, open_meteo, restcountries, sunrise_sunset, ticketmaster,
};
use crate::config::AppConfig;
use crate::models::country::{Country, CountrySummary};
use crate::models::currency::ExchangeRates;
use crate::models::event::{Event, sample_events};
use crate::models::holiday::{Holiday, LongWeekend};
use crate::models::sun::SunTimes;
use crate::models::weather::WeatherReport;

/// One method per external data need. Every call is stateless and absorbs
/// its own failures: transport errors and non-success statuses are logged
/// and replaced by the documented fallback, never propagated to callers.
#[async_trait]
pub trait RemoteDataGateway: Send + Sync {
    async fn list_countries(&self) -> Vec<CountrySummary>;
    async fn country_detail(&self, country_code: &str) -> Option<Country>;
    async fn holidays(&self, year: i32, country_code: &str) -> Vec<Holiday>;
    async fn long_weekends(&self, year: i32, country_code: &str) -> Vec<LongWeekend>;
    async fn events(&self, city: &str, country_code: &str) -> Vec<Event>;
    async fn weather(&self, lat: f64, lon: f64) -> Option<WeatherReport>;
    async fn sun_times(&self, lat: f64, lon: f64) -> Option<SunTimes>;
    async fn exchange_rates(&self, base_currency: &str) -> Option<ExchangeRates>;
}

pub struct HttpGateway {
    http: reqwest::Client,
    nager_base: String,
    restcountries_base: String,
    ticketmaster_base: String,
    open_meteo_base: String,
    sunrise_base: String,
    exchange_base: String,
    ticketmaster_key: Option<String>,
}

impl HttpGateway {
    pub fn new(ticketmaster_key: Option<String>) -> HttpGateway {
        HttpGateway {
            http: reqwest::Client::new(),
            nager_base: nager::DEFAULT_BASE_URL.to_string(),
            restcountries_base: restcountries::DEFAULT_BASE_URL.to_string(),
            ticketmaster_base: ticketmaster::DEFAULT_BASE_URL.to_string(),
            open_meteo_base: open_meteo::DEFAULT_BASE_URL.to_string(),
            sunrise_base: sunrise_sunset::DEFAULT_BASE_URL.to_string(),
            exchange_base: exchange_rate::DEFAULT_BASE_URL.to_string(),
            ticketmaster_key,
        }
    }

    /// Builds a gateway from config, honoring per-provider base-URL
    /// overrides (used by tests and self-hosted mirrors).
    pub fn from_config(config: &AppConfig) -> HttpGateway {
        let mut gateway = HttpGateway::new(config.get("TICKETMASTER_API_KEY"));
        if let Some(base) = config.get("NAGER_BASE_URL") {
            gateway = gateway.with_nager_base(base);
        }
        if let Some(base) = config.get("RESTCOUNTRIES_BASE_URL") {
            gateway = gateway.with_restcountries_base(base);
        }
        if let Some(base) = config.get("TICKETMASTER_BASE_URL") {
            gateway = gateway.with_ticketmaster_base(base);
        }
        if let Some(base) = config.get("OPEN_METEO_BASE_URL") {
            gateway = gateway.with_open_meteo_base(base);
        }
        if let Some(base) = config.get("SUNRISE_SUNSET_BASE_URL") {
            gateway = gateway.with_sunrise_base(base);
        }
        if let Some(base) = config.get("EXCHANGE_RATE_BASE_URL") {
            gateway = gateway.with_exchange_base(base);
        }
        gateway
    }

    pub fn with_nager_base(mut self, base: impl Into<String>) -> HttpGateway {
        self.nager_base = base.into();
        self
    }

    pub fn with_restcountries_base(mut self, base: impl Into<String>) -> HttpGateway {
        self.restcountries_base = base.into();
        self
    }

    pub fn with_ticketmaster_base(mut self, base: impl Into<String>) -> HttpGateway {
        self.ticketmaster_base = base.into();
        self
    }

    pub fn with_open_meteo_base(mut self, base: impl Into<String>) -> HttpGateway {
        self.open_meteo_base = base.into();
        self
    }

    pub fn with_sunrise_base(mut self, base: impl Into<String>) -> HttpGateway {
        self.sunrise_base = base.into();
        self
    }

    pub fn with_exchange_base(mut self, base: impl Into<String>) -> HttpGateway {
        self.exchange_base = base.into();
        self
    }
}

#[async_trait]
impl RemoteDataGateway for HttpGateway {
    async fn list_countries(&self) -> Vec<CountrySummary> {
        match nager::fetch_countries(&self.http, &self.nager_base).await {
            Ok(countries) => countries,
            Err(err) => {
                warn!("country list unavailable: {}", err);
                Vec::new()
            }
        }
    }

    async fn country_detail(&self, country_code: &str) -> Option<Country> {
        match restcountries::fetch_country_detail(&self.http, &self.restcountries_base, country_code)
            .await
        {
            Ok(country) => Some(country),
            Err(err) => {
                warn!("country detail unavailable for {}: {}", country_code, err);
                None
            }
        }
    }

    async fn holidays(&self, year: i32, country_code: &str) -> Vec<Holiday> {
        match nager::fetch_holidays(&self.http, &self.nager_base, year, country_code).await {
            Ok(holidays) => holidays,
            Err(err) => {
                warn!("holidays unavailable for {} {}: {}", country_code, year, err);
                Vec::new()
            }
        }
    }

    async fn long_weekends(&self, year: i32, country_code: &str) -> Vec<LongWeekend> {
        match nager::fetch_long_weekends(&self.http, &self.nager_base, year, country_code).await {
            Ok(weekends) => weekends,
            Err(err) => {
                warn!(
                    "long weekends unavailable for {} {}: {}",
                    country_code, year, err
                );
                Vec::new()
            }
        }
    }

    async fn events(&self, city: &str, country_code: &str) -> Vec<Event> {
        let Some(api_key) = self.ticketmaster_key.as_deref() else {
            warn!("events credential missing, using sample events");
            return sample_events(city);
        };
        match ticketmaster::fetch_events(
            &self.http,
            &self.ticketmaster_base,
            api_key,
            city,
            country_code,
        )
        .await
        {
            Ok(events) if !events.is_empty() => events,
            Ok(_) => {
                warn!("no events found for {}, using sample events", city);
                sample_events(city)
            }
            Err(err) => {
                warn!("events unavailable for {}: {}", city, err);
                sample_events(city)
            }
        }
    }

    async fn weather(&self, lat: f64, lon: f64) -> Option<WeatherReport> {
        match open_meteo::fetch_weather(&self.http, &self.open_meteo_base, lat, lon).await {
            Ok(report) => Some(report),
            Err(err) => {
                warn!("weather unavailable for {},{}: {}", lat, lon, err);
                None
            }
        }
    }

    async fn sun_times(&self, lat: f64, lon: f64) -> Option<SunTimes> {
        match sunrise_sunset::fetch_sun_times(&self.http, &self.sunrise_base, lat, lon).await {
            Ok(times) => Some(times),
            Err(err) => {
                warn!("sun times unavailable for {},{}: {}", lat, lon, err);
                None
            }
        }
    }

    async fn exchange_rates(&self, base_currency: &str) -> Option<ExchangeRates> {
        match exchange_rate::fetch_exchange_rates(&self.http, &self.exchange_base, base_currency)
            .await
        {
            Ok(rates) => Some(rates),
            Err(err) => {
                warn!("exchange rates unavailable for {}: {}", base_currency, err);
                None
            }
        }
    }
}
