use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wanderlust::service::gateway::{HttpGateway, RemoteDataGateway};

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(Some("test-key".to_string()))
        .with_nager_base(server.uri())
        .with_restcountries_base(server.uri())
        .with_ticketmaster_base(server.uri())
        .with_open_meteo_base(server.uri())
        .with_sunrise_base(server.uri())
        .with_exchange_base(server.uri())
}

async fn failing_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn every_operation_absorbs_server_errors_into_its_fallback() {
    let server = failing_server().await;
    let gateway = gateway_for(&server);

    assert!(gateway.list_countries().await.is_empty());
    assert!(gateway.country_detail("FR").await.is_none());
    assert!(gateway.holidays(2026, "FR").await.is_empty());
    assert!(gateway.long_weekends(2026, "FR").await.is_empty());
    assert!(gateway.weather(48.87, 2.33).await.is_none());
    assert!(gateway.sun_times(48.87, 2.33).await.is_none());
    assert!(gateway.exchange_rates("USD").await.is_none());

    // Events degrade to the deterministic sample list, not empty.
    let events = gateway.events("Paris", "FR").await;
    assert_eq!(events.len(), 6);
    assert!(events.iter().all(|e| e.location == "Paris"));
}

#[tokio::test]
async fn fallbacks_warn_through_the_tracing_boundary() {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;

        fn make_writer(&'a self) -> SharedBuf {
            self.clone()
        }
    }

    let server = failing_server().await;
    let gateway = gateway_for(&server);

    let buf = SharedBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .finish();

    use tracing::instrument::WithSubscriber;
    async { gateway.holidays(2026, "FR").await }
        .with_subscriber(subscriber)
        .await;

    let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("WARN"), "missing warn record: {output}");
    assert!(output.contains("holidays unavailable for FR 2026"));
}

#[tokio::test]
async fn countries_parse_the_available_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/AvailableCountries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "countryCode": "FR", "name": "France" },
            { "countryCode": "DE", "name": "Germany" }
        ])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let countries = gateway.list_countries().await;
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].code, "FR");
    assert_eq!(countries[0].name, "France");
    assert_eq!(countries[1].code, "DE");
    assert_eq!(countries[1].name, "Germany");
}

#[tokio::test]
async fn events_use_samples_when_credential_is_missing() {
    // No server is contacted at all without a credential.
    let gateway = HttpGateway::new(None);
    let events = gateway.events("Lyon", "FR").await;
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].id, "mock-1");
}

#[tokio::test]
async fn events_use_samples_when_the_response_has_no_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let events = gateway.events("Nice", "FR").await;
    assert_eq!(events.len(), 6);
}

#[tokio::test]
async fn events_are_normalized_from_the_discovery_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events.json"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("city", "Paris"))
        .and(query_param("countryCode", "FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "events": [
                    {
                        "id": "evt-1",
                        "name": "Indie Night",
                        "dates": { "start": { "localDate": "2026-05-02" } },
                        "images": [
                            { "url": "https://img/small", "ratio": "4_3", "width": 200 },
                            { "url": "https://img/unsized", "ratio": "3_2" },
                            { "url": "https://img/wide", "ratio": "16_9", "width": 640 }
                        ],
                        "classifications": [
                            { "segment": { "name": "Music" } }
                        ],
                        "_embedded": { "venues": [ { "name": "Le Trianon" } ] }
                    },
                    {
                        "id": "evt-2",
                        "name": "Mystery Show",
                        "images": [],
                        "classifications": []
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let events = gateway.events("Paris", "FR").await;
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].id, "evt-1");
    assert_eq!(events[0].category, "Music");
    // An image record without a width parses (it just never wins selection).
    assert_eq!(events[0].image, "https://img/wide");
    assert_eq!(events[0].location, "Le Trianon");
    assert_eq!(events[0].date, "2026-05-02");

    // Missing fields fall back to defaults.
    assert_eq!(events[1].category, "Event");
    assert_eq!(events[1].location, "Paris");
    assert_eq!(events[1].date, "TBD");
    assert!(events[1].image.contains("placeholder"));
}

#[tokio::test]
async fn holidays_parse_the_nager_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2026/FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "date": "2026-07-14",
                "localName": "Fête nationale",
                "name": "Bastille Day",
                "types": ["Public"]
            }
        ])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let holidays = gateway.holidays(2026, "FR").await;
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].name, "Bastille Day");
    assert_eq!(holidays[0].local_name, "Fête nationale");
}

#[tokio::test]
async fn long_weekends_parse_the_bridge_day_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/LongWeekend/2026/FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "startDate": "2026-05-01",
                "endDate": "2026-05-03",
                "dayCount": 3,
                "needBridgeDay": false
            },
            {
                "startDate": "2026-05-14",
                "endDate": "2026-05-17",
                "dayCount": 4,
                "needBridgeDay": true
            }
        ])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let weekends = gateway.long_weekends(2026, "FR").await;
    assert_eq!(weekends.len(), 2);
    assert!(!weekends[0].needs_bridge_day);
    assert!(weekends[1].needs_bridge_day);
    assert_eq!(weekends[1].day_count, 4);
}

#[tokio::test]
async fn country_detail_normalizes_the_first_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": { "common": "France", "official": "French Republic" },
                "capital": ["Paris"],
                "population": 67391582u64,
                "area": 551695.0,
                "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
                "languages": { "fra": "French" },
                "borders": ["BEL", "DEU", "ESP"],
                "timezones": ["UTC+01:00"],
                "idd": { "root": "+3", "suffixes": ["3"] },
                "car": { "side": "right" },
                "capitalInfo": { "latlng": [48.87, 2.33] }
            }
        ])))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let country = gateway.country_detail("FR").await.expect("country detail");
    assert_eq!(country.name, "France");
    assert_eq!(country.capitals, vec!["Paris".to_string()]);
    assert_eq!(country.capital_latlng, Some((48.87, 2.33)));
    assert_eq!(country.calling_code.as_deref(), Some("+33"));
    assert_eq!(country.driving_side.as_deref(), Some("right"));
    assert_eq!(country.languages, vec!["French".to_string()]);
    assert!(country.currencies.contains_key("EUR"));
}

#[tokio::test]
async fn weather_parses_the_forecast_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {
                "temperature_2m": 21.5,
                "relative_humidity_2m": 60.0,
                "weather_code": 2,
                "wind_speed_10m": 12.0
            },
            "daily": {
                "time": ["2026-08-23", "2026-08-24", "2026-08-25", "2026-08-26",
                         "2026-08-27", "2026-08-28", "2026-08-29"],
                "weather_code": [0, 2, 61, 3, 45, 80, 0],
                "temperature_2m_max": [25.0, 24.0, 20.0, 22.0, 23.0, 19.0, 26.0],
                "temperature_2m_min": [15.0, 14.0, 13.0, 12.0, 14.0, 11.0, 16.0],
                "sunrise": ["06:45", "06:46", "06:47", "06:48", "06:49", "06:50", "06:51"],
                "sunset": ["20:30", "20:29", "20:27", "20:26", "20:24", "20:22", "20:21"]
            }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let report = gateway.weather(48.87, 2.33).await.expect("weather");
    assert_eq!(report.current.temperature, 21.5);
    assert_eq!(report.current.weather_code, 2);
    assert_eq!(report.daily.time.len(), 7);
    assert_eq!(report.daily.temperature_max[0], 25.0);
}

#[tokio::test]
async fn sun_times_require_an_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "INVALID_REQUEST",
            "results": null
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.sun_times(48.87, 2.33).await.is_none());
}

#[tokio::test]
async fn sun_times_parse_when_the_service_reports_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param("formatted", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": {
                "sunrise": "2026-08-23T04:52:00+00:00",
                "sunset": "2026-08-23T18:47:00+00:00",
                "solar_noon": "2026-08-23T11:49:00+00:00",
                "civil_twilight_begin": "2026-08-23T04:20:00+00:00",
                "civil_twilight_end": "2026-08-23T19:19:00+00:00",
                "day_length": 50100
            }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let times = gateway.sun_times(48.87, 2.33).await.expect("sun times");
    assert_eq!(times.day_length_seconds, 50100);
    assert_eq!(times.day_length_display(), "13h 55m");
}

#[tokio::test]
async fn exchange_rates_require_a_success_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest/XXX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "error",
            "error-type": "unsupported-code"
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert!(gateway.exchange_rates("XXX").await.is_none());
}

#[tokio::test]
async fn exchange_rates_parse_the_rate_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "base_code": "USD",
            "rates": { "USD": 1.0, "EUR": 0.92, "JPY": 147.5 }
        })))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let rates = gateway.exchange_rates("USD").await.expect("rates");
    assert_eq!(rates.base, "USD");
    assert_eq!(rates.rate_to("EUR"), Some(0.92));
    assert_eq!(rates.convert(100.0, "JPY"), Some(14750.0));
}
