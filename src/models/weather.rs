use serde::{Deserialize, Serialize};

/// Forecast for a location: current conditions plus seven parallel daily
/// entries, normalized from the forecast service payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: DailyForecast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub weather_code: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub weather_code: Vec<i64>,
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

/// Coarse weather classification used for badges and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    LightRain,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherKind {
    /// Total over all integers; codes outside the known ranges (including
    /// negative ones) classify as cloudy.
    pub fn from_code(code: i64) -> WeatherKind {
        match code {
            0 => WeatherKind::Clear,
            1..=3 => WeatherKind::PartlyCloudy,
            4..=49 => WeatherKind::Cloudy,
            50..=59 => WeatherKind::LightRain,
            60..=69 => WeatherKind::Rain,
            70..=79 => WeatherKind::Snow,
            80..=99 => WeatherKind::Thunderstorm,
            _ => WeatherKind::Cloudy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear sky",
            WeatherKind::PartlyCloudy => "Partly cloudy",
            WeatherKind::Cloudy => "Cloudy",
            WeatherKind::LightRain => "Light rain",
            WeatherKind::Rain => "Rain",
            WeatherKind::Snow => "Snow",
            WeatherKind::Thunderstorm => "Thunderstorm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_codes() {
        assert_eq!(WeatherKind::from_code(0), WeatherKind::Clear);
        assert_eq!(WeatherKind::from_code(2), WeatherKind::PartlyCloudy);
        assert_eq!(WeatherKind::from_code(45), WeatherKind::Cloudy);
        assert_eq!(WeatherKind::from_code(55), WeatherKind::LightRain);
        assert_eq!(WeatherKind::from_code(61), WeatherKind::Rain);
        assert_eq!(WeatherKind::from_code(75), WeatherKind::Snow);
        assert_eq!(WeatherKind::from_code(95), WeatherKind::Thunderstorm);
    }

    #[test]
    fn out_of_range_codes_default_to_cloudy() {
        assert_eq!(WeatherKind::from_code(150), WeatherKind::Cloudy);
        assert_eq!(WeatherKind::from_code(-1), WeatherKind::Cloudy);
    }

    #[test]
    fn range_boundaries_are_exact() {
        assert_eq!(WeatherKind::from_code(3), WeatherKind::PartlyCloudy);
        assert_eq!(WeatherKind::from_code(4), WeatherKind::Cloudy);
        assert_eq!(WeatherKind::from_code(49), WeatherKind::Cloudy);
        assert_eq!(WeatherKind::from_code(50), WeatherKind::LightRain);
        assert_eq!(WeatherKind::from_code(99), WeatherKind::Thunderstorm);
        assert_eq!(WeatherKind::from_code(100), WeatherKind::Cloudy);
    }
}
