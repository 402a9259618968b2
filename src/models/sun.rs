use serde::{Deserialize, Serialize};

/// Sunrise/sunset data for a geolocation, times as ISO-8601 UTC strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    pub day_length_seconds: u64,
}

impl SunTimes {
    /// Day length as "Hh Mm" for display.
    pub fn day_length_display(&self) -> String {
        let hours = self.day_length_seconds / 3600;
        let minutes = (self.day_length_seconds % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    }
}
