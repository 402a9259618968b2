use crate::models::country::Country;

/// The current country/city/year context driving the data views. Transient:
/// owned by the view controller, replaced wholesale on every search, and
/// never persisted across process restarts.
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub country_code: String,
    pub country_name: String,
    pub city: String,
    pub year: i32,
    /// Last fetched country-detail document, cached so weather and sun-times
    /// views can reuse its capital geolocation without refetching.
    pub country: Option<Country>,
}

impl SelectionState {
    pub fn new(country_code: &str, country_name: &str, city: &str, year: i32) -> SelectionState {
        SelectionState {
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            city: city.to_string(),
            year,
            country: None,
        }
    }

    /// Capital geolocation, when the cached country detail resolved one.
    pub fn capital_latlng(&self) -> Option<(f64, f64)> {
        self.country.as_ref().and_then(|c| c.capital_latlng)
    }
}
