use crate::models::country::{Country, CountrySummary};
use crate::models::event::Event;
use crate::models::holiday::{Holiday, LongWeekend};
use crate::models::plan::{Plan, PlanFilter, TypeCounts};
use crate::models::selection::SelectionState;
use crate::models::sun::SunTimes;
use crate::models::weather::WeatherReport;
use crate::service::view_flow::ViewStats;

/// Rendering boundary. The view controller hands fully derived data to this
/// trait and never touches output itself, so the state machine stays
/// testable without a terminal. `None` for weather/sun data means the view
/// should show its unavailable placeholder.
pub trait Presenter: Send + Sync {
    fn render_countries(&self, countries: &[CountrySummary]);
    fn render_summary(&self, country: &Country, selection: &SelectionState);
    fn render_dashboard(
        &self,
        selection: Option<&SelectionState>,
        stats: &ViewStats,
        counts: &TypeCounts,
    );
    fn render_holidays(&self, holidays: &[Holiday], year: i32, country_name: &str);
    fn render_events(&self, events: &[Event]);
    fn render_weather(&self, report: Option<&WeatherReport>, city: &str);
    fn render_sun_times(&self, times: Option<&SunTimes>, city: &str);
    fn render_long_weekends(&self, weekends: &[LongWeekend], year: i32);
    fn render_plans(&self, plans: &[Plan], counts: &TypeCounts, filter: PlanFilter);
    fn render_conversion(&self, amount: f64, from: &str, to: &str, converted: f64, rate: f64);
    fn update_city_choices(&self, cities: &[String]);
    fn update_saved_count(&self, count: usize);
    fn notice(&self, message: &str);
}
