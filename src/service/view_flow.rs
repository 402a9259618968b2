use std::sync::Arc;

use crate::models::country::CountrySummary;
use crate::models::plan::{Plan, PlanFilter, TypeCounts};
use crate::models::selection::SelectionState;
use crate::service::gateway::RemoteDataGateway;
use crate::service::presenter::Presenter;
use crate::store::{PlanStore, StoreError};

pub const SELECT_COUNTRY_NOTICE: &str = "Select a country first";

/// One navigable screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Holidays,
    Events,
    Weather,
    LongWeekends,
    SunTimes,
    MyPlans,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Holidays,
        View::Events,
        View::Weather,
        View::LongWeekends,
        View::SunTimes,
        View::MyPlans,
    ];

    /// Resolves a navigation path; unrecognized paths land on the dashboard.
    pub fn from_path(path: &str) -> View {
        match path.trim_end_matches('/') {
            "/holidays" => View::Holidays,
            "/events" => View::Events,
            "/weather" => View::Weather,
            "/long-weekends" => View::LongWeekends,
            "/sun-times" => View::SunTimes,
            "/my-plans" => View::MyPlans,
            _ => View::Dashboard,
        }
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Holidays => "/holidays",
            View::Events => "/events",
            View::Weather => "/weather",
            View::LongWeekends => "/long-weekends",
            View::SunTimes => "/sun-times",
            View::MyPlans => "/my-plans",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Holidays => "Holidays",
            View::Events => "Events",
            View::Weather => "Weather",
            View::LongWeekends => "Long Weekends",
            View::SunTimes => "Sun Times",
            View::MyPlans => "My Plans",
        }
    }
}

/// Per-view result counts shown on the dashboard. `None` is the unknown
/// placeholder; counts fill in lazily as each view is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStats {
    pub holidays: Option<usize>,
    pub events: Option<usize>,
    pub long_weekends: Option<usize>,
}

/// Attributes carried by a save action, bound to the card the user saved
/// from. Missing fields get defaulted when the plan is constructed.
#[derive(Debug, Clone, Default)]
pub struct PlanDraft {
    pub id: Option<String>,
    pub title: String,
    pub date: Option<String>,
    pub plan_type: crate::models::plan::PlanType,
    pub location: Option<String>,
    pub extra: Option<String>,
}

/// Owns the selection state and decides which gateway calls each navigation
/// action issues. All rendering goes through the presenter seam; all
/// persistence through the plan store.
pub struct ViewController {
    gateway: Arc<dyn RemoteDataGateway>,
    store: PlanStore,
    presenter: Arc<dyn Presenter>,
    selection: Option<SelectionState>,
    stats: ViewStats,
    current_view: View,
}

impl ViewController {
    pub fn new(
        gateway: Arc<dyn RemoteDataGateway>,
        store: PlanStore,
        presenter: Arc<dyn Presenter>,
    ) -> ViewController {
        ViewController {
            gateway,
            store,
            presenter,
            selection: None,
            stats: ViewStats::default(),
            current_view: View::Dashboard,
        }
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        self.selection.as_ref()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn stats(&self) -> ViewStats {
        self.stats
    }

    /// Initial load: fetch the country picker entries and render them.
    pub async fn load_countries(&self) -> Vec<CountrySummary> {
        let countries = self.gateway.list_countries().await;
        self.presenter.render_countries(&countries);
        countries
    }

    /// Navigation by location path, for back/forward and deep links.
    pub async fn navigate_path(&mut self, path: &str) {
        self.enter_view(View::from_path(path)).await;
    }

    /// Enters a view, issuing exactly the gateway calls that view needs.
    /// Dashboard and my-plans never require a selection; every other view
    /// surfaces a notice and fetches nothing when no country is set.
    pub async fn enter_view(&mut self, view: View) {
        self.current_view = view;
        match view {
            View::Dashboard => {
                self.presenter.render_dashboard(
                    self.selection.as_ref(),
                    &self.stats,
                    &self.store.counts_by_type(),
                );
                return;
            }
            View::MyPlans => {
                self.render_plans(PlanFilter::All);
                return;
            }
            _ => {}
        }

        let Some(selection) = self.selection.clone() else {
            self.presenter.notice(SELECT_COUNTRY_NOTICE);
            return;
        };

        match view {
            View::Holidays => {
                let holidays = self
                    .gateway
                    .holidays(selection.year, &selection.country_code)
                    .await;
                self.stats.holidays = Some(holidays.len());
                self.presenter
                    .render_holidays(&holidays, selection.year, &selection.country_name);
            }
            View::Events => {
                let events = self
                    .gateway
                    .events(&selection.city, &selection.country_code)
                    .await;
                self.stats.events = Some(events.len());
                self.presenter.render_events(&events);
            }
            View::Weather => match selection.capital_latlng() {
                Some((lat, lon)) => {
                    let report = self.gateway.weather(lat, lon).await;
                    self.presenter.render_weather(report.as_ref(), &selection.city);
                }
                None => self.presenter.render_weather(None, &selection.city),
            },
            View::SunTimes => match selection.capital_latlng() {
                Some((lat, lon)) => {
                    let times = self.gateway.sun_times(lat, lon).await;
                    self.presenter.render_sun_times(times.as_ref(), &selection.city);
                }
                None => self.presenter.render_sun_times(None, &selection.city),
            },
            View::LongWeekends => {
                let weekends = self
                    .gateway
                    .long_weekends(selection.year, &selection.country_code)
                    .await;
                self.stats.long_weekends = Some(weekends.len());
                self.presenter.render_long_weekends(&weekends, selection.year);
            }
            View::Dashboard | View::MyPlans => unreachable!("handled above"),
        }
    }

    /// Replaces the selection wholesale, caches the country detail, renders
    /// the summary header, and resets the lazy per-view counts. An empty
    /// country code fails fast with no state change.
    pub async fn search(&mut self, country_code: &str, city: &str, year: i32) {
        if country_code.is_empty() {
            self.presenter.notice("Please select a country");
            return;
        }
        let mut selection = SelectionState::new(country_code, country_code, city, year);
        match self.gateway.country_detail(country_code).await {
            Some(country) => {
                selection.country_name = country.name.clone();
                self.presenter.render_summary(&country, &selection);
                selection.country = Some(country);
            }
            None => {
                self.presenter.notice("Country details are unavailable right now");
            }
        }
        self.stats = ViewStats::default();
        self.selection = Some(selection);
    }

    /// Fires when the country picker changes before a search is submitted:
    /// derives the city choices from the country's capitals without touching
    /// the selection state.
    pub async fn country_changed(&self, country_code: &str) -> Vec<String> {
        if country_code.is_empty() {
            return Vec::new();
        }
        let cities = match self.gateway.country_detail(country_code).await {
            Some(country) => country.capitals,
            None => Vec::new(),
        };
        self.presenter.update_city_choices(&cities);
        cities
    }

    /// Client-side filter over the saved plans; never mutates the store.
    pub fn filter_plans(&self, filter: PlanFilter) {
        self.render_plans(filter);
    }

    /// Builds a plan from the draft, defaulting the location to the current
    /// selection's country name, and persists it.
    pub fn save_plan(&self, draft: PlanDraft) -> Result<(), StoreError> {
        let location = draft
            .location
            .filter(|l| !l.is_empty())
            .or_else(|| self.selection.as_ref().map(|s| s.country_name.clone()))
            .unwrap_or_else(|| "Unknown".to_string());
        let plan = Plan {
            id: draft.id.unwrap_or_default(),
            title: draft.title,
            date: draft.date,
            plan_type: draft.plan_type,
            location,
            extra: draft.extra,
        };
        self.store.save(plan)?;
        self.presenter.update_saved_count(self.store.counts_by_type().all);
        Ok(())
    }

    /// Deletes one plan, then re-renders under whatever filter was active.
    pub fn delete_plan(&self, id: &str, active_filter: PlanFilter) -> Result<(), StoreError> {
        self.store.delete(id)?;
        self.render_plans(active_filter);
        self.presenter.update_saved_count(self.store.counts_by_type().all);
        Ok(())
    }

    pub fn clear_plans(&self) -> Result<(), StoreError> {
        self.store.clear()?;
        self.render_plans(PlanFilter::All);
        Ok(())
    }

    /// Currency conversion: one rates fetch keyed by the base currency, with
    /// the unavailable notice when the table or the target rate is missing.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) {
        let Some(rates) = self.gateway.exchange_rates(from).await else {
            self.presenter.notice("Exchange rates are unavailable right now");
            return;
        };
        match rates.rate_to(to) {
            Some(rate) => {
                self.presenter
                    .render_conversion(amount, from, to, amount * rate, rate);
            }
            None => {
                self.presenter
                    .notice(&format!("No exchange rate for {}", to));
            }
        }
    }

    fn render_plans(&self, filter: PlanFilter) {
        let plans = self.store.list();
        let counts = TypeCounts::tally(&plans);
        let filtered: Vec<Plan> = plans.into_iter().filter(|p| filter.matches(p)).collect();
        self.presenter.render_plans(&filtered, &counts, filter);
    }
}
