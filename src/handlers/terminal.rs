use chrono::Utc;

use crate::models::country::{Country, CountrySummary};
use crate::models::event::Event;
use crate::models::holiday::{Holiday, LongWeekend};
use crate::models::plan::{Plan, PlanFilter, TypeCounts};
use crate::models::selection::SelectionState;
use crate::models::sun::SunTimes;
use crate::models::weather::{WeatherKind, WeatherReport};
use crate::service::presenter::Presenter;
use crate::service::view_flow::ViewStats;

/// Renders dashboard data as plain terminal output.
pub struct TerminalPresenter;

fn stat(value: Option<usize>) -> String {
    match value {
        Some(count) => count.to_string(),
        None => "—".to_string(),
    }
}

impl Presenter for TerminalPresenter {
    fn render_countries(&self, countries: &[CountrySummary]) {
        println!("{} countries available", countries.len());
    }

    fn render_summary(&self, country: &Country, selection: &SelectionState) {
        println!("\n=== {} ({}) ===", country.name, selection.country_code);
        if !country.capitals.is_empty() {
            println!("Capital: {}", country.capitals.join(", "));
        }
        println!("Population: {}", country.population);
        println!("Area: {} km²", country.area);
        if !country.languages.is_empty() {
            println!("Languages: {}", country.languages.join(", "));
        }
        for (code, info) in &country.currencies {
            let symbol = info.symbol.as_deref().unwrap_or("");
            println!("Currency: {} {} {}", code, info.name, symbol);
        }
        if !country.borders.is_empty() {
            println!("Borders: {}", country.borders.join(", "));
        }
        if let Some(calling_code) = &country.calling_code {
            println!("Calling code: {}", calling_code);
        }
        if let Some(side) = &country.driving_side {
            println!("Drives on the {}", side);
        }
        if let Some(tz) = country.timezones.first() {
            // Approximate local time from the country's first timezone.
            match country.primary_offset() {
                Some(offset) => {
                    let local = Utc::now().with_timezone(&offset);
                    println!("Local time: {} ({})", local.format("%H:%M:%S"), tz);
                }
                None => println!("Timezone: {}", tz),
            }
        }
    }

    fn render_dashboard(
        &self,
        selection: Option<&SelectionState>,
        stats: &ViewStats,
        counts: &TypeCounts,
    ) {
        println!("\n=== Dashboard ===");
        match selection {
            Some(selection) => println!(
                "Planning: {} / {} / {}",
                selection.country_name, selection.city, selection.year
            ),
            None => println!("No destination selected yet."),
        }
        println!(
            "Holidays: {}  Events: {}  Long weekends: {}  Saved plans: {}",
            stat(stats.holidays),
            stat(stats.events),
            stat(stats.long_weekends),
            counts.all
        );
    }

    fn render_holidays(&self, holidays: &[Holiday], year: i32, country_name: &str) {
        println!("\n=== Public holidays in {} ({}) ===", country_name, year);
        if holidays.is_empty() {
            println!("No holiday data available.");
            return;
        }
        for holiday in holidays {
            println!("{}  {} ({})", holiday.date, holiday.name, holiday.local_name);
        }
    }

    fn render_events(&self, events: &[Event]) {
        println!("\n=== Events ===");
        if events.is_empty() {
            println!("No events found.");
            return;
        }
        for event in events {
            println!(
                "[{}] {}  {} @ {}",
                event.category, event.date, event.name, event.location
            );
        }
    }

    fn render_weather(&self, report: Option<&WeatherReport>, city: &str) {
        println!("\n=== Weather — {} ===", city);
        let Some(report) = report else {
            println!("Weather data unavailable.");
            return;
        };
        let kind = WeatherKind::from_code(report.current.weather_code);
        println!(
            "Now: {}°C, {} — humidity {}%, wind {} km/h",
            report.current.temperature,
            kind.label(),
            report.current.humidity,
            report.current.wind_speed
        );
        // Zip so a short array from the provider truncates the table
        // instead of panicking.
        let daily = &report.daily;
        let rows = daily
            .time
            .iter()
            .zip(&daily.weather_code)
            .zip(daily.temperature_max.iter().zip(&daily.temperature_min))
            .take(7);
        for ((day, code), (max, min)) in rows {
            let day_kind = WeatherKind::from_code(*code);
            println!("{}  {:>3.0}° / {:>3.0}°  {}", day, max, min, day_kind.label());
        }
    }

    fn render_sun_times(&self, times: Option<&SunTimes>, city: &str) {
        println!("\n=== Sun times — {} ===", city);
        let Some(times) = times else {
            println!("Sun data unavailable.");
            return;
        };
        println!("Sunrise: {}", times.sunrise);
        println!("Sunset: {}", times.sunset);
        println!("Solar noon: {}", times.solar_noon);
        println!(
            "Civil twilight: {} — {}",
            times.civil_twilight_begin, times.civil_twilight_end
        );
        println!("Day length: {}", times.day_length_display());
    }

    fn render_long_weekends(&self, weekends: &[LongWeekend], year: i32) {
        println!("\n=== Long weekends in {} ===", year);
        if weekends.is_empty() {
            println!("No long weekend data available.");
            return;
        }
        for weekend in weekends {
            let bridge = if weekend.needs_bridge_day {
                " (bridge day needed)"
            } else {
                ""
            };
            println!(
                "{} → {}  {} days{}",
                weekend.start_date, weekend.end_date, weekend.day_count, bridge
            );
        }
    }

    fn render_plans(&self, plans: &[Plan], counts: &TypeCounts, filter: PlanFilter) {
        let filter_label = match filter {
            PlanFilter::All => "all".to_string(),
            PlanFilter::Type(kind) => kind.label().to_string(),
        };
        println!("\n=== My plans ({}) ===", filter_label);
        println!(
            "all: {}  holiday: {}  event: {}  longweekend: {}",
            counts.all, counts.holiday, counts.event, counts.longweekend
        );
        if plans.is_empty() {
            println!("Nothing saved yet.");
            return;
        }
        for plan in plans {
            let date = plan.date.as_deref().unwrap_or("-");
            let extra = plan.extra.as_deref().unwrap_or("");
            println!(
                "{}  [{}] {}  {} @ {}  {}",
                plan.id,
                plan.plan_type.label(),
                date,
                plan.title,
                plan.location,
                extra
            );
        }
    }

    fn render_conversion(&self, amount: f64, from: &str, to: &str, converted: f64, rate: f64) {
        println!("{:.2} {} = {:.2} {}", amount, from, converted, to);
        println!("1 {} = {:.4} {}", from, rate, to);
    }

    fn update_city_choices(&self, cities: &[String]) {
        if cities.is_empty() {
            println!("No city choices available for this country.");
        }
    }

    fn update_saved_count(&self, count: usize) {
        println!("Saved plans: {}", count);
    }

    fn notice(&self, message: &str) {
        println!("! {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::{CurrentConditions, DailyForecast};

    #[test]
    fn weather_table_tolerates_ragged_daily_arrays() {
        let report = WeatherReport {
            current: CurrentConditions {
                temperature: 18.0,
                humidity: 55.0,
                wind_speed: 9.0,
                weather_code: 2,
            },
            daily: DailyForecast {
                time: vec![
                    "2026-08-23".into(),
                    "2026-08-24".into(),
                    "2026-08-25".into(),
                    "2026-08-26".into(),
                ],
                weather_code: vec![0, 61],
                temperature_max: vec![24.0, 21.0, 22.0],
                temperature_min: vec![14.0],
                sunrise: vec![],
                sunset: vec![],
            },
        };

        // Rows past the shortest array are dropped rather than panicking.
        TerminalPresenter.render_weather(Some(&report), "Paris");
    }
}
