//! Collapsing the 3-hourly feed into one entry per day.

use tracing::warn;

use crate::{
    console::Console,
    model::{DailyForecast, ForecastSample},
    provider::WeatherService,
};

/// How many days are shown.
pub const MAX_DAYS: usize = 5;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data.";

/// Fetch the forecast for the coordinates and reduce it to at most [`MAX_DAYS`] entries.
///
/// A failing service is reported on the console and yields an empty list.
pub async fn daily_forecast(
    service: &dyn WeatherService,
    console: &mut dyn Console,
    latitude: f64,
    longitude: f64,
) -> Vec<DailyForecast> {
    match service.forecast(latitude, longitude).await {
        Ok(samples) => aggregate(&samples),
        Err(err) => {
            warn!(latitude, longitude, error = %err, "forecast unavailable");
            console.say(FETCH_FAILED_MESSAGE);
            Vec::new()
        }
    }
}

/// Keep the hottest sample of each date, in the order dates first appear.
///
/// Ties keep the earlier sample. Only the first [`MAX_DAYS`] dates are returned.
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DailyForecast> {
    let mut days: Vec<(&str, &ForecastSample)> = Vec::new();

    for sample in samples {
        match days.iter_mut().find(|(date, _)| *date == sample.date) {
            Some(slot) => {
                if sample.max_temperature > slot.1.max_temperature {
                    slot.1 = sample;
                }
            }
            None => days.push((sample.date.as_str(), sample)),
        }
    }

    days.into_iter()
        .take(MAX_DAYS)
        .map(|(date, best)| DailyForecast {
            date: date.to_string(),
            description: title_case(&best.description),
            max_temperature: round_one_decimal(best.max_temperature),
        })
        .collect()
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Rounds the exact binary value, ties to even, the way `{:.1}` prints it.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeService, ScriptedConsole};

    fn day(date: &str, description: &str, max_temperature: f64) -> DailyForecast {
        DailyForecast { date: date.into(), description: description.into(), max_temperature }
    }

    #[test]
    fn description_follows_hottest_sample() {
        let samples = vec![
            ForecastSample::new("2024-01-01 09:00:00", 10.2, "clear sky"),
            ForecastSample::new("2024-01-01 15:00:00", 14.7, "light rain"),
            ForecastSample::new("2024-01-02 09:00:00", 8.0, "clouds"),
        ];

        assert_eq!(
            aggregate(&samples),
            vec![day("2024-01-01", "Light Rain", 14.7), day("2024-01-02", "Clouds", 8.0)]
        );
    }

    #[test]
    fn equal_temperature_keeps_first_description() {
        let samples = vec![
            ForecastSample::new("2024-01-01 09:00:00", 12.0, "few clouds"),
            ForecastSample::new("2024-01-01 12:00:00", 12.0, "heavy snow"),
        ];

        assert_eq!(aggregate(&samples), vec![day("2024-01-01", "Few Clouds", 12.0)]);
    }

    #[test]
    fn lower_later_sample_does_not_overwrite() {
        let samples = vec![
            ForecastSample::new("2024-01-01 12:00:00", 15.0, "sunny"),
            ForecastSample::new("2024-01-01 21:00:00", 3.0, "fog"),
        ];

        assert_eq!(aggregate(&samples), vec![day("2024-01-01", "Sunny", 15.0)]);
    }

    #[test]
    fn truncates_to_first_five_dates_seen() {
        let dates = [
            "2024-01-07",
            "2024-01-01",
            "2024-01-03",
            "2024-01-02",
            "2024-01-06",
            "2024-01-05",
            "2024-01-04",
        ];
        let samples: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| ForecastSample::new(format!("{d} 12:00:00"), i as f64, "rain"))
            .collect();

        let out = aggregate(&samples);
        let got: Vec<&str> = out.iter().map(|d| d.date.as_str()).collect();

        assert_eq!(got, &dates[..5]);
    }

    #[test]
    fn interleaved_dates_keep_first_appearance_order() {
        let samples = vec![
            ForecastSample::new("2024-01-02 00:00:00", 1.0, "a"),
            ForecastSample::new("2024-01-01 00:00:00", 2.0, "b"),
            ForecastSample::new("2024-01-02 03:00:00", 5.0, "c"),
        ];

        assert_eq!(
            aggregate(&samples),
            vec![day("2024-01-02", "C", 5.0), day("2024-01-01", "B", 2.0)]
        );
    }

    #[test]
    fn empty_feed_gives_empty_list() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn temperatures_are_rounded_to_one_decimal() {
        assert_eq!(round_one_decimal(14.74), 14.7);
        assert_eq!(round_one_decimal(14.76), 14.8);
        assert_eq!(round_one_decimal(-3.04), -3.0);
        assert_eq!(round_one_decimal(8.0), 8.0);
    }

    #[test]
    fn rounding_ties_follow_the_stored_binary_value() {
        // 14.35 and 0.15 sit just below the midpoint; 2.25 is an exact tie.
        assert_eq!(round_one_decimal(14.35), 14.3);
        assert_eq!(round_one_decimal(0.15), 0.1);
        assert_eq!(round_one_decimal(1.45), 1.4);
        assert_eq!(round_one_decimal(20.65), 20.6);
        assert_eq!(round_one_decimal(2.25), 2.2);
    }

    #[test]
    fn title_case_normalizes_any_casing() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("OVERCAST CLOUDS"), "Overcast Clouds");
        assert_eq!(title_case("thunderstorm with light drizzle"), "Thunderstorm With Light Drizzle");
        assert_eq!(title_case("rain/snow"), "Rain/Snow");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn failing_service_prints_message_and_returns_nothing() {
        let service = FakeService::default();
        let mut console = ScriptedConsole::new(&[]);

        let out = daily_forecast(&service, &mut console, 1.0, 2.0).await;

        assert!(out.is_empty());
        assert_eq!(console.output, vec![FETCH_FAILED_MESSAGE]);
    }

    #[tokio::test]
    async fn working_service_is_aggregated() {
        let service = FakeService {
            samples: Some(vec![
                ForecastSample::new("2024-03-01 00:00:00", 4.44, "mist"),
                ForecastSample::new("2024-03-01 03:00:00", 4.45, "broken clouds"),
            ]),
            ..Default::default()
        };
        let mut console = ScriptedConsole::new(&[]);

        let out = daily_forecast(&service, &mut console, 1.0, 2.0).await;

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].description, "Broken Clouds");
        assert!(console.output.is_empty());
    }
}
