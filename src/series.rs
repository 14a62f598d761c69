//! Ordered per-record series for charting collaborators.
//!
//! Rendering stays out of this crate. A plotting front end consumes these
//! sequences as-is; `demos/plot_temps.rs` shows one doing so. Every vector
//! holds one entry per input record, in input order.

use crate::accuweather::forecast::DailyForecast;
use crate::accuweather::observation::HourlyObservation;
use crate::error::ReportError;
use crate::timefmt::{clock_time, human_date};
use crate::units::temperature::f2c;

/// Per-day forecast series, temperatures already converted to Celsius and
/// dates already humanized.
#[derive(Debug, Clone, Default)]
pub struct ForecastSeries {
    pub days: Vec<String>,
    pub minimums: Vec<f64>,
    pub maximums: Vec<f64>,
    pub real_feel_minimums: Vec<f64>,
    pub shade_real_feel_minimums: Vec<f64>,
}

impl ForecastSeries {
    pub fn from_days(days: &[DailyForecast]) -> Result<Self, ReportError> {
        let mut series = Self::default();
        for day in days {
            series.days.push(human_date(&day.date)?);
            series.minimums.push(f2c(day.temperature.minimum.value));
            series.maximums.push(f2c(day.temperature.maximum.value));
            series.real_feel_minimums.push(f2c(day.real_feel.minimum.value));
            series
                .shade_real_feel_minimums
                .push(f2c(day.real_feel_shade.minimum.value));
        }
        Ok(series)
    }

    /// Numeric columns keyed by display name, for front ends that pick
    /// series by label.
    pub fn numeric_columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("Minimum Temp", &self.minimums),
            ("Maximum Temp", &self.maximums),
            ("Minimum Real Feel Temp", &self.real_feel_minimums),
            ("Minimum Real Feel Shade Temp", &self.shade_real_feel_minimums),
        ]
    }
}

/// Per-hour observation series. Temperatures are metric in the source and
/// pass through unchanged; timestamps reduce to clock times.
#[derive(Debug, Clone, Default)]
pub struct ObservationSeries {
    pub times: Vec<String>,
    pub temperatures: Vec<f64>,
    pub real_feels: Vec<f64>,
    pub descriptions: Vec<String>,
    pub precipitation: Vec<f64>,
    pub uv_index: Vec<f64>,
    pub daytime: Vec<bool>,
}

impl ObservationSeries {
    pub fn from_hours(hours: &[HourlyObservation]) -> Result<Self, ReportError> {
        let mut series = Self::default();
        for hour in hours {
            series.times.push(clock_time(&hour.timestamp)?);
            series.temperatures.push(hour.temperature.metric.value);
            series.real_feels.push(hour.real_feel.metric.value);
            series.descriptions.push(hour.weather_text.clone());
            series
                .precipitation
                .push(hour.precipitation_summary.precipitation.metric.value);
            series.uv_index.push(f64::from(hour.uv_index));
            series.daytime.push(hour.is_daytime);
        }
        Ok(series)
    }

    pub fn numeric_columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("Temperature", &self.temperatures),
            ("Real Feel Temperature", &self.real_feels),
            ("Precipitation", &self.precipitation),
            ("UV Index", &self.uv_index),
        ]
    }
}
