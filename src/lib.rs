//! Plain-text weather reports from AccuWeather JSON exports.
//!
//! The pipeline: load a typed document ([`accuweather`]), convert units and
//! timestamps ([`units`], [`timefmt`]), reduce across records ([`stats`]),
//! compose narrative text ([`report`]), and optionally save it ([`export`]).
//! Charting front ends consume [`series`] instead of report text.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use wxreport::accuweather::forecast::Forecast;
//! use wxreport::report;
//!
//! # fn main() -> Result<(), wxreport::ReportError> {
//! let forecast = Forecast::from_file(Path::new("data/forecast_5days_a.json"))?;
//! print!("{}", report::forecast_report(&forecast.daily_forecasts)?);
//! # Ok(())
//! # }
//! ```

pub mod accuweather;
pub mod error;
pub mod export;
pub mod report;
pub mod series;
pub mod stats;
pub mod timefmt;
pub mod units;

pub use error::ReportError;
