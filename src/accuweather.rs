//! Typed views of AccuWeather JSON exports.
//!
//! Only the fields the reports consume are declared; any extra keys in the
//! documents are ignored. A declared field that is missing or has the wrong
//! type fails the whole load, before any report text is built.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ReportError;

/// The `{"Value": ...}` wrapper the provider puts around every measurement.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Value {
    #[serde(rename = "Value")]
    pub value: f64,
}

/// The `{"Metric": {"Value": ...}}` wrapper on hourly measurements.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct MetricValue {
    #[serde(rename = "Metric")]
    pub metric: Value,
}

pub mod forecast {
    use super::*;

    /// A daily-forecast document: an object keyed by `DailyForecasts`.
    #[derive(Deserialize, Debug, Clone)]
    pub struct Forecast {
        #[serde(rename = "DailyForecasts")]
        pub daily_forecasts: Vec<DailyForecast>,
    }

    impl Forecast {
        pub fn from_file(path: &Path) -> Result<Self, ReportError> {
            let forecast: Self = read_document(path)?;
            log::debug!(
                "loaded {} daily forecasts from {}",
                forecast.daily_forecasts.len(),
                path.display()
            );
            Ok(forecast)
        }
    }

    #[derive(Deserialize, Debug, Clone)]
    pub struct DailyForecast {
        #[serde(rename = "Date")]
        pub date: String,

        #[serde(rename = "Temperature")]
        pub temperature: TemperatureRange,

        #[serde(rename = "RealFeelTemperature")]
        pub real_feel: TemperatureRange,

        #[serde(rename = "RealFeelTemperatureShade")]
        pub real_feel_shade: TemperatureRange,

        #[serde(rename = "Day")]
        pub day: Conditions,

        #[serde(rename = "Night")]
        pub night: Conditions,
    }

    /// Daily temperatures come in Fahrenheit, one `Value` per bound.
    #[derive(Deserialize, Debug, Clone, Copy)]
    pub struct TemperatureRange {
        #[serde(rename = "Minimum")]
        pub minimum: Value,

        #[serde(rename = "Maximum")]
        pub maximum: Value,
    }

    /// Half-day conditions, reported separately for day and night.
    #[derive(Deserialize, Debug, Clone)]
    pub struct Conditions {
        #[serde(rename = "LongPhrase")]
        pub long_phrase: String,

        #[serde(rename = "RainProbability")]
        pub rain_probability: u8,
    }
}

pub mod observation {
    use super::*;

    /// A historical-observations document: a bare array of hourly records.
    #[derive(Deserialize, Debug, Clone)]
    #[serde(transparent)]
    pub struct Observations {
        pub hours: Vec<HourlyObservation>,
    }

    impl Observations {
        pub fn from_file(path: &Path) -> Result<Self, ReportError> {
            let observations: Self = read_document(path)?;
            log::debug!(
                "loaded {} hourly observations from {}",
                observations.hours.len(),
                path.display()
            );
            Ok(observations)
        }
    }

    /// Hourly measurements come in metric units already.
    #[derive(Deserialize, Debug, Clone)]
    pub struct HourlyObservation {
        #[serde(rename = "LocalObservationDateTime")]
        pub timestamp: String,

        #[serde(rename = "WeatherText")]
        pub weather_text: String,

        #[serde(rename = "IsDayTime")]
        pub is_daytime: bool,

        #[serde(rename = "Temperature")]
        pub temperature: MetricValue,

        #[serde(rename = "RealFeelTemperature")]
        pub real_feel: MetricValue,

        #[serde(rename = "PrecipitationSummary")]
        pub precipitation_summary: PrecipitationSummary,

        #[serde(rename = "UVIndex")]
        pub uv_index: u32,
    }

    #[derive(Deserialize, Debug, Clone, Copy)]
    pub struct PrecipitationSummary {
        #[serde(rename = "Precipitation")]
        pub precipitation: MetricValue,
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ReportError> {
    let json = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ReportError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::forecast::Forecast;
    use super::observation::Observations;
    use super::*;

    const FORECAST_DOC: &str = r#"{
        "Headline": { "Text": "Showers Sunday morning" },
        "DailyForecasts": [
            {
                "Date": "2021-06-19T07:00:00+08:00",
                "EpochDate": 1624057200,
                "Temperature": {
                    "Minimum": { "Value": 50.0, "Unit": "F", "UnitType": 18 },
                    "Maximum": { "Value": 70.0, "Unit": "F", "UnitType": 18 }
                },
                "RealFeelTemperature": {
                    "Minimum": { "Value": 47.0, "Unit": "F", "UnitType": 18 },
                    "Maximum": { "Value": 72.0, "Unit": "F", "UnitType": 18 }
                },
                "RealFeelTemperatureShade": {
                    "Minimum": { "Value": 46.0, "Unit": "F", "UnitType": 18 },
                    "Maximum": { "Value": 68.0, "Unit": "F", "UnitType": 18 }
                },
                "Day": {
                    "Icon": 4,
                    "LongPhrase": "Plenty of sunshine",
                    "RainProbability": 10
                },
                "Night": {
                    "Icon": 36,
                    "LongPhrase": "Clear and chilly",
                    "RainProbability": 1
                }
            }
        ]
    }"#;

    const OBSERVATIONS_DOC: &str = r#"[
        {
            "LocalObservationDateTime": "2021-07-05T10:55:00+08:00",
            "EpochTime": 1625453700,
            "WeatherText": "Light rain",
            "IsDayTime": true,
            "Temperature": {
                "Metric": { "Value": 14.4, "Unit": "C", "UnitType": 17 },
                "Imperial": { "Value": 58.0, "Unit": "F", "UnitType": 18 }
            },
            "RealFeelTemperature": {
                "Metric": { "Value": 12.2, "Unit": "C", "UnitType": 17 }
            },
            "PrecipitationSummary": {
                "Precipitation": {
                    "Metric": { "Value": 1.2, "Unit": "mm", "UnitType": 3 }
                }
            },
            "UVIndex": 1,
            "UVIndexText": "Low"
        }
    ]"#;

    #[test]
    fn parses_a_forecast_document() {
        let forecast: Forecast = serde_json::from_str(FORECAST_DOC).unwrap();
        assert_eq!(forecast.daily_forecasts.len(), 1);

        let day = &forecast.daily_forecasts[0];
        assert_eq!(day.date, "2021-06-19T07:00:00+08:00");
        assert_eq!(day.temperature.minimum.value, 50.0);
        assert_eq!(day.temperature.maximum.value, 70.0);
        assert_eq!(day.real_feel.minimum.value, 47.0);
        assert_eq!(day.real_feel_shade.minimum.value, 46.0);
        assert_eq!(day.day.long_phrase, "Plenty of sunshine");
        assert_eq!(day.day.rain_probability, 10);
        assert_eq!(day.night.long_phrase, "Clear and chilly");
        assert_eq!(day.night.rain_probability, 1);
    }

    #[test]
    fn parses_an_observations_document() {
        let observations: Observations = serde_json::from_str(OBSERVATIONS_DOC).unwrap();
        assert_eq!(observations.hours.len(), 1);

        let hour = &observations.hours[0];
        assert_eq!(hour.timestamp, "2021-07-05T10:55:00+08:00");
        assert_eq!(hour.weather_text, "Light rain");
        assert!(hour.is_daytime);
        assert_eq!(hour.temperature.metric.value, 14.4);
        assert_eq!(hour.real_feel.metric.value, 12.2);
        assert_eq!(hour.precipitation_summary.precipitation.metric.value, 1.2);
        assert_eq!(hour.uv_index, 1);
    }

    #[test]
    fn rejects_a_document_without_daily_forecasts() {
        assert!(serde_json::from_str::<Forecast>(r#"{"Headline": {}}"#).is_err());
    }

    #[test]
    fn rejects_a_day_with_a_missing_temperature_bound() {
        let doc = r#"{
            "DailyForecasts": [
                {
                    "Date": "2021-06-19T07:00:00+08:00",
                    "Temperature": { "Minimum": { "Value": 50.0 } },
                    "RealFeelTemperature": {
                        "Minimum": { "Value": 47.0 },
                        "Maximum": { "Value": 72.0 }
                    },
                    "RealFeelTemperatureShade": {
                        "Minimum": { "Value": 46.0 },
                        "Maximum": { "Value": 68.0 }
                    },
                    "Day": { "LongPhrase": "Sunny", "RainProbability": 0 },
                    "Night": { "LongPhrase": "Clear", "RainProbability": 0 }
                }
            ]
        }"#;
        assert!(serde_json::from_str::<Forecast>(doc).is_err());
    }

    #[test]
    fn rejects_an_object_where_an_array_is_expected() {
        assert!(serde_json::from_str::<Observations>(r#"{"hours": []}"#).is_err());
    }

    #[test]
    fn from_file_reports_missing_files_as_read_errors() {
        let err = Forecast::from_file(Path::new("definitely_missing.json")).unwrap_err();
        assert!(matches!(err, ReportError::Read { .. }));
    }

    #[test]
    fn from_file_reports_bad_documents_as_schema_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{}").unwrap();

        let err = Forecast::from_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::Schema { .. }));
    }

    #[test]
    fn from_file_loads_a_document_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("observations.json");
        fs::write(&path, OBSERVATIONS_DOC).unwrap();

        let observations = Observations::from_file(&path).unwrap();
        assert_eq!(observations.hours.len(), 1);
    }
}
