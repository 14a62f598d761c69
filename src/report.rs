//! Narrative weather reports over forecast and observation records.
//!
//! Report wording and spacing match the report files this tool has
//! historically produced, quirks included.

use crate::accuweather::forecast::DailyForecast;
use crate::accuweather::observation::HourlyObservation;
use crate::error::ReportError;
use crate::stats::{max_entry, mean, min_entry, positions_of, round1};
use crate::timefmt::{clock_time, human_date};
use crate::units::temperature::{f2c, format_celsius};

/// Multi-day overview: averages and extremes across the whole forecast.
///
/// Temperatures are averaged in Fahrenheit and converted once, so rounding
/// is taken once per unit.
pub fn overview(days: &[DailyForecast]) -> Result<String, ReportError> {
    if days.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let total_min: f64 = days.iter().map(|day| day.temperature.minimum.value).sum();
    let total_max: f64 = days.iter().map(|day| day.temperature.maximum.value).sum();
    let mean_min = f2c(mean(total_min, days.len())?);
    let mean_max = f2c(mean(total_max, days.len())?);

    // Ties go to the earliest day.
    let (coldest, min_f) =
        min_entry(days, |day| day.temperature.minimum.value).ok_or(ReportError::EmptyInput)?;
    let (hottest, max_f) =
        max_entry(days, |day| day.temperature.maximum.value).ok_or(ReportError::EmptyInput)?;

    let mut text = format!("{} Day Overview\n", days.len());
    text.push_str(&format!(
        "    The lowest temperature will be {}, and will occur on {}.\n",
        format_celsius(f2c(min_f)),
        human_date(&days[coldest].date)?
    ));
    text.push_str(&format!(
        "    The highest temperature will be {}, and will occur on {}.\n",
        format_celsius(f2c(max_f)),
        human_date(&days[hottest].date)?
    ));
    text.push_str(&format!(
        "    The average low this week is {}.\n",
        format_celsius(mean_min)
    ));
    text.push_str(&format!(
        "    The average high this week is {}.\n\n",
        format_celsius(mean_max)
    ));
    Ok(text)
}

/// One block per day, in input order, each block ending in a blank line.
pub fn daily_narrative(days: &[DailyForecast]) -> Result<String, ReportError> {
    if days.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let mut text = String::new();
    for day in days {
        text.push_str(&format!("-------- {} --------\n", human_date(&day.date)?));
        text.push_str(&format!(
            "Minimum Temperature: {}\n",
            format_celsius(f2c(day.temperature.minimum.value))
        ));
        text.push_str(&format!(
            "Maximum Temperature: {}\n",
            format_celsius(f2c(day.temperature.maximum.value))
        ));
        text.push_str(&format!("Daytime: {}\n", day.day.long_phrase));
        text.push_str(&format!(
            "    Chance of rain:  {}%\n",
            day.day.rain_probability
        ));
        text.push_str(&format!("Nighttime: {}\n", day.night.long_phrase));
        text.push_str(&format!(
            "    Chance of rain:  {}%\n\n",
            day.night.rain_probability
        ));
    }
    Ok(text)
}

/// Full forecast report: the overview followed by one block per day.
pub fn forecast_report(days: &[DailyForecast]) -> Result<String, ReportError> {
    Ok(format!("{}{}", overview(days)?, daily_narrative(days)?))
}

/// Five-line summary of an observed period: temperature extremes with every
/// time they occurred, rainfall, daylight hours, and peak UV.
pub fn historical_summary(hours: &[HourlyObservation]) -> Result<String, ReportError> {
    if hours.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let (_, min_temp) =
        min_entry(hours, |hour| hour.temperature.metric.value).ok_or(ReportError::EmptyInput)?;
    let (_, max_temp) =
        max_entry(hours, |hour| hour.temperature.metric.value).ok_or(ReportError::EmptyInput)?;
    let (_, peak_uv) = max_entry(hours, |hour| hour.uv_index).ok_or(ReportError::EmptyInput)?;

    let min_times = occurrence_times(hours, min_temp, |hour| hour.temperature.metric.value)?;
    let max_times = occurrence_times(hours, max_temp, |hour| hour.temperature.metric.value)?;
    let uv_times = occurrence_times(hours, peak_uv, |hour| hour.uv_index)?;

    let mut total_rain = 0.0;
    let mut rainy_hours = 0usize;
    for hour in hours {
        let rain = hour.precipitation_summary.precipitation.metric.value;
        if rain != 0.0 {
            total_rain += rain;
            rainy_hours += 1;
        }
    }
    let daylight_hours = hours.iter().filter(|hour| hour.is_daytime).count();

    Ok(format!(
        "The minimum temperature was {} at {}.\n\
         The maximum temperature was {} at {}.\n\
         The total rain fall was {}mm over {} hours.\n\
         The number of daylight hours was {}.\n\
         The maximum UV index was: {} at {}.",
        format_celsius(min_temp),
        natural_join(&min_times),
        format_celsius(max_temp),
        natural_join(&max_times),
        round1(total_rain),
        rainy_hours,
        daylight_hours,
        peak_uv,
        natural_join(&uv_times),
    ))
}

/// Clock times of every record whose selected value equals `target`.
fn occurrence_times<V, F>(
    hours: &[HourlyObservation],
    target: V,
    value: F,
) -> Result<Vec<String>, ReportError>
where
    V: PartialEq + Copy,
    F: Fn(&HourlyObservation) -> V,
{
    positions_of(hours, target, value)
        .into_iter()
        .map(|index| clock_time(&hours[index].timestamp))
        .collect()
}

/// Joins occurrence times the way a sentence reads: `a`, `a and b`,
/// `a, b, and c`.
fn natural_join(times: &[String]) -> String {
    match times {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
