//! Timestamp rendering for report text.
//!
//! Input documents carry local timestamps with a UTC offset, in the shape
//! `2021-06-19T07:00:00+08:00`. Both converters parse strictly and fail on
//! anything else; rendering stays in the record's own offset, so an
//! observation taken at 15:55 local time reads `15:55` regardless of where
//! the report is generated.

use chrono::{DateTime, FixedOffset};

use crate::error::ReportError;

const ISO_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%:z";

fn parse(iso: &str) -> Result<DateTime<FixedOffset>, ReportError> {
    DateTime::parse_from_str(iso, ISO_OFFSET).map_err(|source| ReportError::Timestamp {
        value: iso.to_string(),
        source,
    })
}

/// `2021-06-19T07:00:00+08:00` becomes `Saturday 19 June 2021`.
pub fn human_date(iso: &str) -> Result<String, ReportError> {
    Ok(parse(iso)?.format("%A %d %B %Y").to_string())
}

/// `2021-06-19T15:55:00+08:00` becomes `15:55`.
pub fn clock_time(iso: &str) -> Result<String, ReportError> {
    Ok(parse(iso)?.format("%H:%M").to_string())
}
