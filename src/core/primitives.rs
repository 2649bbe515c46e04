//! Conversions between host-facing value types and the engine's `f64` space.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Interprets a whole-second timestamp as a UTC instant.
///
/// All calendar tick math runs through this so identical inputs always
/// produce identical ticks regardless of host timezone.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().unwrap_or_default()
}

/// Converts an integer minor-unit amount (pence, cents) to major units.
#[must_use]
pub fn minor_units_to_major(amount: i64) -> f64 {
    amount as f64 / 100.0
}
