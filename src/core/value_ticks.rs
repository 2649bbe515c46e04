//! "Nice" value-axis steps for the Y axis of line charts.

use crate::error::{ChartError, ChartResult};

/// Computes a human-friendly tick step of the form {1,2,5} × 10^k.
///
/// `raw = (max - min) / num_ticks` is rounded up to the nearest niceness
/// band, so the resulting tick count never exceeds `num_ticks` by more than
/// one band.
pub fn nice_tick_step(min: f64, max: f64, num_ticks: u32) -> ChartResult<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(ChartError::InvalidData(
            "tick step domain must be finite with max > min".to_owned(),
        ));
    }
    if num_ticks == 0 {
        return Err(ChartError::InvalidData(
            "tick count must be > 0".to_owned(),
        ));
    }

    let raw = (max - min) / f64::from(num_ticks);
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let ratio = raw / magnitude;

    let step = if ratio > 5.0 {
        10.0 * magnitude
    } else if ratio > 2.0 {
        5.0 * magnitude
    } else if ratio > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    };

    Ok(step)
}

/// Expands a value range outward to whole multiples of a tick step.
///
/// Used by the fund-history chart so the highest and lowest gridlines
/// coincide with the axis bounds.
pub fn snap_axis_range(min: f64, max: f64, step: f64) -> ChartResult<(f64, f64)> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidData(
            "axis snap step must be finite and > 0".to_owned(),
        ));
    }
    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(ChartError::InvalidData(
            "axis snap domain must be finite with max >= min".to_owned(),
        ));
    }

    Ok(((min / step).floor() * step, (max / step).ceil() * step))
}
