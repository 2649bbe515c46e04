//! Series-level transforms shared by the line-chart models.

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Derives a trailing moving-average series.
///
/// Point `k` becomes the mean of the trailing `min(k + 1, period)` raw
/// values, so the overlay starts at the first sample instead of waiting for
/// a full window.
pub fn moving_average(points: &[DataPoint], period: u32) -> ChartResult<Vec<DataPoint>> {
    if period == 0 {
        return Err(ChartError::InvalidData(
            "moving average period must be > 0".to_owned(),
        ));
    }

    let period = period as usize;
    let mut window_sum = 0.0;
    let mut averaged = Vec::with_capacity(points.len());

    for (k, point) in points.iter().enumerate() {
        window_sum += point.y;
        if k >= period {
            window_sum -= points[k - period].y;
        }

        let window_len = (k + 1).min(period);
        averaged.push(DataPoint::new(point.x, window_sum / window_len as f64));
    }

    Ok(averaged)
}

/// Drops the leading `offset` points, letting a caller zoom into the most
/// recent portion of a series without recomputing from raw data.
///
/// Offsets beyond the series length clamp to an empty tail.
#[must_use]
pub fn offset_series(points: &[DataPoint], offset: usize) -> &[DataPoint] {
    &points[offset.min(points.len())..]
}

/// Finds the index of the point whose x is nearest the cursor position.
///
/// The series is x-sorted, so this binary-searches the insertion point and
/// compares only the two bracketing candidates instead of scanning the whole
/// series on every pointer move.
#[must_use]
pub fn nearest_point_by_x(points: &[DataPoint], x: f64) -> Option<usize> {
    if points.is_empty() || !x.is_finite() {
        return None;
    }

    let upper = points.partition_point(|point| point.x < x);

    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
    if upper > 0 {
        candidates.push((OrderedFloat((points[upper - 1].x - x).abs()), upper - 1));
    }
    if upper < points.len() {
        candidates.push((OrderedFloat((points[upper].x - x).abs()), upper));
    }

    candidates
        .into_iter()
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, index)| index)
}
