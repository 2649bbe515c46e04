use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::RangeError;

/// Immutable data-space bounds for one draw pass.
///
/// A range is recomputed from scratch whenever data or zoom changes; nothing
/// mutates it afterwards. Cross-frame continuity lives in
/// [`RangeContinuity`], owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRange {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    log_y: bool,
}

impl ChartRange {
    /// Validates and freezes caller bounds.
    ///
    /// Degenerate spans (`min == max`), non-finite bounds, and log-scale
    /// ranges touching zero or below are all rejected here so they can never
    /// surface as NaN further down the pipeline.
    pub fn new(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        log_y: bool,
    ) -> Result<Self, RangeError> {
        let finite = [min_x, max_x, min_y, max_y]
            .iter()
            .all(|bound| bound.is_finite());
        let ordered = min_x < max_x && min_y < max_y;
        let log_ok = !log_y || (min_y > 0.0 && max_y > 0.0);

        if !finite || !ordered || !log_ok {
            return Err(RangeError::InvalidBounds {
                min_x,
                max_x,
                min_y,
                max_y,
                log_y,
            });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            log_y,
        })
    }

    pub fn linear(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, RangeError> {
        Self::new(min_x, max_x, min_y, max_y, false)
    }

    /// Fits bounds to a series, expanding degenerate spans.
    ///
    /// A flat series (every y equal) or a single point would otherwise
    /// produce a zero span, so those axes get a small symmetric margin. On a
    /// log scale the expansion is multiplicative to keep bounds positive.
    pub fn from_series(points: &[DataPoint], log_y: bool) -> Result<Self, RangeError> {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        if points.is_empty() {
            return Err(RangeError::InvalidBounds {
                min_x,
                max_x,
                min_y,
                max_y,
                log_y,
            });
        }

        if min_x == max_x {
            min_x -= 0.5;
            max_x += 0.5;
        }
        if min_y == max_y {
            if log_y {
                min_y /= 2.0;
                max_y *= 2.0;
            } else {
                min_y -= 0.5;
                max_y += 0.5;
            }
        }

        Self::new(min_x, max_x, min_y, max_y, log_y)
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn log_y(self) -> bool {
        self.log_y
    }

    #[must_use]
    pub fn span_x(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn span_y(self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Caller-held continuity state between draws.
///
/// Keeps the last successfully constructed range so a transiently degenerate
/// input (a zoom collapsing to one point, a selection dragged backwards) can
/// fall back to the previous frame's bounds instead of snapping the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeContinuity {
    last_good: Option<ChartRange>,
}

impl RangeContinuity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the candidate range when valid, remembering it; otherwise the
    /// last good range if one exists.
    pub fn resolve(
        &mut self,
        candidate: Result<ChartRange, RangeError>,
    ) -> Result<ChartRange, RangeError> {
        match candidate {
            Ok(range) => {
                self.last_good = Some(range);
                Ok(range)
            }
            Err(err) => self.last_good.ok_or(err),
        }
    }

    #[must_use]
    pub fn last_good(self) -> Option<ChartRange> {
        self.last_good
    }
}
