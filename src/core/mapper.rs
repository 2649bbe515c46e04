use serde::{Deserialize, Serialize};

use crate::core::{ChartRange, Padding, Viewport};
use crate::error::{ChartError, ChartResult};

/// Value↔pixel transforms for one axis pair.
///
/// X is a plain affine map; Y is inverted (pixel 0 at the top) and optionally
/// logarithmic. The mapper is pure arithmetic over an immutable range, so a
/// single instance serves a whole draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    range: ChartRange,
    viewport: Viewport,
    padding: Padding,
    y_start: f64,
    y_end: f64,
}

impl CoordinateMapper {
    pub fn new(range: ChartRange, viewport: Viewport, padding: Padding) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !padding.is_valid() {
            return Err(ChartError::InvalidData(
                "padding sides must be finite and >= 0".to_owned(),
            ));
        }

        let plot_width = f64::from(viewport.width) - padding.left - padding.right;
        let plot_height = f64::from(viewport.height) - padding.top - padding.bottom;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "padding leaves no plot area inside the viewport".to_owned(),
            ));
        }

        // Log ranges are guaranteed positive by ChartRange construction.
        let (y_start, y_end) = if range.log_y() {
            (range.min_y().ln(), range.max_y().ln())
        } else {
            (range.min_y(), range.max_y())
        };

        Ok(Self {
            range,
            viewport,
            padding,
            y_start,
            y_end,
        })
    }

    #[must_use]
    pub fn range(self) -> ChartRange {
        self.range
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    fn plot_width(self) -> f64 {
        f64::from(self.viewport.width) - self.padding.left - self.padding.right
    }

    #[must_use]
    fn plot_height(self) -> f64 {
        f64::from(self.viewport.height) - self.padding.top - self.padding.bottom
    }

    /// Maps a data-space x value to pixel x.
    pub fn pix_x(self, x: f64) -> ChartResult<f64> {
        if !x.is_finite() {
            return Err(ChartError::InvalidData("x value must be finite".to_owned()));
        }
        Ok(self.padding.left + (x - self.range.min_x()) / self.range.span_x() * self.plot_width())
    }

    /// Maps a pixel x back to data space.
    pub fn val_x(self, pix: f64) -> ChartResult<f64> {
        if !pix.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        Ok((pix - self.padding.left) * self.range.span_x() / self.plot_width() + self.range.min_x())
    }

    /// Maps a data-space y value to pixel y (top of viewport is pixel 0).
    pub fn pix_y(self, y: f64) -> ChartResult<f64> {
        if !y.is_finite() {
            return Err(ChartError::InvalidData("y value must be finite".to_owned()));
        }

        let transformed = if self.range.log_y() {
            if y <= 0.0 {
                return Err(ChartError::InvalidData(
                    "log-scale y value must be > 0".to_owned(),
                ));
            }
            y.ln()
        } else {
            y
        };

        let normalized = (transformed - self.y_start) / (self.y_end - self.y_start);
        Ok(f64::from(self.viewport.height) - self.padding.bottom - normalized * self.plot_height())
    }

    /// Maps a pixel y back to data space, inverting the log transform if set.
    pub fn val_y(self, pix: f64) -> ChartResult<f64> {
        if !pix.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized =
            (f64::from(self.viewport.height) - self.padding.bottom - pix) / self.plot_height();
        let transformed = self.y_start + normalized * (self.y_end - self.y_start);

        if self.range.log_y() {
            Ok(transformed.exp())
        } else {
            Ok(transformed)
        }
    }
}
