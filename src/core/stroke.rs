//! Arc-length dashing of rasterized polylines.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Dash/gap lengths in pixels of path distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub dash_px: f64,
    pub gap_px: f64,
}

impl DashPattern {
    pub fn new(dash_px: f64, gap_px: f64) -> ChartResult<Self> {
        if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "dash and gap lengths must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { dash_px, gap_px })
    }

    #[must_use]
    fn cycle(self) -> f64 {
        self.dash_px + self.gap_px
    }
}

fn lerp(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

/// Splits a polyline into visible dash runs.
///
/// On/off toggling advances by cumulative Euclidean arc length, not by
/// x-distance, so dashes stay visually uniform on steep curve sections. A
/// polyline with fewer than two points has no length to dash and yields no
/// runs.
#[must_use]
pub fn dash_polyline(points: &[(f64, f64)], pattern: DashPattern) -> Vec<Vec<(f64, f64)>> {
    let cycle = pattern.cycle();
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut phase = 0.0;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        if length <= f64::EPSILON {
            continue;
        }

        let mut travelled = 0.0;
        while travelled < length {
            let on = phase < pattern.dash_px;
            let remaining_in_state = if on {
                pattern.dash_px - phase
            } else {
                cycle - phase
            };
            let step = remaining_in_state.min(length - travelled);

            if on {
                let from = lerp(a, b, travelled / length);
                let to = lerp(a, b, (travelled + step) / length);
                if current.is_empty() {
                    current.push(from);
                }
                current.push(to);
            }

            travelled += step;
            phase += step;
            if phase >= cycle {
                phase -= cycle;
            }

            // Crossed from dash into gap: flush the visible run.
            if on && phase >= pattern.dash_px && !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        runs.push(current);
    }

    runs
}
