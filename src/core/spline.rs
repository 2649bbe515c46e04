//! Cardinal (Hermite) spline fitting and pixel-space rasterization.

use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Pixel-space samples approximating the curve between two adjacent data
/// points. Segments concatenate into the full curve; the shared boundary
/// sample belongs to the later segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineSegment {
    pub samples: Vec<(f64, f64)>,
}

/// A fully rasterized curve. Segment count is `points.len() - 1` for a
/// multi-point series, one for a single point, zero for an empty series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub segments: Vec<SplineSegment>,
}

impl Curve {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flattens the curve into one polyline.
    #[must_use]
    pub fn polyline(&self) -> Vec<(f64, f64)> {
        self.segments
            .iter()
            .flat_map(|segment| segment.samples.iter().copied())
            .collect()
    }
}

fn h00(t: f64) -> f64 {
    (1.0 + 2.0 * t) * (1.0 - t).powi(2)
}

fn h10(t: f64) -> f64 {
    t * (1.0 - t).powi(2)
}

fn h01(t: f64) -> f64 {
    t.powi(2) * (3.0 - 2.0 * t)
}

fn h11(t: f64) -> f64 {
    t.powi(2) * (t - 1.0)
}

/// An interpolating spline over an x-ascending series.
///
/// The fitted curve passes exactly through every input point; `tension`
/// controls how tightly it hugs the polyline between them (0 = loose,
/// 1 = nearly linear).
#[derive(Debug, Clone, PartialEq)]
pub struct CardinalSpline {
    points: Vec<DataPoint>,
    tangents: Vec<f64>,
}

impl CardinalSpline {
    pub fn fit(points: &[DataPoint], tension: f64) -> ChartResult<Self> {
        if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
            return Err(ChartError::InvalidData(
                "spline tension must be finite and within [0, 1]".to_owned(),
            ));
        }

        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "series points must be finite".to_owned(),
                ));
            }
        }
        for pair in points.windows(2) {
            if pair[1].x <= pair[0].x {
                return Err(ChartError::InvalidData(
                    "series x values must be strictly ascending".to_owned(),
                ));
            }
        }

        if points.len() < 2 {
            return Ok(Self {
                points: points.to_vec(),
                tangents: vec![0.0; points.len()],
            });
        }

        let last = points.len() - 1;
        let secants: Vec<f64> = points
            .windows(2)
            .map(|pair| (pair[1].y - pair[0].y) / (pair[1].x - pair[0].x))
            .collect();

        let tangents = (0..points.len())
            .map(|k| {
                if k == 0 {
                    secants[0]
                } else if k == last {
                    secants[last - 1]
                } else {
                    (1.0 - tension) * (secants[k - 1] + secants[k])
                }
            })
            .collect();

        Ok(Self {
            points: points.to_vec(),
            tangents,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Evaluates the fitted curve at a data-space x.
    ///
    /// Positions outside the fitted domain clamp to the boundary values.
    /// Returns `None` for an empty fit.
    #[must_use]
    pub fn value_at(&self, x: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = *self.points.last()?;

        if x <= first.x {
            return Some(first.y);
        }
        if x >= last.x {
            return Some(last.y);
        }

        let upper = self.points.partition_point(|point| point.x <= x);
        let k = upper - 1;
        Some(self.segment_value_at(k, x))
    }

    fn segment_value_at(&self, k: usize, x: f64) -> f64 {
        let (a, b) = (self.points[k], self.points[k + 1]);
        let width = b.x - a.x;
        let t = (x - a.x) / width;

        h00(t) * a.y
            + h10(t) * width * self.tangents[k]
            + h01(t) * b.y
            + h11(t) * width * self.tangents[k + 1]
    }

    /// Walks pixel-x positions between each adjacent pair, evaluating the
    /// curve at every pixel column.
    ///
    /// An empty fit yields an empty curve; a single-point fit yields one
    /// zero-length segment holding the rendered point.
    pub fn rasterize(&self, mapper: CoordinateMapper) -> ChartResult<Curve> {
        match self.points.len() {
            0 => return Ok(Curve::default()),
            1 => {
                let only = self.points[0];
                let sample = (mapper.pix_x(only.x)?, mapper.pix_y(only.y)?);
                return Ok(Curve {
                    segments: vec![SplineSegment {
                        samples: vec![sample],
                    }],
                });
            }
            _ => {}
        }

        let mut segments = Vec::with_capacity(self.points.len() - 1);
        let mut px_start = mapper.pix_x(self.points[0].x)?;

        for k in 0..self.points.len() - 1 {
            let px_end = mapper.pix_x(self.points[k + 1].x)?;
            let columns = ((px_end - px_start).floor() as usize).max(1);

            let mut samples = Vec::with_capacity(columns);
            for column in 0..columns {
                let px = px_start + column as f64;
                let value = self.segment_value_at(k, mapper.val_x(px)?);
                samples.push((px, mapper.pix_y(value)?));
            }

            segments.push(SplineSegment { samples });
            px_start = px_end;
        }

        // Close the curve on the exact final point.
        let last = self.points[self.points.len() - 1];
        let final_sample = (mapper.pix_x(last.x)?, mapper.pix_y(last.y)?);
        if let Some(segment) = segments.last_mut() {
            segment.samples.push(final_sample);
        }

        Ok(Curve { segments })
    }
}

/// One contiguous stroke of curve samples sharing a color.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRun {
    /// Index into the caller's palette; increments at each transition.
    pub color_index: usize,
    pub points: Vec<(f64, f64)>,
}

/// Splits a curve into strokes at the given segment indices.
///
/// Each transition starts a new stroke color without breaking interpolation
/// continuity: the boundary sample is shared by both runs. Indices are
/// expected ascending; out-of-range indices are ignored.
#[must_use]
pub fn split_strokes(curve: &Curve, transitions: &[usize]) -> Vec<StrokeRun> {
    let mut runs = Vec::new();
    let mut current = StrokeRun {
        color_index: 0,
        points: Vec::new(),
    };
    let mut next_transition = 0;

    for (index, segment) in curve.segments.iter().enumerate() {
        if next_transition < transitions.len() && transitions[next_transition] == index {
            next_transition += 1;

            if !current.points.is_empty() {
                if let Some(first) = segment.samples.first() {
                    current.points.push(*first);
                }
                let color_index = current.color_index + 1;
                runs.push(current);
                current = StrokeRun {
                    color_index,
                    points: Vec::new(),
                };
            }
        }

        current.points.extend(segment.samples.iter().copied());
    }

    if !current.points.is_empty() {
        runs.push(current);
    }

    runs
}
