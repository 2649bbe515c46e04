//! Radial pie-label placement with collision skipping.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, PieDataset, Viewport};
use crate::error::{ChartError, ChartResult};

const LABEL_RADIUS_START: f64 = 1.1;
const LABEL_RADIUS_SCALE: f64 = 1.2;
const LABEL_INSIDE_RADIUS: f64 = 0.6;
const LABEL_SWITCH_POINT: f64 = 0.65;
const LABEL_SCALE_FACTOR_PRE: f64 = 0.4;
const LABEL_SCALE_FACTOR_POST: f64 = 1.2;
const SMALL_LABEL_OFFSET_PX: f64 = 10.0;

/// Where the pie starts drawing: a hair before twelve o'clock, so the first
/// (largest) slice straddles the top.
pub const PIE_START_ANGLE: f64 = -0.1 - FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlign {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelBaseline {
    Top,
    Middle,
}

/// Center and radius of the pie disc in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl PieGeometry {
    /// Standard placement: center pushed right and below the midpoint so the
    /// left and top edges have room for labels and the title.
    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        Ok(Self {
            center_x: 9.0 * width / 17.0,
            center_y: 5.0 * height / 8.0,
            radius: width.min(height) / 4.5,
        })
    }

    #[must_use]
    pub fn point_at(self, radius: f64, angle: f64) -> DataPoint {
        DataPoint::new(
            self.center_x + radius * angle.cos(),
            self.center_y + radius * angle.sin(),
        )
    }
}

/// One filled sector of the pie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSector {
    pub slice_index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// A placed slice label: leader-line geometry plus text anchoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub slice_index: usize,
    /// Leader-line start, just inside the pie edge.
    pub anchor: DataPoint,
    /// Where the text attaches, just outside the leader-line end.
    pub text_anchor: DataPoint,
    pub align: LabelAlign,
    pub baseline: LabelBaseline,
    /// Leader-line polyline; squeezed bottom-left labels get an elbow.
    pub connector: Vec<DataPoint>,
    pub mid_angle: f64,
}

/// Sector and label geometry for one pie draw pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieLayout {
    pub sectors: Vec<PieSector>,
    pub labels: Vec<LabelPlacement>,
}

/// How far beyond the pie edge a bottom-left label sits, as a fraction of
/// the quadrant already swept. Rises on a sine blend up to the switch point,
/// then falls back linearly so late labels return toward the edge.
fn label_radius_extension(x: f64) -> f64 {
    if x < LABEL_SWITCH_POINT {
        LABEL_SCALE_FACTOR_PRE * (PI * x / (2.0 * LABEL_SWITCH_POINT)).sin()
    } else {
        -LABEL_SCALE_FACTOR_POST * (x - 1.0) / (1.0 - LABEL_SWITCH_POINT)
    }
}

/// Walks slices in angular order, computing sectors and non-overlapping
/// label positions.
///
/// A label is placed only when its mid-angle clears the previously placed
/// label by more than `tolerance_angle` (mod 2π); colliding labels are
/// skipped entirely rather than nudged.
pub fn place_labels(
    dataset: &PieDataset,
    geometry: PieGeometry,
    tolerance_angle: f64,
) -> ChartResult<PieLayout> {
    if !tolerance_angle.is_finite() || tolerance_angle < 0.0 {
        return Err(ChartError::InvalidData(
            "pie tolerance angle must be finite and >= 0".to_owned(),
        ));
    }
    if !geometry.radius.is_finite() || geometry.radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "pie radius must be finite and > 0".to_owned(),
        ));
    }

    let mut layout = PieLayout::default();
    if dataset.slices.is_empty() || dataset.total <= 0.0 {
        return Ok(layout);
    }

    let mut angle = PIE_START_ANGLE;
    let mut last_label_angle: Option<f64> = None;
    let mut small_label_offset = SMALL_LABEL_OFFSET_PX;

    for (slice_index, slice) in dataset.slices.iter().enumerate() {
        let sweep = TAU * slice.value / dataset.total;
        let end_angle = angle + sweep;

        layout.sectors.push(PieSector {
            slice_index,
            start_angle: angle,
            end_angle,
        });

        let mid_angle = (angle + 0.5 * sweep).rem_euclid(TAU);
        let clearance = last_label_angle
            .map(|last| (mid_angle - last).rem_euclid(TAU))
            .unwrap_or(f64::INFINITY);

        if clearance > tolerance_angle {
            last_label_angle = Some(mid_angle);

            let quadrant = ((mid_angle + FRAC_PI_2) / FRAC_PI_2).floor() as usize % 4;
            let mut label_direction = -1.0;
            let mut radius_scale = LABEL_RADIUS_START;

            if quadrant == 3 {
                // Fraction of the bottom-left quadrant already swept.
                let x = (mid_angle - PI) / FRAC_PI_2;
                if x >= LABEL_SWITCH_POINT {
                    label_direction = 1.0;
                }
                radius_scale = LABEL_RADIUS_START + LABEL_RADIUS_SCALE * label_radius_extension(x);
            }

            let label_radius = geometry.radius * radius_scale;
            let anchor = geometry.point_at(geometry.radius * LABEL_INSIDE_RADIUS, mid_angle);
            let line_end = geometry.point_at(label_radius, mid_angle);

            let mut text_anchor = geometry.point_at(label_radius + 1.0, mid_angle);
            text_anchor.y = text_anchor.y.floor() + 0.5;

            let baseline = if quadrant == 1 && mid_angle > 0.2 {
                LabelBaseline::Top
            } else {
                LabelBaseline::Middle
            };
            let align = if quadrant < 2 || label_direction > 0.0 {
                LabelAlign::Left
            } else {
                LabelAlign::Right
            };

            let connector = if quadrant == 3 {
                // Squeezed labels stack outward with a growing side offset
                // and a short horizontal elbow back toward the text.
                let elbow = text_anchor;
                let offset_x = text_anchor.x + label_direction * small_label_offset;
                small_label_offset += 1.0;

                text_anchor = DataPoint::new(offset_x, text_anchor.y);
                vec![
                    anchor,
                    elbow,
                    DataPoint::new(offset_x - 3.0 * label_direction, elbow.y),
                ]
            } else {
                vec![anchor, line_end]
            };

            trace!(slice_index, mid_angle, quadrant, "placed pie label");
            layout.labels.push(LabelPlacement {
                slice_index,
                anchor,
                text_anchor,
                align,
                baseline,
                connector,
                mid_angle,
            });
        }

        angle = end_angle;
    }

    Ok(layout)
}
