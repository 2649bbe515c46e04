use serde::{Deserialize, Serialize};

use crate::core::stroke::DashPattern;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One step of a drawing-surface-agnostic path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Circular arc around a center, from `start_angle` to `end_angle`
    /// (radians, sweeping positively).
    Arc {
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl PathCommand {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(ChartError::InvalidData(
                        "path coordinates must be finite".to_owned(),
                    ));
                }
            }
            Self::Arc {
                center_x,
                center_y,
                radius,
                start_angle,
                end_angle,
            } => {
                if !center_x.is_finite()
                    || !center_y.is_finite()
                    || !start_angle.is_finite()
                    || !end_angle.is_finite()
                {
                    return Err(ChartError::InvalidData(
                        "arc parameters must be finite".to_owned(),
                    ));
                }
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "arc radius must be finite and > 0".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Stroke paint for a path: width, color, optional arc-length dashing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    #[must_use]
    pub const fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn dashed(width: f64, color: Color, dash: DashPattern) -> Self {
        Self {
            width,
            color,
            dash: Some(dash),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one path: geometry plus stroke and/or fill paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub stroke: Option<StrokeStyle>,
    pub fill: Option<Color>,
}

impl PathPrimitive {
    /// Builds a stroked polyline from pixel samples.
    #[must_use]
    pub fn stroked_polyline(points: &[(f64, f64)], stroke: StrokeStyle) -> Self {
        let mut commands = Vec::with_capacity(points.len());
        for (index, (x, y)) in points.iter().enumerate() {
            if index == 0 {
                commands.push(PathCommand::MoveTo { x: *x, y: *y });
            } else {
                commands.push(PathCommand::LineTo { x: *x, y: *y });
            }
        }
        Self {
            commands,
            stroke: Some(stroke),
            fill: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.is_empty() {
            return Err(ChartError::InvalidData(
                "path primitive must contain at least one command".to_owned(),
            ));
        }
        if self.stroke.is_none() && self.fill.is_none() {
            return Err(ChartError::InvalidData(
                "path primitive must carry a stroke or a fill".to_owned(),
            ));
        }
        for command in &self.commands {
            command.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub baseline: TextBaseline,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        baseline: TextBaseline,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            baseline,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
