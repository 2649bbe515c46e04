use indexmap::IndexMap;
use tracing::debug;

use crate::api::chart_model::ChartModel;
use crate::api::config::ChartConfig;
use crate::api::format::{format_slice_value, truncate_label};
use crate::core::{
    LabelAlign, LabelBaseline, PieDataset, PieGeometry, Viewport, place_labels, reduce,
};
use crate::error::ChartResult;
use crate::render::{
    Color, PathCommand, PathPrimitive, RenderFrame, StrokeStyle, TextBaseline, TextHAlign,
    TextPrimitive,
};

/// Paint configuration for one cost-breakdown pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartStyle {
    /// Fill palette, assigned to slice labels in insertion order.
    pub palette: Vec<Color>,
    pub outline_color: Color,
    pub label_color: Color,
    pub font_size_px: f64,
    pub title_font_size_px: f64,
    /// Longer slice labels are truncated with an ellipsis.
    pub label_max_chars: usize,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            palette: vec![
                Color::rgb(0.08, 0.35, 0.69),
                Color::rgb(0.86, 0.27, 0.22),
                Color::rgb(0.95, 0.61, 0.07),
                Color::rgb(0.18, 0.59, 0.31),
                Color::rgb(0.48, 0.25, 0.62),
                Color::rgb(0.09, 0.63, 0.66),
                Color::rgb(0.58, 0.47, 0.29),
                Color::rgb(0.45, 0.45, 0.45),
            ],
            outline_color: Color::rgb(1.0, 1.0, 1.0),
            label_color: Color::rgb(0.2, 0.2, 0.2),
            font_size_px: 11.0,
            title_font_size_px: 16.0,
            label_max_chars: 30,
        }
    }
}

/// Cost-breakdown pie: reduced sectors, leader lines, non-overlapping
/// radial labels.
#[derive(Debug, Clone)]
pub struct PieChartModel<'a> {
    dataset: &'a PieDataset,
    viewport: Viewport,
    config: ChartConfig,
    style: PieChartStyle,
    title: Option<String>,
}

impl<'a> PieChartModel<'a> {
    pub fn new(
        dataset: &'a PieDataset,
        viewport: Viewport,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            dataset,
            viewport,
            config,
            style: PieChartStyle::default(),
            title: None,
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: PieChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl ChartModel for PieChartModel<'_> {
    fn build_frame(&self) -> ChartResult<RenderFrame> {
        let reduced = reduce(self.dataset, self.config.pie_tolerance_angle)?;
        let geometry = PieGeometry::for_viewport(self.viewport)?;
        let layout = place_labels(&reduced, geometry, self.config.pie_tolerance_angle)?;

        let mut frame = RenderFrame::new(self.viewport);

        // Colors stick to labels in slice order; the synthetic `Other`
        // bucket is assigned like any other label.
        let mut colors: IndexMap<&str, Color> = IndexMap::new();
        for slice in &reduced.slices {
            let next = self.style.palette[colors.len() % self.style.palette.len()];
            colors.entry(slice.label.as_str()).or_insert(next);
        }

        for sector in &layout.sectors {
            let slice = &reduced.slices[sector.slice_index];
            let fill = colors
                .get(slice.label.as_str())
                .copied()
                .unwrap_or(self.style.outline_color);

            frame.push_path(PathPrimitive {
                commands: vec![
                    PathCommand::MoveTo {
                        x: geometry.center_x,
                        y: geometry.center_y,
                    },
                    PathCommand::Arc {
                        center_x: geometry.center_x,
                        center_y: geometry.center_y,
                        radius: geometry.radius,
                        start_angle: sector.start_angle,
                        end_angle: sector.end_angle,
                    },
                ],
                stroke: Some(StrokeStyle::solid(1.0, self.style.outline_color)),
                fill: Some(fill),
            });
        }

        for placement in &layout.labels {
            let connector: Vec<(f64, f64)> = placement
                .connector
                .iter()
                .map(|point| (point.x, point.y))
                .collect();
            frame.push_path(PathPrimitive::stroked_polyline(
                &connector,
                StrokeStyle::solid(1.0, self.style.label_color),
            ));

            let slice = &reduced.slices[placement.slice_index];
            let text = format!(
                "{} ({})",
                truncate_label(&slice.label, self.style.label_max_chars),
                format_slice_value(slice.value, reduced.value_kind),
            );

            let h_align = match placement.align {
                LabelAlign::Left => TextHAlign::Left,
                LabelAlign::Right => TextHAlign::Right,
            };
            let baseline = match placement.baseline {
                LabelBaseline::Top => TextBaseline::Top,
                LabelBaseline::Middle => TextBaseline::Middle,
            };

            frame.push_text(TextPrimitive::new(
                text,
                placement.text_anchor.x,
                placement.text_anchor.y,
                self.style.font_size_px,
                self.style.label_color,
                h_align,
                baseline,
            ));
        }

        if let Some(title) = &self.title {
            frame.push_text(TextPrimitive::new(
                title.clone(),
                f64::from(self.viewport.width) - 10.0,
                10.0,
                self.style.title_font_size_px,
                self.style.label_color,
                TextHAlign::Right,
                TextBaseline::Top,
            ));
        }

        debug!(
            sectors = layout.sectors.len(),
            labels = layout.labels.len(),
            "built pie chart frame"
        );
        Ok(frame)
    }
}
