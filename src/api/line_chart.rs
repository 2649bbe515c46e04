use std::f64::consts::TAU;

use tracing::debug;

use crate::api::chart_model::ChartModel;
use crate::api::config::ChartConfig;
use crate::api::format::format_currency_abbrev;
use crate::core::{
    CardinalSpline, ChartRange, CoordinateMapper, DashPattern, DataPoint, Padding, Viewport,
    dash_polyline, moving_average, nearest_point_by_x, nice_tick_step, offset_series,
    split_strokes, time_series_ticks,
};
use crate::error::ChartResult;
use crate::render::{
    Color, PathCommand, PathPrimitive, RenderFrame, StrokeStyle, TextBaseline, TextHAlign,
    TextPrimitive,
};

const HOVER_POINT_RADIUS_PX: f64 = 3.0;
const MINOR_TICK_LENGTH_PX: f64 = 6.0;

/// Paint configuration for one line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesStyle {
    /// Stroke palette, cycled at each color transition.
    pub palette: Vec<Color>,
    /// Curve segment indices at which the stroke switches to the next
    /// palette color (e.g. the actual/predicted boundary).
    pub transitions: Vec<usize>,
    pub stroke_width: f64,
    /// Arc-length dashing applied to the main curve.
    pub dash: Option<DashPattern>,
    /// Area fill down to the zero baseline.
    pub fill: Option<Color>,
    pub moving_average_color: Color,
    pub grid_color: Color,
    pub label_color: Color,
    pub font_size_px: f64,
}

impl Default for LineSeriesStyle {
    fn default() -> Self {
        Self {
            palette: vec![Color::rgb(0.0, 0.2, 0.6)],
            transitions: Vec::new(),
            stroke_width: 2.0,
            dash: None,
            fill: None,
            moving_average_color: Color::rgb(0.8, 0.1, 0.1),
            grid_color: Color::rgb(0.86, 0.86, 0.86),
            label_color: Color::rgb(0.2, 0.2, 0.2),
            font_size_px: 11.0,
        }
    }
}

/// Balance/spending/fund-history chart: smooth curve plus calendar time
/// axis and nice value gridlines.
///
/// Borrows its series and recomputes everything per [`ChartModel::build_frame`]
/// call; zoom state is just the `data_offset` passed in.
#[derive(Debug, Clone)]
pub struct LineChartModel<'a> {
    points: &'a [DataPoint],
    range: ChartRange,
    viewport: Viewport,
    padding: Padding,
    config: ChartConfig,
    style: LineSeriesStyle,
    /// Added to x values when generating calendar ticks, letting series
    /// store small offsets from an epoch instead of absolute timestamps.
    time_offset: i64,
    /// Leading points dropped before fitting (wheel-zoom into the recent
    /// portion of a fund history).
    data_offset: usize,
    y_tick_count: u32,
}

impl<'a> LineChartModel<'a> {
    pub fn new(
        points: &'a [DataPoint],
        range: ChartRange,
        viewport: Viewport,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            points,
            range,
            viewport,
            padding: Padding::default(),
            config,
            style: LineSeriesStyle::default(),
            time_offset: 0,
            data_offset: 0,
            y_tick_count: 5,
        })
    }

    /// Autoscales the range from the series itself, honoring the config's
    /// log-scale setting.
    pub fn autoscaled(
        points: &'a [DataPoint],
        viewport: Viewport,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        let range = ChartRange::from_series(points, config.log_y)?;
        Self::new(points, range, viewport, config)
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: LineSeriesStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_time_offset(mut self, time_offset: i64) -> Self {
        self.time_offset = time_offset;
        self
    }

    #[must_use]
    pub fn with_data_offset(mut self, data_offset: usize) -> Self {
        self.data_offset = data_offset;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, y_tick_count: u32) -> Self {
        self.y_tick_count = y_tick_count;
        self
    }

    fn mapper(&self) -> ChartResult<CoordinateMapper> {
        CoordinateMapper::new(self.range, self.viewport, self.padding)
    }

    #[must_use]
    fn visible_points(&self) -> &'a [DataPoint] {
        offset_series(self.points, self.data_offset)
    }

    /// Resolves a pointer x pixel to the nearest visible point index.
    pub fn nearest_index(&self, pixel_x: f64) -> ChartResult<Option<usize>> {
        let x = self.mapper()?.val_x(pixel_x)?;
        Ok(nearest_point_by_x(self.visible_points(), x))
    }

    /// Builds the hover marker for a visible point: a small filled circle.
    pub fn highlight_point(&self, index: usize) -> ChartResult<Option<PathPrimitive>> {
        let Some(point) = self.visible_points().get(index) else {
            return Ok(None);
        };

        let mapper = self.mapper()?;
        let commands = vec![PathCommand::Arc {
            center_x: mapper.pix_x(point.x)?,
            center_y: mapper.pix_y(point.y)?,
            radius: HOVER_POINT_RADIUS_PX,
            start_angle: 0.0,
            end_angle: TAU,
        }];
        Ok(Some(PathPrimitive {
            commands,
            stroke: None,
            fill: Some(self.style.moving_average_color),
        }))
    }

    fn push_time_axis(&self, frame: &mut RenderFrame, mapper: CoordinateMapper) -> ChartResult<()> {
        let begin = (self.range.min_x().ceil() as i64) + self.time_offset;
        let end = (self.range.max_x().floor() as i64) + self.time_offset;

        let plot_top = self.padding.top;
        let plot_bottom = f64::from(self.viewport.height) - self.padding.bottom;

        for tick in time_series_ticks(begin, end) {
            let x = mapper.pix_x(tick.position - self.time_offset as f64)?;
            let x = x.floor() + 0.5;

            let top = if tick.major {
                plot_top
            } else {
                plot_bottom - MINOR_TICK_LENGTH_PX
            };
            frame.push_path(PathPrimitive {
                commands: vec![
                    PathCommand::MoveTo { x, y: top },
                    PathCommand::LineTo { x, y: plot_bottom },
                ],
                stroke: Some(StrokeStyle::solid(1.0, self.style.grid_color)),
                fill: None,
            });

            if let Some(label) = tick.label {
                frame.push_text(TextPrimitive::new(
                    label,
                    x,
                    plot_bottom + 2.0,
                    self.style.font_size_px,
                    self.style.label_color,
                    TextHAlign::Center,
                    TextBaseline::Top,
                ));
            }
        }

        Ok(())
    }

    fn push_value_axis(
        &self,
        frame: &mut RenderFrame,
        mapper: CoordinateMapper,
    ) -> ChartResult<()> {
        let step = nice_tick_step(self.range.min_y(), self.range.max_y(), self.y_tick_count)?;

        let plot_left = self.padding.left;
        let plot_right = f64::from(self.viewport.width) - self.padding.right;

        let first = (self.range.min_y() / step).ceil() as i64;
        let last = (self.range.max_y() / step).floor() as i64;

        for index in first..=last {
            let value = index as f64 * step;
            let y = mapper.pix_y(value)?.floor() + 0.5;

            frame.push_path(PathPrimitive {
                commands: vec![
                    PathCommand::MoveTo { x: plot_left, y },
                    PathCommand::LineTo { x: plot_right, y },
                ],
                stroke: Some(StrokeStyle::solid(1.0, self.style.grid_color)),
                fill: None,
            });

            frame.push_text(TextPrimitive::new(
                format_currency_abbrev(value),
                plot_left,
                y,
                self.style.font_size_px,
                self.style.label_color,
                TextHAlign::Left,
                TextBaseline::Bottom,
            ));
        }

        Ok(())
    }

    fn push_average_overlays(
        &self,
        frame: &mut RenderFrame,
        mapper: CoordinateMapper,
    ) -> ChartResult<()> {
        let points = self.visible_points();
        if points.is_empty() {
            return Ok(());
        }

        for period in &self.config.moving_average_periods {
            let averaged = moving_average(points, *period)?;
            let spline = CardinalSpline::fit(&averaged, self.config.tension)?;
            let curve = spline.rasterize(mapper)?;
            let polyline = curve.polyline();
            if polyline.len() < 2 {
                continue;
            }

            frame.push_path(PathPrimitive::stroked_polyline(
                &polyline,
                StrokeStyle::solid(1.0, self.style.moving_average_color),
            ));
        }

        Ok(())
    }

    fn push_main_curve(&self, frame: &mut RenderFrame, mapper: CoordinateMapper) -> ChartResult<()> {
        let points = self.visible_points();
        if points.is_empty() {
            return Ok(());
        }

        let spline = CardinalSpline::fit(points, self.config.tension)?;
        let curve = spline.rasterize(mapper)?;

        if let Some(fill_color) = self.style.fill {
            let polyline = curve.polyline();
            if polyline.len() >= 2 {
                let baseline_value = 0.0_f64.clamp(self.range.min_y(), self.range.max_y());
                let baseline = mapper.pix_y(baseline_value)?;

                let mut commands = Vec::with_capacity(polyline.len() + 3);
                commands.push(PathCommand::MoveTo {
                    x: polyline[0].0,
                    y: baseline,
                });
                for (x, y) in &polyline {
                    commands.push(PathCommand::LineTo { x: *x, y: *y });
                }
                let last_x = polyline[polyline.len() - 1].0;
                commands.push(PathCommand::LineTo {
                    x: last_x,
                    y: baseline,
                });

                frame.push_path(PathPrimitive {
                    commands,
                    stroke: None,
                    fill: Some(fill_color),
                });
            }
        }

        for run in split_strokes(&curve, &self.style.transitions) {
            if run.points.len() < 2 && curve.segments.len() > 1 {
                continue;
            }

            let color = self.style.palette[run.color_index % self.style.palette.len()];
            let stroke = StrokeStyle::solid(self.style.stroke_width, color);

            match self.style.dash {
                Some(pattern) => {
                    for dash_run in dash_polyline(&run.points, pattern) {
                        frame.push_path(PathPrimitive::stroked_polyline(&dash_run, stroke));
                    }
                }
                None if run.points.len() == 1 => {
                    // Single-point series: render the lone sample as a dot.
                    let (x, y) = run.points[0];
                    frame.push_path(PathPrimitive {
                        commands: vec![PathCommand::Arc {
                            center_x: x,
                            center_y: y,
                            radius: self.style.stroke_width,
                            start_angle: 0.0,
                            end_angle: TAU,
                        }],
                        stroke: None,
                        fill: Some(color),
                    });
                }
                None => {
                    frame.push_path(PathPrimitive::stroked_polyline(&run.points, stroke));
                }
            }
        }

        Ok(())
    }
}

impl ChartModel for LineChartModel<'_> {
    fn build_frame(&self) -> ChartResult<RenderFrame> {
        let mapper = self.mapper()?;
        let mut frame = RenderFrame::new(self.viewport);

        self.push_time_axis(&mut frame, mapper)?;
        self.push_value_axis(&mut frame, mapper)?;
        self.push_average_overlays(&mut frame, mapper)?;
        self.push_main_curve(&mut frame, mapper)?;

        debug!(
            paths = frame.paths.len(),
            texts = frame.texts.len(),
            points = self.visible_points().len(),
            "built line chart frame"
        );
        Ok(frame)
    }
}
