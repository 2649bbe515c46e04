pub mod mapper;
pub mod pie;
pub mod pie_labels;
pub mod primitives;
pub mod range;
pub mod series;
pub mod spline;
pub mod stroke;
pub mod time_ticks;
pub mod types;
pub mod value_ticks;

pub use mapper::CoordinateMapper;
pub use pie::{OTHER_SLICE_LABEL, PieDataset, PieSlice, SliceValueKind, reduce};
pub use pie_labels::{
    LabelAlign, LabelBaseline, LabelPlacement, PIE_START_ANGLE, PieGeometry, PieLayout, PieSector,
    place_labels,
};
pub use range::{ChartRange, RangeContinuity};
pub use series::{moving_average, nearest_point_by_x, offset_series};
pub use spline::{CardinalSpline, Curve, SplineSegment, StrokeRun, split_strokes};
pub use stroke::{DashPattern, dash_polyline};
pub use time_ticks::{Tick, TickScale, time_series_ticks};
pub use types::{DataPoint, Padding, Viewport};
pub use value_ticks::{nice_tick_step, snap_axis_range};
