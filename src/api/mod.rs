mod chart_model;
mod config;
mod format;
mod line_chart;
mod pie_chart;

pub use chart_model::ChartModel;
pub use config::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfig};
pub use format::{
    format_count, format_currency, format_currency_abbrev, format_slice_value, truncate_label,
};
pub use line_chart::{LineChartModel, LineSeriesStyle};
pub use pie_chart::{PieChartModel, PieChartStyle};
