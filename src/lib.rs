//! ledger-chart: chart geometry engine for personal-finance dashboards.
//!
//! The crate computes what to draw, never how to draw it: balance and
//! fund-history curves, calendar-aligned time axes, and cost-breakdown pies
//! all come out as declarative [`render::RenderFrame`] scenes. Translating a
//! frame onto a concrete surface is adapter work owned by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartModel, LineChartModel, PieChartModel};
pub use error::{ChartError, ChartResult, RangeError};
