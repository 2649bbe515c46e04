use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Host-facing engine configuration.
///
/// Serializable so applications can persist chart setup without inventing
/// their own format; unknown future fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Spline smoothness: 0 = loose, 1 = tight.
    #[serde(default = "default_tension")]
    pub tension: f64,
    /// Minimum angular size of a pie slice before it merges into `Other`,
    /// and the minimum angular clearance between placed pie labels.
    #[serde(default = "default_pie_tolerance_angle")]
    pub pie_tolerance_angle: f64,
    /// Trailing windows for moving-average overlay curves.
    #[serde(default)]
    pub moving_average_periods: Vec<u32>,
    /// Logarithmic Y mapping for line charts.
    #[serde(default)]
    pub log_y: bool,
}

fn default_tension() -> f64 {
    0.5
}

fn default_pie_tolerance_angle() -> f64 {
    PI / 16.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            tension: default_tension(),
            pie_tolerance_angle: default_pie_tolerance_angle(),
            moving_average_periods: Vec::new(),
            log_y: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChartConfigJsonContractV1 {
    schema_version: u32,
    config: ChartConfig,
}

impl ChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(ChartError::InvalidData(
                "config tension must be finite and within [0, 1]".to_owned(),
            ));
        }
        if !self.pie_tolerance_angle.is_finite() || self.pie_tolerance_angle < 0.0 {
            return Err(ChartError::InvalidData(
                "config pie tolerance angle must be finite and >= 0".to_owned(),
            ));
        }
        if self.moving_average_periods.iter().any(|period| *period == 0) {
            return Err(ChartError::InvalidData(
                "config moving average periods must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a versioned contract payload or a bare config.
    ///
    /// The contract is tried first: a bare config would also deserialize
    /// from a contract payload (unknown fields are ignored) and silently
    /// come back all-defaults.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ChartConfigJsonContractV1>(input) {
            if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config.validate()?;
            return Ok(payload.config);
        }

        let config: ChartConfig = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
