//! Pie dataset model and small-slice reduction.

use std::f64::consts::TAU;

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

pub const OTHER_SLICE_LABEL: &str = "Other";

/// How slice values should be presented: monetary cost or a plain count.
///
/// Resolved once at dataset construction; draw code never re-inspects it
/// beyond formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SliceValueKind {
    #[default]
    Cost,
    Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: f64) -> ChartResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(
                "pie slice value must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            label: label.into(),
            value,
        })
    }

    /// Builds a slice from an exact monetary amount.
    pub fn from_decimal(label: impl Into<String>, amount: Decimal) -> ChartResult<Self> {
        let label = label.into();
        let value = decimal_to_f64(amount, "slice amount")?;
        Self::new(label, value)
    }
}

/// An ordered set of slices plus the pre-reduction value total.
///
/// `total` feeds percentage math and is never altered by reduction, so
/// callers can still show exact shares after small slices merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieDataset {
    pub slices: Vec<PieSlice>,
    pub total: f64,
    pub value_kind: SliceValueKind,
}

impl PieDataset {
    /// Wraps pre-sorted slices, computing the total.
    pub fn new(slices: Vec<PieSlice>, value_kind: SliceValueKind) -> ChartResult<Self> {
        for pair in slices.windows(2) {
            if pair[1].value > pair[0].value {
                return Err(ChartError::InvalidData(
                    "pie slices must be sorted descending by value".to_owned(),
                ));
            }
        }

        let total = slices.iter().map(|slice| slice.value).sum();
        Ok(Self {
            slices,
            total,
            value_kind,
        })
    }

    #[must_use]
    pub fn value_sum(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

/// Merges negligible slices into a synthetic `Other` bucket.
///
/// `tolerance_angle` is the minimum angular size a slice must subtend, so
/// the value-fraction threshold is `tolerance_angle / 2π`. The smallest
/// slices are popped into the bucket; the largest slice is never merged,
/// which keeps a dataset where everything is below threshold from collapsing
/// to a bare `Other`. The bucket is re-ranked like any other slice.
///
/// A dataset with `total == 0` is returned unchanged: reduction would divide
/// by zero, and an empty pie has nothing worth merging anyway.
pub fn reduce(dataset: &PieDataset, tolerance_angle: f64) -> ChartResult<PieDataset> {
    if !tolerance_angle.is_finite() || tolerance_angle < 0.0 {
        return Err(ChartError::InvalidData(
            "pie tolerance angle must be finite and >= 0".to_owned(),
        ));
    }

    if dataset.total == 0.0 {
        return Ok(dataset.clone());
    }

    let threshold = tolerance_angle / TAU;

    let mut slices = dataset.slices.clone();
    let mut other = 0.0;

    while slices.len() > 1 {
        let smallest = &slices[slices.len() - 1];
        if smallest.value / dataset.total >= threshold {
            break;
        }
        other += slices.pop().map(|slice| slice.value).unwrap_or_default();
    }

    if other > 0.0 {
        debug!(other, merged = dataset.slices.len() - slices.len(), "reduced pie tail");
        slices.push(PieSlice {
            label: OTHER_SLICE_LABEL.to_owned(),
            value: other,
        });
        slices.sort_by_key(|slice| std::cmp::Reverse(OrderedFloat(slice.value)));
    }

    Ok(PieDataset {
        slices,
        total: dataset.total,
        value_kind: dataset.value_kind,
    })
}
