//! Package dimension rows and their parent aggregates.

use freightflow_core::num;
use serde::{Deserialize, Serialize};

use crate::mode::TransportMode;

/// One package line: user-entered measurements plus the two derived fields.
///
/// Inputs are optional; derivation treats missing length/breadth/height and
/// weight as 0 and a missing box count as 1. Derived fields are overwritten
/// on every recompute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionRow {
    pub length_cm: Option<f64>,
    pub breadth_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub no_of_boxes: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Derived: volume in cubic meters.
    #[serde(default)]
    pub cbm: f64,
    /// Derived: volumetric weight via the mode-dependent divisor.
    #[serde(default)]
    pub volume_weight: f64,
}

impl DimensionRow {
    /// Recompute the derived fields from this row's own inputs and the
    /// parent's transport mode. Never fails.
    pub fn recompute(&mut self, mode: &TransportMode) {
        let l = num::or_zero(self.length_cm);
        let b = num::or_zero(self.breadth_cm);
        let h = num::or_zero(self.height_cm);
        let boxes = num::or_one(self.no_of_boxes);

        self.cbm = (l * b * h / 1_000_000.0) * boxes;
        self.volume_weight = (l * b * h / mode.volumetric_divisor()) * boxes;
    }
}

/// Parent-level dimension aggregates, published on every validation pass.
///
/// `totals_in_cbm` and `gross_weight` are legacy field names the host still
/// reads; they always carry the same values as `total_cbm` and
/// `total_weight`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionTotals {
    pub totals_in_cbm: f64,
    pub gross_weight: f64,
    pub total_cbm: f64,
    pub total_weight: f64,
    pub total_volume_weight: f64,
    pub total_no_of_boxes: f64,
}

impl DimensionTotals {
    /// Sum the row-level fields. The CBM sum is rounded to 2 decimals; a
    /// missing box count contributes 0 here (unlike row derivation, where it
    /// defaults to 1).
    pub fn from_rows(rows: &[DimensionRow]) -> Self {
        let mut total_cbm = 0.0;
        let mut total_weight = 0.0;
        let mut total_volume_weight = 0.0;
        let mut total_no_of_boxes = 0.0;

        for row in rows {
            total_cbm += row.cbm;
            total_weight += num::or_zero(row.weight_kg);
            total_volume_weight += row.volume_weight;
            total_no_of_boxes += num::or_zero(row.no_of_boxes);
        }

        let total_cbm = num::round2(total_cbm);

        Self {
            totals_in_cbm: total_cbm,
            gross_weight: total_weight,
            total_cbm,
            total_weight,
            total_volume_weight,
            total_no_of_boxes,
        }
    }
}
