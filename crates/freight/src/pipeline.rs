//! The validation pipeline run on every save attempt of a freight document.

use crate::charges::{self, Chargeable};
use crate::dimensions::{DimensionRow, DimensionTotals};
use crate::mode::TransportMode;

/// Parent-level values published by a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationOutcome {
    pub totals: DimensionTotals,
    pub total_inr: f64,
}

/// Run the fixed five-step pass over a document's child rows:
///
/// 1. dimension-row derivation,
/// 2. parent dimension aggregation,
/// 3. item pricing (reads the step-2 aggregates),
/// 4. rate sync (reads the step-3 INR totals),
/// 5. parent INR total.
///
/// The order is load-bearing and must not change. Running the pass twice on
/// unchanged input yields identical output; it never fails.
pub fn run_validation<C: Chargeable>(
    mode: &TransportMode,
    dimensions: &mut [DimensionRow],
    items: &mut [C],
) -> ValidationOutcome {
    let span = tracing::debug_span!(
        "freight_validation",
        mode = %mode,
        dimension_rows = dimensions.len(),
        items = items.len(),
    );
    let _guard = span.enter();

    for row in dimensions.iter_mut() {
        row.recompute(mode);
    }

    let totals = DimensionTotals::from_rows(dimensions);

    for item in items.iter_mut() {
        item.charge_mut().reprice(mode, &totals);
    }

    for item in items.iter_mut() {
        item.charge_mut().sync_rate();
    }

    let total_inr = charges::total_inr(items);

    tracing::debug!(
        total_cbm = totals.total_cbm,
        total_weight = totals.total_weight,
        total_inr,
        "published freight aggregates"
    );

    ValidationOutcome { totals, total_inr }
}
