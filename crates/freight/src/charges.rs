//! Charge items: mode-keyed pricing, INR normalization, rate sync.

use freightflow_core::num;
use serde::{Deserialize, Serialize};

use crate::dimensions::DimensionTotals;
use crate::mode::TransportMode;

/// Pricing fields of an item row.
///
/// `total` is derived when `formula` is on and a pricing rule exists for the
/// parent's mode; otherwise it is whatever the user entered. `total_value`
/// and `total_in_inr` are always recomputed and always equal — the host
/// consumes both field names, so the duplication must be preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChargeItem {
    pub custom_rate: Option<f64>,
    pub exchange_rate: Option<f64>,
    /// Off for freshly created rows; the user opts into formula pricing.
    #[serde(default)]
    pub formula: bool,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub total_in_inr: f64,
    /// The host's native rate field, conditionally overwritten by
    /// [`ChargeItem::sync_rate`].
    #[serde(default)]
    pub rate: f64,
}

impl ChargeItem {
    /// Recompute this item's totals against the parent's mode and published
    /// dimension aggregates.
    ///
    /// Modes without a pricing rule leave `total` untouched even when
    /// `formula` is on — the host expects a silent skip, not an error.
    pub fn reprice(&mut self, mode: &TransportMode, totals: &DimensionTotals) {
        let user_rate = num::or_zero(self.custom_rate);
        let exchange_rate = num::or_one(self.exchange_rate);

        if self.formula {
            if mode.is_sea_lcl() {
                self.total = totals.total_cbm * user_rate;
            } else if mode.is_air() {
                let chargeable_weight = totals.total_weight.max(totals.total_volume_weight);
                self.total = chargeable_weight * user_rate;
            } else {
                tracing::debug!(mode = %mode, "no pricing rule for mode; keeping entered total");
            }
        }

        self.total_value = self.total * exchange_rate;
        self.total_in_inr = self.total_value;
    }

    /// Push the INR total into the host's native `rate` field so the host's
    /// own totals and reports stay correct. A zero total leaves the existing
    /// rate alone; quantity is never touched.
    pub fn sync_rate(&mut self) {
        if self.total_in_inr != 0.0 {
            self.rate = self.total_in_inr;
        }
    }
}

/// Access to the pricing fields of an item row.
///
/// Document crates wrap [`ChargeItem`] with their own linkage fields; the
/// validation pipeline reaches the pricing fields through this trait.
pub trait Chargeable {
    fn charge(&self) -> &ChargeItem;
    fn charge_mut(&mut self) -> &mut ChargeItem;
}

impl Chargeable for ChargeItem {
    fn charge(&self) -> &ChargeItem {
        self
    }

    fn charge_mut(&mut self) -> &mut ChargeItem {
        self
    }
}

/// Parent INR total: the full sum over item rows, recomputed every pass.
pub fn total_inr<C: Chargeable>(items: &[C]) -> f64 {
    items.iter().map(|item| item.charge().total_in_inr).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(cbm: f64, weight: f64, volume_weight: f64) -> DimensionTotals {
        DimensionTotals {
            totals_in_cbm: cbm,
            gross_weight: weight,
            total_cbm: cbm,
            total_weight: weight,
            total_volume_weight: volume_weight,
            total_no_of_boxes: 0.0,
        }
    }

    fn formula_item(rate: f64) -> ChargeItem {
        ChargeItem {
            custom_rate: Some(rate),
            formula: true,
            ..ChargeItem::default()
        }
    }

    #[test]
    fn sea_lcl_prices_by_total_cbm() {
        let mut item = formula_item(2.0);
        item.reprice(&TransportMode::SeaLclImport, &totals(10.0, 0.0, 0.0));
        assert_eq!(item.total, 20.0);
    }

    #[test]
    fn air_prices_by_chargeable_weight() {
        let mut item = formula_item(3.0);
        item.reprice(&TransportMode::AirImport, &totals(0.0, 50.0, 70.0));
        // chargeable weight = max(50, 70) = 70
        assert_eq!(item.total, 210.0);
    }

    #[test]
    fn unpriced_mode_keeps_entered_total_even_with_formula_on() {
        let mut item = formula_item(9.0);
        item.total = 500.0;
        item.reprice(&TransportMode::CourierImport, &totals(10.0, 50.0, 70.0));
        assert_eq!(item.total, 500.0);

        item.reprice(
            &TransportMode::Other("ROAD - FTL".into()),
            &totals(10.0, 50.0, 70.0),
        );
        assert_eq!(item.total, 500.0);
    }

    #[test]
    fn manual_total_stands_when_formula_is_off() {
        let mut item = ChargeItem {
            custom_rate: Some(4.0),
            total: 123.0,
            ..ChargeItem::default()
        };
        item.reprice(&TransportMode::SeaLclImport, &totals(10.0, 0.0, 0.0));
        assert_eq!(item.total, 123.0);
        assert_eq!(item.total_value, 123.0);
    }

    #[test]
    fn inr_fields_are_always_equal_and_use_exchange_rate() {
        let mut item = formula_item(2.0);
        item.exchange_rate = Some(82.5);
        item.reprice(&TransportMode::SeaLclExport, &totals(10.0, 0.0, 0.0));

        assert_eq!(item.total_value, 20.0 * 82.5);
        assert_eq!(item.total_in_inr, item.total_value);
    }

    #[test]
    fn missing_exchange_rate_defaults_to_one() {
        let mut item = ChargeItem {
            total: 75.0,
            ..ChargeItem::default()
        };
        item.reprice(&TransportMode::default(), &totals(0.0, 0.0, 0.0));
        assert_eq!(item.total_in_inr, 75.0);
    }

    #[test]
    fn zero_exchange_rate_defaults_to_one() {
        // Hosts write an empty exchange-rate field as 0; a zero must not
        // wipe out the manual total.
        let mut item = ChargeItem {
            total: 100.0,
            exchange_rate: Some(0.0),
            ..ChargeItem::default()
        };
        item.reprice(&TransportMode::default(), &totals(0.0, 0.0, 0.0));
        assert_eq!(item.total_value, 100.0);
        assert_eq!(item.total_in_inr, 100.0);
    }

    #[test]
    fn sync_rate_skips_zero_totals() {
        let mut item = ChargeItem {
            rate: 40.0,
            ..ChargeItem::default()
        };
        item.sync_rate();
        assert_eq!(item.rate, 40.0);

        item.total_in_inr = 150.0;
        item.sync_rate();
        assert_eq!(item.rate, 150.0);
    }

    #[test]
    fn total_inr_sums_all_items() {
        let items = vec![
            ChargeItem {
                total_in_inr: 100.0,
                ..ChargeItem::default()
            },
            ChargeItem {
                total_in_inr: 250.5,
                ..ChargeItem::default()
            },
        ];
        assert_eq!(total_inr(&items), 350.5);
    }
}
