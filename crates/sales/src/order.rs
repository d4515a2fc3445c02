use core::str::FromStr;

use serde::{Deserialize, Serialize};

use freightflow_core::{DocumentId, DomainError, HeaderFields};
use freightflow_freight::{
    ChargeItem, Chargeable, DimensionRow, DimensionTotals, TransportMode, run_validation,
};

/// Sales order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesOrderId(pub DocumentId);

impl SalesOrderId {
    pub fn new(id: DocumentId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SalesOrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SalesOrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// One charge line on a sales order.
///
/// `row_id` is the linkage anchor the invoice mapper records as `so_detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub row_id: DocumentId,
    #[serde(flatten)]
    pub charge: ChargeItem,
}

impl OrderItem {
    pub fn new(charge: ChargeItem) -> Self {
        Self {
            row_id: DocumentId::new(),
            charge,
        }
    }
}

impl Chargeable for OrderItem {
    fn charge(&self) -> &ChargeItem {
        &self.charge
    }

    fn charge_mut(&mut self) -> &mut ChargeItem {
        &mut self.charge
    }
}

/// Sales order document.
///
/// A plain record shape mirroring the host's document: transport mode,
/// drift-tolerant header fields, the two child tables, and the parent
/// aggregates republished on every validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: SalesOrderId,
    #[serde(default)]
    pub mode: TransportMode,
    #[serde(default)]
    pub header: HeaderFields,
    #[serde(default)]
    pub dimensions: Vec<DimensionRow>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(flatten)]
    pub totals: DimensionTotals,
    #[serde(default)]
    pub total_inr: f64,
}

impl SalesOrder {
    pub fn new(id: SalesOrderId) -> Self {
        Self {
            id,
            mode: TransportMode::default(),
            header: HeaderFields::new(),
            dimensions: Vec::new(),
            items: Vec::new(),
            totals: DimensionTotals::default(),
            total_inr: 0.0,
        }
    }

    /// Pre-save validation hook: run the freight pipeline and republish the
    /// parent aggregates. Always succeeds; derived fields are overwritten
    /// unconditionally.
    pub fn validate(&mut self) {
        let outcome = run_validation(&self.mode, &mut self.dimensions, &mut self.items);
        self.totals = outcome.totals;
        self.total_inr = outcome.total_inr;
    }
}
