use core::str::FromStr;

use serde::{Deserialize, Serialize};

use freightflow_core::{DocumentId, DomainError, HeaderFields};
use freightflow_freight::{
    ChargeItem, Chargeable, DimensionRow, DimensionTotals, TransportMode, run_validation,
};
use freightflow_sales::SalesOrderId;

/// Sales invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesInvoiceId(pub DocumentId);

impl SalesInvoiceId {
    pub fn new(id: DocumentId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SalesInvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SalesInvoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// One charge line on a sales invoice.
///
/// Invoice lines created by conversion carry the source order-item id
/// (`so_detail`) and source order id (`sales_order`) for traceability;
/// lines entered directly on the invoice leave both unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub row_id: DocumentId,
    #[serde(default)]
    pub so_detail: Option<DocumentId>,
    #[serde(default)]
    pub sales_order: Option<SalesOrderId>,
    #[serde(flatten)]
    pub charge: ChargeItem,
}

impl InvoiceItem {
    /// A line entered directly on the invoice (no order linkage). The
    /// formula toggle starts off; the user opts in per row.
    pub fn new(charge: ChargeItem) -> Self {
        Self {
            row_id: DocumentId::new(),
            so_detail: None,
            sales_order: None,
            charge,
        }
    }
}

impl Chargeable for InvoiceItem {
    fn charge(&self) -> &ChargeItem {
        &self.charge
    }

    fn charge_mut(&mut self) -> &mut ChargeItem {
        &mut self.charge
    }
}

/// Sales invoice document. Same freight validation pass as the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoice {
    pub id: SalesInvoiceId,
    #[serde(default)]
    pub mode: TransportMode,
    #[serde(default)]
    pub header: HeaderFields,
    #[serde(default)]
    pub dimensions: Vec<DimensionRow>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(flatten)]
    pub totals: DimensionTotals,
    #[serde(default)]
    pub total_inr: f64,
}

impl SalesInvoice {
    pub fn new(id: SalesInvoiceId) -> Self {
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
    /// parent aggregates. Always succeeds.
    pub fn validate(&mut self) {
        let outcome = run_validation(&self.mode, &mut self.dimensions, &mut self.items);
        self.totals = outcome.totals;
        self.total_inr = outcome.total_inr;
    }
}
