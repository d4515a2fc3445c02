//! Sales invoice document module.
//!
//! Mirrors the sales order's freight validation and adds the one-shot
//! order-to-invoice conversion: a declarative header field map, verbatim
//! dimension-row copies, and per-item linkage back to the source order.

pub mod from_order;
pub mod invoice;

pub use from_order::{HEADER_FIELD_MAP, make_sales_invoice};
pub use invoice::{InvoiceItem, SalesInvoice, SalesInvoiceId};
