//! Sales order document module.
//!
//! The order carries the freight dimension table and charge items; its
//! `validate` hook delegates to the shared freight pipeline before the host
//! persists the record.

pub mod directory;
pub mod order;

pub use directory::SalesOrderDirectory;
pub use order::{OrderItem, SalesOrder, SalesOrderId};
