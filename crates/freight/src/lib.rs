//! Freight calculation domain.
//!
//! This crate contains the business rules shared by sales orders and sales
//! invoices: transport modes, dimension-row derivation and aggregation,
//! mode-keyed item pricing with INR normalization, and the fixed five-step
//! validation pipeline that ties them together. Pure deterministic logic —
//! no IO, no HTTP, no storage.

pub mod charges;
pub mod dimensions;
pub mod mode;
pub mod pipeline;

pub use charges::{ChargeItem, Chargeable, total_inr};
pub use dimensions::{DimensionRow, DimensionTotals};
pub use mode::TransportMode;
pub use pipeline::{ValidationOutcome, run_validation};
