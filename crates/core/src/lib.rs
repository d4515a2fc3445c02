//! `freightflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the error model, strongly-typed document identifiers, the
//! host-style numeric coercions, and the loosely-typed header field values
//! consumed by the drift-tolerant conversion mapper.

pub mod error;
pub mod field;
pub mod id;
pub mod num;

pub use error::{DomainError, DomainResult};
pub use field::{FieldValue, HeaderFields, copy_mapped_fields};
pub use id::DocumentId;
