use std::collections::HashMap;

use freightflow_core::{DomainError, DomainResult};

use crate::order::{SalesOrder, SalesOrderId};

/// In-memory sales order lookup keyed by id.
///
/// The invoice conversion entry point takes a source record identifier, so
/// callers need a by-id seam; the host's storage sits behind this shape.
#[derive(Debug, Default)]
pub struct SalesOrderDirectory {
    orders: HashMap<SalesOrderId, SalesOrder>,
}

impl SalesOrderDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an order. Ids are unique; re-registering one is a conflict.
    pub fn insert(&mut self, order: SalesOrder) -> DomainResult<()> {
        if self.orders.contains_key(&order.id) {
            return Err(DomainError::conflict(format!(
                "sales order {} already registered",
                order.id
            )));
        }
        self.orders.insert(order.id, order);
        Ok(())
    }

    pub fn get(&self, id: SalesOrderId) -> Option<&SalesOrder> {
        self.orders.get(&id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
