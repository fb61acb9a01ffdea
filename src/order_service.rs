//! Read-only query surface over a fixed set of orders.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::config::LookupConfig;
use crate::domain::{Order, OrderId, OrderStatus, SearchResult};
use crate::error::OrderError;

/// The orders every default service starts with.
pub fn default_orders() -> Result<Vec<Order>, OrderError> {
    Ok(vec![
        Order::new(1, "Juan", Decimal::new(12050, 2), OrderStatus::Paid)?,
        Order::new(2, "Ana", Decimal::new(7500, 2), OrderStatus::Pending)?,
        Order::new(3, "Luis", Decimal::new(21030, 2), OrderStatus::Cancelled)?,
    ])
}

/// Owns the seeded orders and answers lookups against them.
///
/// The collection is never mutated after construction, so a service can be
/// shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: Vec<Order>,
    fallback_id: Option<OrderId>,
}

impl OrderService {
    /// Service seeded with [`default_orders`], falling back to the first order.
    pub fn new() -> Result<Self, OrderError> {
        Ok(Self::with_orders(default_orders()?, &LookupConfig::default()))
    }

    /// Seeds the service with `orders`, kept in the given order.
    ///
    /// The fallback id comes from `config.fallback_id`, or the first order's id
    /// when unset. Id uniqueness is the caller's responsibility.
    pub fn with_orders(orders: Vec<Order>, config: &LookupConfig) -> Self {
        let fallback_id = config
            .fallback_id
            .or_else(|| orders.first().map(Order::id));

        debug!(order_count = orders.len(), ?fallback_id, "Order service seeded");

        Self {
            orders,
            fallback_id,
        }
    }

    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn fallback_id(&self) -> Option<OrderId> {
        self.fallback_id
    }

    /// First order with the given id, in insertion order.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: OrderId) -> Option<&Order> {
        let order = self.orders.iter().find(|order| order.id() == id);

        match order {
            Some(order) => debug!(customer = %order.customer(), "Order found"),
            None => debug!("Order not found"),
        }

        order
    }

    /// Like [`find_by_id`](Self::find_by_id), but a miss is retried with the
    /// fallback id. `None` only when both lookups miss.
    pub fn find_by_id_with_fallback(&self, id: OrderId) -> Option<&Order> {
        self.find_by_id(id).or_else(|| {
            let fallback_id = self.fallback_id?;
            debug!(requested = id, fallback_id, "Using fallback order");
            self.find_by_id(fallback_id)
        })
    }

    pub fn points_for_status(&self, status: OrderStatus) -> u32 {
        status.points()
    }

    pub fn find_detail(&self, id: OrderId) -> SearchResult {
        self.find_by_id(id).cloned().into()
    }

    pub fn customer_of(&self, id: OrderId) -> Option<&str> {
        self.find_by_id(id).map(Order::customer)
    }
}
