use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::OrderId;

/// Errors that can occur while building or querying orders.
///
/// Lookup misses are not errors; they surface as `None` or
/// [`SearchResult::NotFound`](crate::domain::SearchResult::NotFound).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order {id} has a negative amount: {amount}")]
    NegativeAmount { id: OrderId, amount: Decimal },
    #[error("Invalid order id: {0}")]
    InvalidId(u64),
    #[error("Order {0} has an empty customer")]
    EmptyCustomer(OrderId),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
