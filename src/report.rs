//! Summary figures a caller prints after listing orders.

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub count: usize,
    pub total: Decimal,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            count: orders.len(),
            total: orders.iter().map(Order::amount).sum(),
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== REPORT ====")?;
        writeln!(f, "Total orders: {}", self.count)?;
        write!(f, "Total amount: {:.2}", self.total.round_dp(2))
    }
}
