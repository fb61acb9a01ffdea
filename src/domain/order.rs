use std::fmt;

use rust_decimal::Decimal;

use crate::error::OrderError;

pub type OrderId = u64;

/// Lifecycle state of an order.
///
/// The set is closed: [`OrderStatus::points`] matches every variant, so adding
/// a status forces a decision on its points value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::Paid, OrderStatus::Cancelled];

    /// Loyalty points awarded for an order in this state.
    pub fn points(self) -> u32 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::Paid => 5,
            OrderStatus::Cancelled => 0,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// Represents a customer order.
///
/// Orders are immutable once built. [`Order::new`] is the only constructor and
/// rejects a zero id, a blank customer and a negative amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    customer: String,
    amount: Decimal,
    status: OrderStatus,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer: impl Into<String>,
        amount: Decimal,
        status: OrderStatus,
    ) -> Result<Self, OrderError> {
        if id == 0 {
            return Err(OrderError::InvalidId(id));
        }

        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(OrderError::EmptyCustomer(id));
        }

        // Compared against ZERO rather than checking the sign bit so -0 passes.
        if amount < Decimal::ZERO {
            return Err(OrderError::NegativeAmount { id, amount });
        }

        Ok(Self {
            id,
            customer,
            amount,
            status,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} [{}] {} ({})",
            self.id, self.customer, self.amount, self.status
        )
    }
}
