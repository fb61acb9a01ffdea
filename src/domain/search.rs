use super::Order;

pub const NOT_FOUND_MESSAGE: &str = "Order not found";

/// Outcome of a detail lookup. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Found(Order),
    NotFound(String),
}

impl SearchResult {
    pub fn not_found() -> Self {
        SearchResult::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn order(&self) -> Option<&Order> {
        match self {
            SearchResult::Found(order) => Some(order),
            SearchResult::NotFound(_) => None,
        }
    }

    pub fn into_order(self) -> Option<Order> {
        match self {
            SearchResult::Found(order) => Some(order),
            SearchResult::NotFound(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SearchResult::Found(_) => None,
            SearchResult::NotFound(message) => Some(message),
        }
    }
}

impl From<Option<Order>> for SearchResult {
    fn from(order: Option<Order>) -> Self {
        order.map_or_else(SearchResult::not_found, SearchResult::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;
    use rust_decimal::Decimal;

    #[test]
    fn test_found_exposes_order() {
        let order = Order::new(2, "Ana", Decimal::new(7500, 2), OrderStatus::Pending).unwrap();
        let result = SearchResult::from(Some(order.clone()));

        assert!(result.is_found());
        assert_eq!(result.order(), Some(&order));
        assert_eq!(result.message(), None);
        assert_eq!(result.into_order(), Some(order));
    }

    #[test]
    fn test_not_found_carries_message() {
        let result = SearchResult::from(None);

        assert!(!result.is_found());
        assert_eq!(result.order(), None);
        assert_eq!(result.message(), Some("Order not found"));
        assert_eq!(result, SearchResult::NotFound("Order not found".to_string()));
    }
}
