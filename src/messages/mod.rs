use tokio::sync::oneshot;

use crate::domain::{Order, OrderId, OrderStatus, SearchResult};

/// Lookups never fail inside the service, so responders carry bare values.
pub type ServiceResponse<T> = oneshot::Sender<T>;

/// Typed messages for the lookup service. Each variant includes its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum LookupRequest {
    ListAll {
        respond_to: ServiceResponse<Vec<Order>>,
    },
    FindById {
        id: OrderId,
        respond_to: ServiceResponse<Option<Order>>,
    },
    FindByIdWithFallback {
        id: OrderId,
        respond_to: ServiceResponse<Option<Order>>,
    },
    FindDetail {
        id: OrderId,
        respond_to: ServiceResponse<SearchResult>,
    },
    PointsForStatus {
        status: OrderStatus,
        respond_to: ServiceResponse<u32>,
    },
    Shutdown,
}
