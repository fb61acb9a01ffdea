mod macros;

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Order, OrderId, OrderStatus, SearchResult};
use crate::error::OrderError;
use crate::messages::LookupRequest;
use macros::client_method;

/// Cloneable handle onto a running [`LookupService`](crate::actors::LookupService).
#[derive(Clone)]
pub struct LookupClient {
    sender: mpsc::Sender<LookupRequest>,
}

impl LookupClient {
    pub fn new(sender: mpsc::Sender<LookupRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown request");
        self.sender
            .send(LookupRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunication("Service closed".to_string()))
    }
}

client_method!(LookupClient => fn list_all() -> Vec<Order> as LookupRequest::ListAll);
client_method!(LookupClient => fn find_by_id(id: OrderId) -> Option<Order> as LookupRequest::FindById);
client_method!(LookupClient => fn find_by_id_with_fallback(id: OrderId) -> Option<Order> as LookupRequest::FindByIdWithFallback);
client_method!(LookupClient => fn find_detail(id: OrderId) -> SearchResult as LookupRequest::FindDetail);
client_method!(LookupClient => fn points_for_status(status: OrderStatus) -> u32 as LookupRequest::PointsForStatus);
