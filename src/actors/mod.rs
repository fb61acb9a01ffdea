use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::LookupClient;
use crate::domain::{Order, OrderId, OrderStatus, SearchResult};
use crate::messages::{LookupRequest, ServiceResponse};
use crate::order_service::OrderService;

// =============================================================================
// LOOKUP SERVICE
// =============================================================================

/// Task that owns an [`OrderService`] and answers [`LookupRequest`]s.
///
/// Requests are handled one at a time in arrival order. The loop ends on
/// `Shutdown` or once every client has been dropped.
pub struct LookupService {
    receiver: mpsc::Receiver<LookupRequest>,
    orders: OrderService,
}

impl LookupService {
    pub fn new(orders: OrderService, buffer_size: usize) -> (Self, LookupClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, orders };
        let client = LookupClient::new(sender);
        (service, client)
    }

    #[instrument(name = "lookup_service", skip(self))]
    pub async fn run(mut self) {
        info!(order_count = self.orders.len(), "LookupService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LookupRequest::ListAll { respond_to } => {
                    self.handle_list_all(respond_to);
                }
                LookupRequest::FindById { id, respond_to } => {
                    self.handle_find_by_id(id, respond_to);
                }
                LookupRequest::FindByIdWithFallback { id, respond_to } => {
                    self.handle_find_by_id_with_fallback(id, respond_to);
                }
                LookupRequest::FindDetail { id, respond_to } => {
                    self.handle_find_detail(id, respond_to);
                }
                LookupRequest::PointsForStatus { status, respond_to } => {
                    self.handle_points_for_status(status, respond_to);
                }
                LookupRequest::Shutdown => {
                    info!("LookupService shutting down");
                    break;
                }
            }
        }
        info!("LookupService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_all(&self, respond_to: ServiceResponse<Vec<Order>>) {
        debug!("Processing list_all request");
        let _ = respond_to.send(self.orders.list_all().to_vec());
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_find_by_id(&self, id: OrderId, respond_to: ServiceResponse<Option<Order>>) {
        debug!("Processing find_by_id request");
        let _ = respond_to.send(self.orders.find_by_id(id).cloned());
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_find_by_id_with_fallback(&self, id: OrderId, respond_to: ServiceResponse<Option<Order>>) {
        debug!("Processing find_by_id_with_fallback request");
        let _ = respond_to.send(self.orders.find_by_id_with_fallback(id).cloned());
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_find_detail(&self, id: OrderId, respond_to: ServiceResponse<SearchResult>) {
        debug!("Processing find_detail request");
        let result = self.orders.find_detail(id);
        if let SearchResult::NotFound(message) = &result {
            info!(%message, "Detail lookup missed");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(status = %status), skip(self, respond_to))]
    fn handle_points_for_status(&self, status: OrderStatus, respond_to: ServiceResponse<u32>) {
        debug!("Processing points_for_status request");
        let _ = respond_to.send(self.orders.points_for_status(status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_stops_when_clients_drop() {
        let (service, client) = LookupService::new(OrderService::new().unwrap(), 4);
        let handle = tokio::spawn(service.run());

        assert_eq!(client.find_by_id(2).await.unwrap().map(|o| o.id()), Some(2));
        drop(client);

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_service_stops_on_shutdown() {
        let (service, client) = LookupService::new(OrderService::new().unwrap(), 4);
        let handle = tokio::spawn(service.run());

        client.shutdown().await.unwrap();
        handle.await.unwrap();

        assert!(client.list_all().await.is_err());
    }
}
