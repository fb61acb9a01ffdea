//! # Mock Framework
//!
//! Utilities for testing [`LookupClient`] without a running service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_find_by_id`] to assert on what the
//! client sent and reply through the captured responder.

use tokio::sync::mpsc;

use crate::clients::LookupClient;
use crate::domain::{Order, OrderId, OrderStatus, SearchResult};
use crate::messages::{LookupRequest, ServiceResponse};

pub fn create_mock_client(buffer_size: usize) -> (LookupClient, mpsc::Receiver<LookupRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LookupClient::new(sender), receiver)
}

/// Next message must be a ListAll request
pub async fn expect_list_all(
    receiver: &mut mpsc::Receiver<LookupRequest>,
) -> Option<ServiceResponse<Vec<Order>>> {
    match receiver.recv().await {
        Some(LookupRequest::ListAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be a FindById request
pub async fn expect_find_by_id(
    receiver: &mut mpsc::Receiver<LookupRequest>,
) -> Option<(OrderId, ServiceResponse<Option<Order>>)> {
    match receiver.recv().await {
        Some(LookupRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_find_detail(
    receiver: &mut mpsc::Receiver<LookupRequest>,
) -> Option<(OrderId, ServiceResponse<SearchResult>)> {
    match receiver.recv().await {
        Some(LookupRequest::FindDetail { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_points_for_status(
    receiver: &mut mpsc::Receiver<LookupRequest>,
) -> Option<(OrderStatus, ServiceResponse<u32>)> {
    match receiver.recv().await {
        Some(LookupRequest::PointsForStatus { status, respond_to }) => Some((status, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_client_sends_find_by_id() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.find_by_id(2).await });

        let (id, responder) = expect_find_by_id(&mut receiver).await.expect("Expected FindById request");
        assert_eq!(id, 2);
        let order = Order::new(2, "Ana", Decimal::new(7500, 2), OrderStatus::Pending).unwrap();
        responder.send(Some(order.clone())).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Ok(Some(order)));
    }

    #[tokio::test]
    async fn test_client_sends_points_for_status() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.points_for_status(OrderStatus::Paid).await });

        let (status, responder) = expect_points_for_status(&mut receiver).await.expect("Expected PointsForStatus request");
        assert_eq!(status, OrderStatus::Paid);
        responder.send(5).unwrap();

        assert_eq!(task.await.unwrap(), Ok(5));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.find_detail(99).await });

        let (id, responder) = expect_find_detail(&mut receiver).await.expect("Expected FindDetail request");
        assert_eq!(id, 99);
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(OrderError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_closed_channel_is_a_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert!(matches!(client.list_all().await, Err(OrderError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_client_sends_list_all() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.list_all().await });

        let responder = expect_list_all(&mut receiver).await.expect("Expected ListAll request");
        responder.send(Vec::new()).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Vec::new()));
    }
}
