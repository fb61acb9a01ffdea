use tracing::{error, info, instrument};

use crate::actors::LookupService;
use crate::clients::LookupClient;
use crate::config::LookupConfig;
use crate::error::OrderError;
use crate::order_service::{default_orders, OrderService};

/// Starts the lookup service and keeps its task handle for shutdown.
pub struct LookupSystem {
    pub client: LookupClient,
    handle: tokio::task::JoinHandle<()>,
}

impl LookupSystem {
    /// Seeds the default orders and spawns the service.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(name = "lookup_system", skip(config))]
    pub fn new(config: &LookupConfig) -> Result<Self, OrderError> {
        let orders = OrderService::with_orders(default_orders()?, config);
        Ok(Self::start(orders, config.buffer_size))
    }

    pub fn start(orders: OrderService, buffer_size: usize) -> Self {
        info!(buffer_size, "Starting lookup system");

        let (service, client) = LookupService::new(orders, buffer_size);
        let handle = tokio::spawn(service.run());

        Self { client, handle }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), OrderError> {
        info!("Shutting down lookup system");

        // The service may already be gone if every other client was dropped.
        let _ = self.client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service task failed");
            return Err(OrderError::ActorCommunication(format!("Service task failed: {}", e)));
        }

        info!("Lookup system shutdown complete");
        Ok(())
    }
}
