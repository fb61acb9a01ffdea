use tracing::{info, warn, Instrument};

use order_lookup::{setup_tracing, LookupConfig, LookupSystem, OrderError, OrderSummary, SearchResult};

#[tokio::main]
async fn main() -> Result<(), OrderError> {
    let config = LookupConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting order lookup demo");

    let system = LookupSystem::new(&config)?;
    let client = system.client.clone();

    let span = tracing::info_span!("listing");
    let orders = async {
        let orders = client.list_all().await?;
        for order in &orders {
            info!(%order, "Listed order");
        }
        Ok::<_, OrderError>(orders)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("lookups");
    async {
        match client.find_by_id(1).await? {
            Some(order) => info!(%order, "Found order"),
            None => warn!(order_id = 1, "Order not found"),
        }

        if let Some(order) = client.find_by_id_with_fallback(99).await? {
            info!(%order, "Fallback result");
        }

        if let Some(customer) = client.find_by_id(1).await?.map(|o| o.customer().to_string()) {
            info!(%customer, "Customer of order 1");
        }

        match client.find_detail(99).await? {
            SearchResult::Found(order) => info!(%order, "Detail"),
            SearchResult::NotFound(message) => warn!(%message, "Detail lookup failed"),
        }

        Ok::<_, OrderError>(())
    }
    .instrument(span)
    .await?;

    let summary = OrderSummary::from_orders(&orders);
    info!(count = summary.count, total = %summary.total, "Summary computed");
    println!("{}", summary);

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
