//! # Order Lookup
//!
//! Read-only lookups over a fixed, in-memory set of orders.
//!
//! - **Domain types** - [`Order`], [`OrderStatus`] and the [`SearchResult`] union
//! - **Core** - [`OrderService`], a synchronous query surface over the seeded orders
//! - **Service task** - [`LookupService`] runs an `OrderService` behind a channel
//!   and [`LookupClient`] is the cloneable handle callers use from async code
//! - **System** - [`LookupSystem`] starts and stops the task; [`setup_tracing`]
//!   configures logging
//!
//! ```no_run
//! # async fn demo() -> Result<(), order_lookup::OrderError> {
//! use order_lookup::{LookupConfig, LookupSystem};
//!
//! let system = LookupSystem::new(&LookupConfig::default())?;
//! let detail = system.client.find_detail(99).await?;
//! assert!(!detail.is_found());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod order_service;
pub mod report;

#[cfg(test)]
mod mock_framework;

pub use actors::LookupService;
pub use app_system::{setup_tracing, LookupSystem};
pub use clients::LookupClient;
pub use config::LookupConfig;
pub use domain::{Order, OrderId, OrderStatus, SearchResult};
pub use error::OrderError;
pub use order_service::{default_orders, OrderService};
pub use report::OrderSummary;
