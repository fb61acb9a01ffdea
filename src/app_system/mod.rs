//! System orchestration, startup, and shutdown logic.

pub mod lookup_system;
pub mod tracing;

pub use lookup_system::*;
pub use self::tracing::*;
