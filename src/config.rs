//! Runtime configuration for the lookup service.

use std::env;
use std::str::FromStr;

use crate::domain::OrderId;
use crate::error::OrderError;

pub const FALLBACK_ID_VAR: &str = "ORDER_LOOKUP_FALLBACK_ID";
pub const BUFFER_SIZE_VAR: &str = "ORDER_LOOKUP_BUFFER_SIZE";
pub const LOG_FILTER_VAR: &str = "ORDER_LOOKUP_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Id substituted by the fallback lookup. `None` means the first seeded order.
    pub fallback_id: Option<OrderId>,
    /// Capacity of the request channel in front of the service task.
    pub buffer_size: usize,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            fallback_id: None,
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl LookupConfig {
    /// Defaults overridden by `ORDER_LOOKUP_*` environment variables.
    pub fn from_env() -> Result<Self, OrderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OrderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(FALLBACK_ID_VAR) {
            config.fallback_id = Some(parse_var(FALLBACK_ID_VAR, &raw)?);
        }
        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            let size: usize = parse_var(BUFFER_SIZE_VAR, &raw)?;
            if size == 0 {
                return Err(OrderError::InvalidConfig(format!(
                    "{} must be greater than zero",
                    BUFFER_SIZE_VAR
                )));
            }
            config.buffer_size = size;
        }
        if let Some(raw) = lookup(LOG_FILTER_VAR) {
            config.log_filter = raw;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, OrderError> {
    raw.trim()
        .parse()
        .map_err(|_| OrderError::InvalidConfig(format!("{}: cannot parse {:?}", key, raw)))
}
