use std::env;
use std::time::Duration;

use crate::core::{AppError, Latency, Result};

/// Record store configuration: simulated latency and demo seeding
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub list_latency_ms: u64,
    pub find_latency_ms: u64,
    pub write_latency_ms: u64,
    pub seed_demo_data: bool,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Ok(StoreConfig {
            list_latency_ms: parse_ms("STORE_LIST_LATENCY_MS", "600")?,
            find_latency_ms: parse_ms("STORE_FIND_LATENCY_MS", "500")?,
            write_latency_ms: parse_ms("STORE_WRITE_LATENCY_MS", "800")?,
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid SEED_DEMO_DATA".to_string()))?,
        })
    }

    /// Zero-latency store with demo records, for tests
    pub fn instant() -> Self {
        Self {
            list_latency_ms: 0,
            find_latency_ms: 0,
            write_latency_ms: 0,
            seed_demo_data: true,
        }
    }

    pub fn latency(&self) -> Latency {
        Latency {
            list: Duration::from_millis(self.list_latency_ms),
            find: Duration::from_millis(self.find_latency_ms),
            write: Duration::from_millis(self.write_latency_ms),
        }
    }
}

fn parse_ms(key: &str, default: &str) -> Result<u64> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", key)))
}
