// In-memory record store
//
// Holds the session's authoritative collection for one record type behind the
// Repository trait. Every operation first waits out its simulated latency, the
// same delays the dashboard's mock services used, then takes the lock.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::calendar::Calendar;
use crate::core::traits::{Entity, Repository};
use crate::core::{AppError, Result};

/// Simulated round-trip delays per operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub find: Duration,
    pub write: Duration,
}

impl Latency {
    /// No delay at all (tests, benchmarks)
    pub const fn instant() -> Self {
        Self {
            list: Duration::ZERO,
            find: Duration::ZERO,
            write: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(600),
            find: Duration::from_millis(500),
            write: Duration::from_millis(800),
        }
    }
}

/// Vec-backed implementation of [`Repository`]
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
    latency: Latency,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new(latency: Latency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Start from an existing collection (seed data), kept in the given order
    pub fn with_records(records: Vec<T>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn generate_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryStore<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        self.simulate(self.latency.write).await;

        entity.assign_id(Self::generate_id());
        entity.touch(Calendar::now());

        let mut records = self.records.write().await;
        records.insert(0, entity.clone());

        tracing::debug!(kind = T::KIND, id = ?entity.id(), total = records.len(), "Record created");
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        self.simulate(self.latency.find).await;

        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn update(&self, id: &str, mut entity: T) -> Result<T> {
        self.simulate(self.latency.write).await;

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| AppError::not_found(format!("{} {}", T::KIND, id)))?;

        entity.assign_id(id.to_string());
        entity.touch(Calendar::now());
        *slot = entity.clone();

        tracing::debug!(kind = T::KIND, id = %id, "Record updated");
        Ok(entity)
    }

    async fn upsert(&self, mut entity: T) -> Result<T> {
        self.simulate(self.latency.write).await;

        let now = Calendar::now();
        let mut records = self.records.write().await;

        if let Some(id) = entity.id().map(str::to_string) {
            if let Some(slot) = records.iter_mut().find(|r| r.id() == Some(id.as_str())) {
                entity.touch(now);
                *slot = entity.clone();
                tracing::debug!(kind = T::KIND, id = %id, "Record replaced");
                return Ok(entity);
            }
        }

        entity.assign_id(Self::generate_id());
        entity.touch(now);
        records.push(entity.clone());

        tracing::debug!(kind = T::KIND, id = ?entity.id(), "Record appended");
        Ok(entity)
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.simulate(self.latency.list).await;

        Ok(self.records.read().await.clone())
    }
}
