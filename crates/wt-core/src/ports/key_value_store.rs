//! Durable key/value store port
//!
//! This port defines the contract for the per-device durable store that
//! backs onboarding persistence. Implementations are provided by the
//! infrastructure layer (e.g., a JSON file store).

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a single value, `None` when the key is absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a single value.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Batched read, one `Option` per requested key in order.
    async fn multi_get(&self, keys: &[&str]) -> anyhow::Result<Vec<Option<String>>>;

    /// Batched removal. Absent keys are ignored.
    async fn multi_remove(&self, keys: &[&str]) -> anyhow::Result<()>;
}
