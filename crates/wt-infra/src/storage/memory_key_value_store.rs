//! In-memory key/value store
//!
//! A KeyValueStorePort over a mutexed map. Nothing survives the process;
//! intended for tests and ephemeral embedding.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use wt_core::ports::KeyValueStorePort;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn multi_get(&self, keys: &[&str]) -> anyhow::Result<Vec<Option<String>>> {
        let values = self.values.lock().await;
        Ok(keys.iter().map(|key| values.get(*key).cloned()).collect())
    }

    async fn multi_remove(&self, keys: &[&str]) -> anyhow::Result<()> {
        let mut values = self.values.lock().await;
        for key in keys {
            values.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_and_remove_round_trip() {
        let store = InMemoryKeyValueStore::new();

        assert_eq!(store.get("key").await.unwrap(), None);

        store.set("key", "value").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("value"));

        store.multi_remove(&["key"]).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn multi_get_preserves_key_order() {
        let store = InMemoryKeyValueStore::new();
        store.set("b", "2").await.unwrap();

        let values = store.multi_get(&["a", "b"]).await.unwrap();
        assert_eq!(values, vec![None, Some("2".to_string())]);
    }
}
