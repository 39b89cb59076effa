//! In-process store used for local single-user runs and in tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::models::ProfileRecord;
use crate::store::{decode, encode, storage_key, PortfolioStore, StoreError};

struct Entry {
    raw: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| at > now)
    }
}

/// Drops expired entries. Runs under the write lock on every write.
fn purge_expired(entries: &mut HashMap<String, Entry>) {
    let now = Instant::now();
    entries.retain(|_, e| e.is_live(now));
}

/// Values are held serialized so reads go through the same decode path as Redis.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Option<Duration>,
}

impl MemoryStore {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of live entries.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|e| e.is_live(now))
            .count()
    }

    /// Entries physically held, expired or not.
    #[cfg(test)]
    async fn held(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Stores a raw value as-is. Lets tests plant legacy or corrupted payloads.
    #[cfg(test)]
    pub async fn insert_raw(&self, id: &str, raw: &str) {
        self.entries.write().await.insert(
            storage_key(id),
            Entry {
                raw: raw.to_string(),
                expires_at: None,
            },
        );
    }

    fn entry(&self, raw: String) -> Entry {
        Entry {
            raw,
            expires_at: self.ttl.map(|ttl| Instant::now() + ttl),
        }
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let key = storage_key(id);
        let entries = self.entries.read().await;
        match entries.get(&key) {
            Some(entry) if entry.is_live(Instant::now()) => decode(&key, &entry.raw).map(Some),
            _ => Ok(None),
        }
    }

    async fn create(&self, id: &str, record: &ProfileRecord) -> Result<(), StoreError> {
        let key = storage_key(id);
        let raw = encode(record)?;
        let mut entries = self.entries.write().await;
        purge_expired(&mut entries);
        if entries.contains_key(&key) {
            return Err(StoreError::AlreadyExists(key));
        }
        entries.insert(key, self.entry(raw));
        Ok(())
    }

    async fn put(&self, id: &str, record: &ProfileRecord) -> Result<(), StoreError> {
        let raw = encode(record)?;
        let entry = self.entry(raw);
        let mut entries = self.entries.write().await;
        purge_expired(&mut entries);
        entries.insert(storage_key(id), entry);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let removed = self.entries.write().await.remove(&storage_key(id));
        Ok(removed.is_some_and(|e| e.is_live(Instant::now())))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{canned_record, demo_record};

    #[tokio::test]
    async fn test_round_trip_is_field_for_field() {
        let store = MemoryStore::default();
        let record = demo_record();
        store.create("alex-1", &record).await.unwrap();

        let loaded = store.get("alex-1").await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_lookup_is_exact_match() {
        let store = MemoryStore::default();
        store.create("alex-1", &demo_record()).await.unwrap();

        assert!(store.get("alex").await.unwrap().is_none());
        assert!(store.get("ALEX-1").await.unwrap().is_none());
        assert!(store.get("alex-1 ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_refuses_existing_id() {
        let store = MemoryStore::default();
        store.create("alex-1", &demo_record()).await.unwrap();

        let err = store.create("alex-1", &canned_record()).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(ref k) if k == "portfolio-alex-1"));
        assert_eq!(store.get("alex-1").await.unwrap().unwrap(), demo_record());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::default();
        store.create("alex-1", &demo_record()).await.unwrap();
        store.put("alex-1", &canned_record()).await.unwrap();

        assert_eq!(store.get("alex-1").await.unwrap().unwrap(), canned_record());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let store = MemoryStore::default();
        store.create("alex-1", &demo_record()).await.unwrap();

        assert!(store.delete("alex-1").await.unwrap());
        assert!(!store.delete("alex-1").await.unwrap());
        assert!(store.get("alex-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupted_value_surfaces_as_error() {
        let store = MemoryStore::default();
        store.insert_raw("broken", "{\"name\": 1}").await;

        let err = store.get("broken").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
    }

    #[tokio::test]
    async fn test_legacy_payload_is_canonicalized_on_read() {
        let store = MemoryStore::default();
        let legacy = serde_json::json!({
            "name": "Alex Johnson",
            "title": "Full Stack Developer",
            "summary": "Builds web apps.",
            "experience": [],
            "projects": [{"name": "Shop", "description": "Store", "link": "https://github.com/a/b"}],
            "skills": ["Rust"],
            "education": []
        });
        store.insert_raw("legacy", &legacy.to_string()).await;

        let record = store.get("legacy").await.unwrap().unwrap();
        assert_eq!(record.skill_categories[0].skills, vec!["Rust"]);
        assert_eq!(record.projects[0].github.as_deref(), Some("https://github.com/a/b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_after_ttl() {
        let store = MemoryStore::new(Some(Duration::from_secs(60)));
        store.create("alex-1", &demo_record()).await.unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get("alex-1").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(store.get("alex-1").await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
        // an expired id can be claimed again
        store.create("alex-1", &canned_record()).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entries_are_purged_on_write() {
        let store = MemoryStore::new(Some(Duration::from_secs(60)));
        for i in 0..100 {
            store.create(&format!("old-{i}"), &canned_record()).await.unwrap();
        }
        assert_eq!(store.held().await, 100);

        tokio::time::advance(Duration::from_secs(120)).await;
        for i in 0..10 {
            store.create(&format!("new-{i}"), &canned_record()).await.unwrap();
        }
        assert_eq!(store.held().await, 10);

        tokio::time::advance(Duration::from_secs(120)).await;
        store.put("new-0", &demo_record()).await.unwrap();
        assert_eq!(store.held().await, 1);
    }
}
