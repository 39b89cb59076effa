//! Redis-backed store. One multiplexed connection shared by all handlers.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::info;

use crate::models::ProfileRecord;
use crate::store::{decode, encode, storage_key, PortfolioStore, StoreError};

/// `SET key raw [NX] [EX secs]`. Sub-second TTLs round up to one second.
fn set_command(key: &str, raw: &str, only_if_absent: bool, ttl: Option<Duration>) -> redis::Cmd {
    let mut cmd = redis::cmd("SET");
    cmd.arg(key).arg(raw);
    if only_if_absent {
        cmd.arg("NX");
    }
    if let Some(ttl) = ttl {
        cmd.arg("EX").arg(ttl.as_secs().max(1));
    }
    cmd
}

#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
    ttl: Option<Duration>,
}

impl RedisStore {
    pub async fn connect(redis_url: &str, ttl: Option<Duration>) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis store connected (ttl: {:?})", ttl);
        Ok(Self { conn, ttl })
    }

    fn set_cmd(&self, key: &str, raw: &str, only_if_absent: bool) -> redis::Cmd {
        set_command(key, raw, only_if_absent, self.ttl)
    }
}

#[async_trait]
impl PortfolioStore for RedisStore {
    async fn get(&self, id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let key = storage_key(id);
        let mut conn = self.conn.clone();
        let raw: Option<String> = redis::cmd("GET").arg(&key).query_async(&mut conn).await?;
        raw.map(|raw| decode(&key, &raw)).transpose()
    }

    async fn create(&self, id: &str, record: &ProfileRecord) -> Result<(), StoreError> {
        let key = storage_key(id);
        let raw = encode(record)?;
        let mut conn = self.conn.clone();
        // SET NX answers nil when the key already exists
        let reply: Option<String> = self
            .set_cmd(&key, &raw, true)
            .query_async(&mut conn)
            .await?;
        match reply {
            Some(_) => Ok(()),
            None => Err(StoreError::AlreadyExists(key)),
        }
    }

    async fn put(&self, id: &str, record: &ProfileRecord) -> Result<(), StoreError> {
        let key = storage_key(id);
        let raw = encode(record)?;
        let mut conn = self.conn.clone();
        let _: Option<String> = self
            .set_cmd(&key, &raw, false)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let removed: i64 = redis::cmd("DEL")
            .arg(storage_key(id))
            .query_async(&mut conn)
            .await?;
        Ok(removed > 0)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_create_command_is_set_nx_with_expiry() {
        let packed =
            set_command("portfolio-a-1", "{}", true, Some(Duration::from_secs(60))).get_packed_command();
        assert!(packed.starts_with(b"*6\r\n$3\r\nSET\r\n"));
        assert!(contains(&packed, b"$13\r\nportfolio-a-1\r\n"));
        assert!(contains(&packed, b"$2\r\nNX\r\n"));
        assert!(contains(&packed, b"$2\r\nEX\r\n$2\r\n60\r\n"));
    }

    #[test]
    fn test_put_command_without_ttl_is_plain_set() {
        let packed = set_command("portfolio-a-1", "{}", false, None).get_packed_command();
        assert!(packed.starts_with(b"*3\r\n$3\r\nSET\r\n"));
        assert!(!contains(&packed, b"NX"));
        assert!(!contains(&packed, b"EX"));
    }

    #[test]
    fn test_sub_second_ttl_rounds_up() {
        let packed =
            set_command("portfolio-a-1", "{}", false, Some(Duration::from_millis(200))).get_packed_command();
        assert!(contains(&packed, b"$2\r\nEX\r\n$1\r\n1\r\n"));
    }
}
