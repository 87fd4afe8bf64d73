use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use business::domain::pool::cache::PoolCache;
use business::domain::pool::fingerprint::Fingerprint;
use business::domain::pool::model::Pool;

/// Default time a pool stays fresh.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

struct CachedPool {
    pool: Pool,
    stored_at: DateTime<Utc>,
}

/// Process-local pool cache. Entries older than the TTL are treated as absent
/// and evicted on read.
pub struct InMemoryPoolCache {
    ttl: Duration,
    entries: Mutex<HashMap<Fingerprint, CachedPool>>,
}

impl InMemoryPoolCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn get_at(&self, fingerprint: &Fingerprint, now: DateTime<Utc>) -> Option<Pool> {
        let mut entries = self.entries.lock().ok()?;
        let fresh = entries
            .get(fingerprint)
            .map(|entry| now - entry.stored_at < self.ttl)?;
        if !fresh {
            entries.remove(fingerprint);
            return None;
        }
        entries.get(fingerprint).map(|entry| entry.pool.clone())
    }

    fn set_at(&self, fingerprint: Fingerprint, pool: Pool, now: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                fingerprint,
                CachedPool {
                    pool,
                    stored_at: now,
                },
            );
        }
    }
}

impl Default for InMemoryPoolCache {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_TTL_MINUTES))
    }
}

impl PoolCache for InMemoryPoolCache {
    fn get(&self, fingerprint: &Fingerprint) -> Option<Pool> {
        self.get_at(fingerprint, Utc::now())
    }

    fn set(&self, fingerprint: Fingerprint, pool: Pool) {
        self.set_at(fingerprint, pool, Utc::now());
    }
}
