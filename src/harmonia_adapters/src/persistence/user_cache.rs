use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use harmonia_core::{User, UserId};
use tokio::sync::RwLock;

struct CacheEntry {
    user: User,
    expires_at: Instant,
}

/// Process-local read-through cache for `find_by_id` lookups.
///
/// Entries are whole snapshots replaced atomically under the lock; an entry
/// is never mutated in place, so a concurrent `get` observes either the old
/// snapshot or the new one, never a half-written state. An expired entry is
/// never returned.
///
/// The cache is not shared across service instances: the acceptable
/// staleness window equals the TTL, and password-bearing lookups (by email)
/// bypass it entirely.
#[derive(Clone)]
pub struct UserCache {
    entries: Arc<RwLock<HashMap<UserId, CacheEntry>>>,
    ttl: Duration,
}

impl UserCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn get(&self, id: &UserId) -> Option<User> {
        {
            let entries = self.entries.read().await;
            match entries.get(id) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Some(entry.user.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Entry expired: evict it before reporting a miss.
        self.entries.write().await.remove(id);
        None
    }

    pub async fn insert(&self, user: User) {
        let entry = CacheEntry {
            expires_at: Instant::now() + self.ttl,
            user,
        };
        self.entries.write().await.insert(entry.user.id().clone(), entry);
    }

    pub async fn remove(&self, id: &UserId) {
        self.entries.write().await.remove(id);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
