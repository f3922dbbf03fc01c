/**
 * Post List Cache
 *
 * In-memory TTL cache for per-user post listings. Each user id maps to
 * the full response list produced by the last database read. Entries
 * expire after the configured TTL and are dropped eagerly whenever the
 * owner creates or deletes a post, so reads never serve a stale list
 * after a write.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::posts::handlers::PostResponse;

/// A cached listing and the moment it was stored
struct CacheEntry {
    posts: Vec<PostResponse>,
    stored_at: Instant,
}

/// Shared cache of per-user post listings
///
/// Cloning is cheap: clones share the same entry map.
#[derive(Clone)]
pub struct PostCache {
    entries: Arc<Mutex<HashMap<i64, CacheEntry>>>,
    ttl: Duration,
}

impl PostCache {
    /// Create an empty cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Fetch the cached listing for a user
    ///
    /// Returns `None` on a miss. An entry older than the TTL counts as
    /// a miss and is removed on the way out.
    pub fn get(&self, user_id: i64) -> Option<Vec<PostResponse>> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(&user_id) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.posts.clone()),
            Some(_) => {
                entries.remove(&user_id);
                None
            }
            None => None,
        }
    }

    /// Store a freshly loaded listing for a user
    pub fn store(&self, user_id: i64, posts: Vec<PostResponse>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            user_id,
            CacheEntry {
                posts,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop a user's cached listing
    ///
    /// Called after every create and delete so the next read hits the
    /// database.
    pub fn invalidate(&self, user_id: i64) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&user_id);
    }
}
