// trolley/src/aggregator/locks.rs

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Debug, Default)]
struct LockEntry {
  mutex: Arc<AsyncMutex<()>>,
  // Holders plus waiters, counted through their `Lease`.
  leases: usize,
}

type LockMap = Arc<Mutex<HashMap<String, LockEntry>>>;

/// One async mutex per user id, created on demand and dropped once no task
/// holds or waits for it. A waiter cancelled mid-acquire releases its lease
/// like a holder does.
///
/// The outer `parking_lot` mutex only guards the map and is never held
/// across an `.await`.
#[derive(Debug, Default, Clone)]
pub(crate) struct UserLocks {
  map: LockMap,
}

impl UserLocks {
  pub(crate) async fn lock(&self, user_id: &str) -> UserLockGuard {
    let (user_mutex, lease) = {
      let mut map = self.map.lock();
      let entry = map.entry(user_id.to_string()).or_default();
      entry.leases += 1;
      let lease = Lease {
        user_id: user_id.to_string(),
        map: self.map.clone(),
      };
      (entry.mutex.clone(), lease)
    };
    // If this future is dropped while waiting, `lease` goes with it.
    let guard = user_mutex.lock_owned().await;
    UserLockGuard {
      _guard: guard,
      _lease: lease,
    }
  }

  #[cfg(test)]
  pub(crate) fn tracked(&self) -> usize {
    self.map.lock().len()
  }
}

struct Lease {
  user_id: String,
  map: LockMap,
}

impl Drop for Lease {
  fn drop(&mut self) {
    let mut map = self.map.lock();
    let unused = match map.get_mut(&self.user_id) {
      Some(entry) => {
        entry.leases = entry.leases.saturating_sub(1);
        entry.leases == 0
      }
      None => false,
    };
    if unused {
      map.remove(&self.user_id);
    }
  }
}

// Fields drop in order: the mutex is released before the lease.
pub(crate) struct UserLockGuard {
  _guard: OwnedMutexGuard<()>,
  _lease: Lease,
}
