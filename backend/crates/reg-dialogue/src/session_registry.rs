use crate::SessionState;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

/// Per-session dialogue state.
///
/// Each session has its own lock so a slow ledger call in one conversation
/// does not hold up the others.
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, Arc<Mutex<SessionState>>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Session handle, created Idle on first use
    pub async fn session(&self, session_id: &str) -> Arc<Mutex<SessionState>> {
        if let Some(session) = self.inner.read().await.get(session_id) {
            return Arc::clone(session);
        }

        let mut inner = self.inner.write().await;
        Arc::clone(inner.entry(session_id.to_string()).or_default())
    }

    /// Snapshot of a session's state
    pub async fn state_of(&self, session_id: &str) -> SessionState {
        let session = self.inner.read().await.get(session_id).cloned();
        match session {
            Some(session) => session.lock().await.clone(),
            None => SessionState::Idle,
        }
    }

    /// Drop the session if it is outside a conversation and nobody else
    /// holds its handle. A dropped session reads as Idle.
    ///
    /// Callers must release their own handle first.
    pub async fn evict_if_settled(&self, session_id: &str) -> bool {
        let mut inner = self.inner.write().await;
        let Some(session) = inner.get(session_id) else {
            return false;
        };

        // New handles are only handed out under the map lock held here
        let settled = Arc::strong_count(session) == 1
            && session
                .try_lock()
                .is_ok_and(|state| !state.in_conversation());
        if settled {
            inner.remove(session_id);
        }
        settled
    }

    /// Number of sessions currently tracked
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
