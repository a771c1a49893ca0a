use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Process-wide exclusion section for ledger writes.
///
/// Every write path (add, bind, migrate) holds the guard across its full
/// check-then-write sequence. Create one per process and hand clones to
/// whatever needs to serialize against the ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerSync {
    gate: Arc<Mutex<()>>,
}

impl LedgerSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the exclusion section. Released when the guard drops.
    pub async fn enter(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}
