use std::sync::Arc;

use bankledger_infra::{InMemoryAccountStore, LedgerService};

/// Application services shared across handlers.
///
/// The store is process-wide in-memory state: accounts live for the lifetime
/// of the process and are gone after a restart.
pub struct AppServices {
    pub ledger: LedgerService<Arc<InMemoryAccountStore>>,
}

pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryAccountStore::new());
    AppServices {
        ledger: LedgerService::new(store),
    }
}
