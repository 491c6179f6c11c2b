use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bankledger_accounts::Account;
use bankledger_core::{AccountId, LedgerError, LedgerResult};

/// Key/value store abstraction over account aggregates.
///
/// `update` runs the whole read-modify-replace cycle as one operation so an
/// implementation can serialize concurrent mutations of the same account.
pub trait AccountStore: Send + Sync {
    fn get(&self, id: AccountId) -> Option<Account>;

    fn insert(&self, account: Account);

    /// Look up `id`, apply `f` to the current value, and replace it with the
    /// result. Fails with `NotFound` if the id is absent; if `f` fails the
    /// stored value is left untouched.
    fn update<F>(&self, id: AccountId, f: F) -> LedgerResult<Account>
    where
        F: FnOnce(&Account) -> LedgerResult<Account>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore,
{
    fn get(&self, id: AccountId) -> Option<Account> {
        (**self).get(id)
    }

    fn insert(&self, account: Account) {
        (**self).insert(account)
    }

    fn update<F>(&self, id: AccountId, f: F) -> LedgerResult<Account>
    where
        F: FnOnce(&Account) -> LedgerResult<Account>,
    {
        (**self).update(id, f)
    }
}

/// In-memory account store; process lifetime, no persistence.
///
/// Mutations hold the write lock across lookup + apply + replace, so
/// concurrent deposits/withdrawals on one account serialize deterministically
/// instead of losing updates.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, id: AccountId) -> Option<Account> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn insert(&self, account: Account) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(account.id(), account);
        }
    }

    fn update<F>(&self, id: AccountId, f: F) -> LedgerResult<Account>
    where
        F: FnOnce(&Account) -> LedgerResult<Account>,
    {
        let mut map = self.inner.write().unwrap();
        let account = map.get(&id).ok_or(LedgerError::NotFound)?;
        let updated = f(account)?;
        map.insert(id, updated.clone());
        Ok(updated)
    }
}
