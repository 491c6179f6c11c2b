use chrono::Utc;
use rust_decimal::Decimal;

use bankledger_accounts::Account;
use bankledger_core::{AccountId, LedgerError, LedgerResult};

use crate::store::AccountStore;

/// Orchestrates account lookups and mutations over an injected store.
///
/// Timestamps are assigned here (`Utc::now()`), keeping the aggregate itself
/// deterministic.
pub struct LedgerService<S> {
    store: S,
}

impl<S: AccountStore> LedgerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create and store a fresh, empty account. Always succeeds.
    pub fn create_account(&self) -> Account {
        let account = Account::open();
        tracing::info!(account_id = %account.id(), "account created");
        self.store.insert(account.clone());
        account
    }

    pub fn deposit(&self, id: AccountId, amount: Decimal) -> LedgerResult<Account> {
        let updated = self.store.update(id, |a| a.deposit(amount, Utc::now()))?;
        tracing::info!(account_id = %id, %amount, balance = %updated.balance(), "deposit accepted");
        Ok(updated)
    }

    pub fn withdraw(&self, id: AccountId, amount: Decimal) -> LedgerResult<Account> {
        let updated = self.store.update(id, |a| a.withdrawal(amount, Utc::now()))?;
        tracing::info!(account_id = %id, %amount, balance = %updated.balance(), "withdrawal accepted");
        Ok(updated)
    }

    pub fn balance(&self, id: AccountId) -> LedgerResult<Decimal> {
        Ok(self.account(id)?.balance())
    }

    pub fn account(&self, id: AccountId) -> LedgerResult<Account> {
        self.store.get(id).ok_or(LedgerError::NotFound)
    }
}
