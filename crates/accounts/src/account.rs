use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankledger_core::{AccountId, LedgerError, LedgerResult};

/// Kind of a balance-affecting event (determines the stored sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("DEPOSIT"),
            TransactionKind::Withdrawal => f.write_str("WITHDRAWAL"),
        }
    }
}

/// One balance-affecting event (immutable).
///
/// Deposits are stored positive, withdrawals negative, so the balance is a
/// plain sum over the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
}

/// Aggregate root: a bank account with its ordered transaction history.
///
/// Mutation is copy-on-write: `deposit`/`withdrawal` return a new `Account`
/// value with the extended history, and the store replaces the old value
/// wholesale. The balance is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Open a fresh, empty account.
    pub fn open() -> Self {
        Self {
            id: AccountId::new(),
            transactions: Vec::new(),
        }
    }

    /// Rehydrate an account from an existing history (fixtures, tests).
    pub fn new(id: AccountId, transactions: Vec<Transaction>) -> Self {
        Self { id, transactions }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Current balance: fold of all transaction amounts.
    ///
    /// Recomputed on every call; at this scale O(n) beats carrying a cached
    /// running total that could drift from the history.
    pub fn balance(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Append a deposit of `amount` at `occurred_at`.
    pub fn deposit(&self, amount: Decimal, occurred_at: DateTime<Utc>) -> LedgerResult<Account> {
        ensure_positive(amount)?;
        Ok(self.appending(Transaction {
            kind: TransactionKind::Deposit,
            date: occurred_at,
            amount,
        }))
    }

    /// Append a withdrawal of `amount` at `occurred_at`.
    ///
    /// Fails with `InsufficientBalance` (account unchanged) if the current
    /// balance does not cover the amount.
    pub fn withdrawal(&self, amount: Decimal, occurred_at: DateTime<Utc>) -> LedgerResult<Account> {
        ensure_positive(amount)?;

        let balance = self.balance();
        if balance < amount {
            return Err(LedgerError::insufficient(amount, balance));
        }

        Ok(self.appending(Transaction {
            kind: TransactionKind::Withdrawal,
            date: occurred_at,
            amount: -amount,
        }))
    }

    fn appending(&self, transaction: Transaction) -> Account {
        let mut transactions = self.transactions.clone();
        transactions.push(transaction);
        Account {
            id: self.id,
            transactions,
        }
    }
}

fn ensure_positive(amount: Decimal) -> LedgerResult<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::validation("amount must be positive"));
    }
    Ok(())
}
