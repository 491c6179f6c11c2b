//! Request/response DTOs and JSON mapping helpers.
//!
//! Field names (`accountId`, `transactionType`, `date`, `amount`) and the
//! `DEPOSIT`/`WITHDRAWAL` labels are the public wire contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use bankledger_accounts::{Account, Transaction, TransactionKind};
use bankledger_core::AccountId;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: AccountId,
    pub transactions: Vec<TransactionResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction_type: TransactionKind,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
}

pub fn account_to_response(account: &Account) -> AccountResponse {
    AccountResponse {
        account_id: account.id(),
        transactions: account.transactions().iter().map(transaction_to_response).collect(),
    }
}

pub fn transaction_to_response(transaction: &Transaction) -> TransactionResponse {
    TransactionResponse {
        transaction_type: transaction.kind,
        date: transaction.date,
        amount: transaction.amount,
    }
}
