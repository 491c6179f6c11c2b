//! Plain-text account statements.
//!
//! Fixed layout: header, account id, one line per transaction
//! (`dd/MM/yyyy | amount | kind`), trailing balance. Amounts are shown with
//! two decimal places rounded away from zero, the original statement rule.

use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

use bankledger_accounts::{Account, Transaction};

const STATEMENT_HEADER: &str = "STATEMENT";
const ACCOUNT_ID_PREFIX: &str = "Account ID: ";
const BALANCE_PREFIX: &str = "Current Balance: ";
const TRANSACTION_HEADER: &str = "DATE | AMOUNT | TRANS. TYPE";
const LINE_SEPARATOR: &str = "----------------------";

/// Render the statement for `account` as a text block.
pub fn render(account: &Account) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{STATEMENT_HEADER}");
    out.push('\n');
    let _ = writeln!(out, "{ACCOUNT_ID_PREFIX}{}", account.id());
    out.push('\n');
    let _ = writeln!(out, "{TRANSACTION_HEADER}");
    let _ = writeln!(out, "{LINE_SEPARATOR}");

    for transaction in account.transactions() {
        let _ = writeln!(out, "{}", format_transaction(transaction));
    }

    out.push('\n');
    let _ = writeln!(out, "{BALANCE_PREFIX}{}", format_amount(account.balance()));

    out
}

/// Render and write the statement to stdout.
pub fn print(account: &Account) {
    print!("{}", render(account));
}

fn format_transaction(transaction: &Transaction) -> String {
    format!(
        "{} | {} | {}",
        transaction.date.format("%d/%m/%Y"),
        format_amount(transaction.amount),
        transaction.kind,
    )
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero);
    format!("{rounded:.2}")
}
