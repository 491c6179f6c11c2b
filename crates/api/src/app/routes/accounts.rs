use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;

use bankledger_core::AccountId;
use bankledger_infra::statement;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_account))
        .route("/:id/deposit", post(deposit))
        .route("/:id/withdrawal", post(withdrawal))
        .route("/:id/balance", get(get_balance))
        .route("/:id/transactions", get(get_transactions))
}

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let account = services.ledger.create_account();
    (StatusCode::CREATED, Json(dto::account_to_response(&account))).into_response()
}

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(amount): Json<Decimal>,
) -> axum::response::Response {
    let id = match parse_account_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger.deposit(id, amount) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn withdrawal(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(amount): Json<Decimal>,
) -> axum::response::Response {
    let id = match parse_account_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger.withdraw(id, amount) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_account_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger.balance(id) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

/// Returns the transaction history as JSON and, as a side effect, writes the
/// text statement to stdout.
pub async fn get_transactions(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_account_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.ledger.account(id) {
        Ok(account) => {
            statement::print(&account);
            let transactions = account
                .transactions()
                .iter()
                .map(dto::transaction_to_response)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(transactions)).into_response()
        }
        Err(e) => errors::ledger_error_to_response(e),
    }
}

fn parse_account_id(raw: &str) -> Result<AccountId, axum::response::Response> {
    raw.parse::<AccountId>()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid account id"))
}
