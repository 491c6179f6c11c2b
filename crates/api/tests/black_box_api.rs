use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = bankledger_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_account(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .post(format!("{}/accounts", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["accountId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_account_returns_created_empty_account() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/accounts", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(!body["accountId"].as_str().unwrap().is_empty());
    assert_eq!(body["transactions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn deposit_then_withdraw_then_read_balance() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_account(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/accounts/{}/deposit", srv.base_url, id))
        .json(&json!(100))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(format!("{}/accounts/{}/withdrawal", srv.base_url, id))
        .json(&json!(50))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/accounts/{}/balance", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let balance: f64 = res.json().await.unwrap();
    assert_eq!(balance, 50.0);
}

#[tokio::test]
async fn operations_on_unknown_account_are_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let unknown = uuid::Uuid::now_v7();

    let res = client
        .post(format!("{}/accounts/{}/deposit", srv.base_url, unknown))
        .json(&json!(100))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .post(format!("{}/accounts/{}/withdrawal", srv.base_url, unknown))
        .json(&json!(50))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/accounts/{}/balance", srv.base_url, unknown))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/accounts/{}/transactions", srv.base_url, unknown))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn malformed_account_id_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/accounts/nonexistent/balance", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn withdrawal_beyond_balance_is_unprocessable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_account(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/accounts/{}/withdrawal", srv.base_url, id))
        .json(&json!(10))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_balance");

    // Balance unchanged.
    let res = client
        .get(format!("{}/accounts/{}/balance", srv.base_url, id))
        .send()
        .await
        .unwrap();
    let balance: f64 = res.json().await.unwrap();
    assert_eq!(balance, 0.0);
}

#[tokio::test]
async fn non_positive_deposit_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_account(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/accounts/{}/deposit", srv.base_url, id))
        .json(&json!(0))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn transactions_listing_reflects_the_history() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_account(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/accounts/{}/deposit", srv.base_url, id))
        .json(&json!(100.5))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(format!("{}/accounts/{}/withdrawal", srv.base_url, id))
        .json(&json!(25.5))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/accounts/{}/transactions", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let transactions = body.as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["transactionType"], "DEPOSIT");
    assert_eq!(transactions[0]["amount"].as_f64().unwrap(), 100.5);
    assert!(!transactions[0]["date"].as_str().unwrap().is_empty());
    assert_eq!(transactions[1]["transactionType"], "WITHDRAWAL");
    assert_eq!(transactions[1]["amount"].as_f64().unwrap(), -25.5);
}
