#![allow(dead_code)]

use std::sync::Once;

use serde_json::Value;
use sqlx::PgPool;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("item_service=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random local port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(test_db_pool: PgPool) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = item_service::app(test_db_pool);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/fast"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    address
}

/// Creates an item through the API and returns its assigned id.
pub async fn create_item(client: &reqwest::Client, address: &str, name: &str) -> String {
    let response = client
        .post(format!("{address}/items"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let body: Value = response.json().await.expect("Body should be JSON");
    body["item"]["id"]
        .as_str()
        .expect("Created item should carry an id")
        .to_string()
}

/// Fetches the full item list as JSON.
pub async fn list_items(client: &reqwest::Client, address: &str) -> Vec<Value> {
    let response = client
        .get(format!("{address}/items"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    response.json().await.expect("Body should be a JSON array")
}
