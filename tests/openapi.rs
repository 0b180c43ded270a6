mod common;

use serde_json::Value;
use sqlx::PgPool;

use common::spawn_app;

#[sqlx::test]
async fn openapi_json_is_served_and_describes_the_api(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api-docs/openapi.json"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let doc: Value = response.json().await.expect("Body should be JSON");
    let paths = doc["paths"].as_object().expect("paths object");

    assert!(paths.contains_key("/fast"));
    assert!(paths.contains_key("/items"));
    assert!(paths.contains_key("/items/{id}"));
    assert!(!paths.contains_key("/metrics"));

    // All four item operations are documented.
    assert!(paths["/items"].get("post").is_some());
    assert!(paths["/items"].get("get").is_some());
    assert!(paths["/items/{id}"].get("put").is_some());
    assert!(paths["/items/{id}"].get("delete").is_some());
}

#[sqlx::test]
async fn swagger_ui_is_mounted(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/docs/"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
