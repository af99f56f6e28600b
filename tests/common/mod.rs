#![allow(dead_code)]

use axum_test::TestServer;
use catalog_service::infrastructure::persistence::{InMemoryProductRepository, PgProductRepository};
use catalog_service::routes::build_router;
use catalog_service::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_memory_state() -> AppState {
    AppState::new(Arc::new(InMemoryProductRepository::new()))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgProductRepository::new(Arc::new(pool))))
}

/// Full router over a fresh in-memory store.
pub fn make_server() -> TestServer {
    TestServer::new(build_router(create_memory_state())).unwrap()
}

pub fn widget_payload() -> Value {
    json!({
        "name": "Widget",
        "description": "A widget",
        "price": 9.99,
        "quantity": 10,
        "category": "Tools"
    })
}

pub fn product_payload(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "price": 1.25,
        "quantity": 4,
        "category": category
    })
}

/// Creates a product through the API and returns its id.
pub async fn create_product(server: &TestServer, payload: &Value) -> String {
    let response = server.post("/api/products").json(payload).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["id"]
        .as_str()
        .expect("created product has an id")
        .to_string()
}

pub async fn insert_product(pool: &PgPool, id: &str, name: &str) {
    sqlx::query(
        "INSERT INTO products (id, name, description, price, quantity, category) VALUES ($1, $2, 'desc', 1.0, 1.0, 'Misc')",
    )
    .bind(id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}
