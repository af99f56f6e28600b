mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

const UNKNOWN_ID: &str = "65a1b2c3d4e5f60718293a4b";

fn as_f64(value: &Value) -> f64 {
    value.as_f64().expect("numeric field")
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_product_success() {
    let server = common::make_server();

    let response = server
        .post("/api/products")
        .json(&common::widget_payload())
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["id"].as_str().unwrap().len(), 24);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A widget");
    assert_eq!(as_f64(&body["price"]), 9.99);
    assert_eq!(as_f64(&body["quantity"]), 10.0);
    assert_eq!(body["category"], "Tools");
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    let response = server.get(&format!("/api/products/{id}")).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A widget");
    assert_eq!(as_f64(&body["price"]), 9.99);
    assert_eq!(as_f64(&body["quantity"]), 10.0);
    assert_eq!(body["category"], "Tools");
}

#[tokio::test]
async fn test_create_missing_fields_is_bad_request() {
    let server = common::make_server();

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Bad" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    let fields = &body["error"]["details"]["fields"];
    for field in ["description", "price", "quantity", "category"] {
        assert_eq!(fields[field], json!(["required"]), "{field}");
    }

    let list = server.get("/api/products").await.json::<Vec<Value>>();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_create_without_price_is_not_persisted() {
    let server = common::make_server();
    let mut payload = common::widget_payload();
    payload.as_object_mut().unwrap().remove("price");

    server
        .post("/api/products")
        .json(&payload)
        .await
        .assert_status_bad_request();

    let list = server.get("/api/products").await.json::<Vec<Value>>();
    assert!(list.iter().all(|p| p["name"] != "Widget"));
}

#[tokio::test]
async fn test_create_wrong_type_is_bad_request() {
    let server = common::make_server();
    let mut payload = common::widget_payload();
    payload["price"] = json!("cheap");

    let response = server.post("/api/products").json(&payload).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_empty_name_is_bad_request() {
    let server = common::make_server();
    let mut payload = common::widget_payload();
    payload["name"] = json!("");

    let response = server.post("/api/products").json(&payload).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["fields"]["name"],
        json!(["empty"])
    );
}

#[tokio::test]
async fn test_create_non_json_body_is_bad_request() {
    let server = common::make_server();

    let response = server
        .post("/api/products")
        .text("name=Widget")
        .await;

    response.assert_status_bad_request();
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty_store_returns_empty_array() {
    let server = common::make_server();

    let response = server.get("/api/products").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_filters_by_title_ignoring_case() {
    let server = common::make_server();
    common::create_product(&server, &common::widget_payload()).await;
    common::create_product(&server, &common::product_payload("Gadget", "Tools")).await;
    common::create_product(&server, &common::product_payload("WIDGET rack", "Storage")).await;

    let response = server
        .get("/api/products")
        .add_query_param("title", "widg")
        .await;

    response.assert_status_ok();
    let names: Vec<String> = response
        .json::<Vec<Value>>()
        .into_iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["Widget", "WIDGET rack"]);
}

#[tokio::test]
async fn test_list_unfiltered_is_superset_of_filtered() {
    let server = common::make_server();
    for name in ["Widget", "Gadget", "Gizmo", "Sprocket"] {
        common::create_product(&server, &common::product_payload(name, "Parts")).await;
    }

    let all = server.get("/api/products").await.json::<Vec<Value>>();
    assert_eq!(all.len(), 4);

    for needle in ["g", "GI", "et", "zzz"] {
        let filtered = server
            .get("/api/products")
            .add_query_param("title", needle)
            .await
            .json::<Vec<Value>>();

        assert!(filtered.len() <= all.len());
        assert!(filtered.iter().all(|p| all.contains(p)), "{needle}");
    }
}

#[tokio::test]
async fn test_list_empty_title_returns_all() {
    let server = common::make_server();
    common::create_product(&server, &common::widget_payload()).await;
    common::create_product(&server, &common::product_payload("Gadget", "Tools")).await;

    let list = server
        .get("/api/products")
        .add_query_param("title", "")
        .await
        .json::<Vec<Value>>();

    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn test_list_title_is_not_a_pattern() {
    let server = common::make_server();
    common::create_product(&server, &common::widget_payload()).await;

    let list = server
        .get("/api/products")
        .add_query_param("title", "w.*t")
        .await
        .json::<Vec<Value>>();

    assert!(list.is_empty());
}

#[tokio::test]
async fn test_list_repeated_title_uses_first_value() {
    let server = common::make_server();
    common::create_product(&server, &common::widget_payload()).await;
    common::create_product(&server, &common::product_payload("Gadget", "Tools")).await;

    let response = server.get("/api/products?title=widg&title=gadg").await;

    response.assert_status_ok();
    let list = response.json::<Vec<Value>>();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Widget");
}

#[tokio::test]
async fn test_list_ignores_unknown_query_params() {
    let server = common::make_server();
    common::create_product(&server, &common::widget_payload()).await;

    let list = server
        .get("/api/products?page=2&sort=name")
        .await
        .json::<Vec<Value>>();

    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = common::make_server();

    let response = server.get(&format!("/api/products/{UNKNOWN_ID}")).await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_malformed_id_is_not_found() {
    let server = common::make_server();

    server
        .get("/api/products/bogus-id")
        .await
        .assert_status_not_found();
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_partial_preserves_other_fields() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "price": 7.99 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(as_f64(&body["price"]), 7.99);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A widget");
    assert_eq!(as_f64(&body["quantity"]), 10.0);
    assert_eq!(body["category"], "Tools");

    let fetched = server
        .get(&format!("/api/products/{id}"))
        .await
        .json::<Value>();
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_update_full_payload() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&common::product_payload("Widget Pro", "Premium"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Widget Pro");
    assert_eq!(body["category"], "Premium");
    assert_eq!(as_f64(&body["quantity"]), 4.0);
}

#[tokio::test]
async fn test_update_null_field_is_bad_request() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "name": null, "price": 1.0 }))
        .await;

    response.assert_status_bad_request();

    let unchanged = server
        .get(&format!("/api/products/{id}"))
        .await
        .json::<Value>();
    assert_eq!(unchanged["name"], "Widget");
    assert_eq!(as_f64(&unchanged["price"]), 9.99);
}

#[tokio::test]
async fn test_update_empty_string_is_bad_request() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "category": "", "price": 1.0 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["fields"]["category"],
        json!(["empty"])
    );

    let unchanged = server
        .get(&format!("/api/products/{id}"))
        .await
        .json::<Value>();
    assert_eq!(unchanged["category"], "Tools");
    assert_eq!(as_f64(&unchanged["price"]), 9.99);
}

#[tokio::test]
async fn test_update_empty_body_returns_record_unchanged() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;
    let before = server
        .get(&format!("/api/products/{id}"))
        .await
        .json::<Value>();

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), before);
}

#[tokio::test]
async fn test_update_wrong_type_is_bad_request() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "quantity": "many" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = common::make_server();

    server
        .put(&format!("/api/products/{UNKNOWN_ID}"))
        .json(&json!({ "price": 1.0 }))
        .await
        .assert_status_not_found();

    server
        .put("/api/products/not-an-id")
        .json(&json!({ "price": 1.0 }))
        .await
        .assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_product_success() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    let response = server.delete(&format!("/api/products/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Deleted product: Widget" })
    );

    server
        .get(&format!("/api/products/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let server = common::make_server();
    let id = common::create_product(&server, &common::widget_payload()).await;

    server
        .delete(&format!("/api/products/{id}"))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/products/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let server = common::make_server();

    server
        .delete(&format!("/api/products/{UNKNOWN_ID}"))
        .await
        .assert_status_not_found();

    server
        .delete("/api/products/12345")
        .await
        .assert_status_not_found();
}

// ─── Full scenario ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_product_lifecycle() {
    let server = common::make_server();

    let id = common::create_product(&server, &common::widget_payload()).await;

    let listed = server
        .get("/api/products")
        .add_query_param("title", "widg")
        .await
        .json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());

    let updated = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "price": 7.99 }))
        .await
        .json::<Value>();
    assert_eq!(as_f64(&updated["price"]), 7.99);
    assert_eq!(updated["name"], "Widget");

    server
        .delete(&format!("/api/products/{id}"))
        .await
        .assert_status_ok();

    let remaining = server.get("/api/products").await.json::<Vec<Value>>();
    assert!(remaining.is_empty());
}
