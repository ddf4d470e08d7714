mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use helpers::create_test_app;
use inventory_service_core::dto::category::CategoryResponse;
use inventory_service_core::dto::catalogue_item::CatalogueItemResponse;
use inventory_service_core::dto::dimension::ManufacturerResponse;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_manufacturer(app: &axum::Router) -> ManufacturerResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/manufacturers")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "Vishay"}).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_leaf_category(app: &axum::Router, properties: serde_json::Value) -> CategoryResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-categories")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Resistors",
                "parent_id": null,
                "is_leaf": true,
                "properties": properties
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// §8 scenario 2: mandatory boolean property omitted from the create
/// request is rejected with the exact missing-property message.
#[tokio::test]
async fn create_rejects_mandatory_property_omitted() {
    let app = create_test_app().await;
    let manufacturer = create_manufacturer(&app).await;
    let category = create_leaf_category(
        &app,
        json!([{
            "name": "Mandatory Boolean Property Without Unit",
            "type": "boolean",
            "unit_id": null,
            "mandatory": true,
            "allowed_values": null
        }]),
    )
    .await;
    let property_id = category.properties[0].id;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_category_id": category.id,
                "manufacturer_id": manufacturer.id,
                "name": "330 Ohm Resistor",
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(
        body["detail"],
        format!("Missing mandatory property with ID: '{property_id}'")
    );
}

/// §8 scenario 3: value not in `allowed_values` rejected with the exact
/// plain-formatted options list.
#[tokio::test]
async fn create_rejects_value_outside_allowed_values() {
    let app = create_test_app().await;
    let manufacturer = create_manufacturer(&app).await;
    let category = create_leaf_category(
        &app,
        json!([{
            "name": "Tolerance",
            "type": "number",
            "unit_id": null,
            "mandatory": true,
            "allowed_values": {"type": "list", "values": [1, 2, 3]}
        }]),
    )
    .await;
    let property_id = category.properties[0].id;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_category_id": category.id,
                "manufacturer_id": manufacturer.id,
                "name": "330 Ohm Resistor",
                "properties": [{"id": property_id, "value": 42}]
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(
        body["detail"],
        format!("Invalid value for property with ID '{property_id}'. Expected one of 1, 2, 3.")
    );
}

#[tokio::test]
async fn create_and_get_catalogue_item_round_trips() {
    let app = create_test_app().await;
    let manufacturer = create_manufacturer(&app).await;
    let category = create_leaf_category(&app, json!([])).await;

    let create_request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_category_id": category.id,
                "manufacturer_id": manufacturer.id,
                "name": "330 Ohm Resistor",
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();
    let create_response = app.clone().oneshot(create_request).await.unwrap();
    assert_eq!(create_response.status(), StatusCode::CREATED);
    let created: CatalogueItemResponse = body_json(create_response).await;
    assert_eq!(created.name, "330 Ohm Resistor");

    let get_request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/catalogue-items/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let get_response = app.oneshot(get_request).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);
    let fetched: CatalogueItemResponse = body_json(get_response).await;
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn create_rejects_non_leaf_category() {
    let app = create_test_app().await;
    let manufacturer = create_manufacturer(&app).await;

    let category_request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-categories")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Passive Components",
                "parent_id": null,
                "is_leaf": false,
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();
    let category_response = app.clone().oneshot(category_request).await.unwrap();
    assert_eq!(category_response.status(), StatusCode::CREATED);
    let category: CategoryResponse = body_json(category_response).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_category_id": category.id,
                "manufacturer_id": manufacturer.id,
                "name": "330 Ohm Resistor",
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
