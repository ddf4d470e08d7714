//! Exercises the Property Propagation Coordinator (§4.3) end to end: adding
//! a mandatory property to a category with existing catalogue items and
//! items, and renaming a property across both.

mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use helpers::create_test_app;
use inventory_service_core::dto::catalogue_item::CatalogueItemResponse;
use inventory_service_core::dto::category::CategoryResponse;
use inventory_service_core::dto::dimension::{ManufacturerResponse, UsageStatusResponse};
use inventory_service_core::dto::item::ItemResponse;
use inventory_service_core::dto::system::SystemResponse;
use inventory_service_core::domains::property::PropertyScalar;

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

async fn create_system(app: &axum::Router) -> SystemResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/systems")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"name": "Lab 1", "parent_id": null, "importance": "low"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_usage_status(app: &axum::Router) -> UsageStatusResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/usage-statuses")
        .header("content-type", "application/json")
        .body(Body::from(json!({"value": "New"}).to_string()))
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

/// §8 scenario 5: a leaf category with one conforming catalogue item (and
/// an item spawned from it) gains a new mandatory property with a default
/// value — both pre-existing instances must pick up the new PropertyValue.
#[tokio::test]
async fn add_property_propagates_default_to_existing_instances() {
    let app = create_test_app().await;
    let manufacturer = create_manufacturer(&app).await;
    let system = create_system(&app).await;
    let usage_status = create_usage_status(&app).await;
    let category = create_leaf_category(
        &app,
        json!([{
            "name": "Is Rated",
            "type": "boolean",
            "unit_id": null,
            "mandatory": true,
            "allowed_values": null
        }]),
    )
    .await;
    let existing_property_id = category.properties[0].id;

    let catalogue_item_request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_category_id": category.id,
                "manufacturer_id": manufacturer.id,
                "name": "330 Ohm Resistor",
                "properties": [{"id": existing_property_id, "value": true}]
            })
            .to_string(),
        ))
        .unwrap();
    let catalogue_item_response = app.clone().oneshot(catalogue_item_request).await.unwrap();
    assert_eq!(catalogue_item_response.status(), StatusCode::CREATED);
    let catalogue_item: CatalogueItemResponse = body_json(catalogue_item_response).await;

    let item_request = Request::builder()
        .method(Method::POST)
        .uri("/v1/items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_item_id": catalogue_item.id,
                "system_id": system.id,
                "usage_status_id": usage_status.id,
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();
    let item_response = app.clone().oneshot(item_request).await.unwrap();
    assert_eq!(item_response.status(), StatusCode::CREATED);
    let item: ItemResponse = body_json(item_response).await;

    let add_property_request = Request::builder()
        .method(Method::POST)
        .uri(format!("/v1/catalogue-categories/{}/properties", category.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Power Rating",
                "type": "number",
                "unit_id": null,
                "mandatory": true,
                "allowed_values": null,
                "default_value": 20
            })
            .to_string(),
        ))
        .unwrap();
    let add_property_response = app.clone().oneshot(add_property_request).await.unwrap();
    assert_eq!(add_property_response.status(), StatusCode::CREATED);
    let updated_category: CategoryResponse = body_json(add_property_response).await;
    let new_property_id = updated_category
        .properties
        .iter()
        .find(|p| p.name == "Power Rating")
        .unwrap()
        .id;

    let get_catalogue_item_request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/catalogue-items/{}", catalogue_item.id))
        .body(Body::empty())
        .unwrap();
    let get_catalogue_item_response = app.clone().oneshot(get_catalogue_item_request).await.unwrap();
    let fetched_catalogue_item: CatalogueItemResponse = body_json(get_catalogue_item_response).await;
    let propagated = fetched_catalogue_item
        .properties
        .iter()
        .find(|p| p.id == new_property_id)
        .unwrap();
    assert_eq!(propagated.value, Some(PropertyScalar::Number(20.0)));

    let get_item_request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/items/{}", item.id))
        .body(Body::empty())
        .unwrap();
    let get_item_response = app.oneshot(get_item_request).await.unwrap();
    let fetched_item: ItemResponse = body_json(get_item_response).await;
    let propagated_on_item = fetched_item
        .properties
        .iter()
        .find(|p| p.id == new_property_id)
        .unwrap();
    assert_eq!(propagated_on_item.value, Some(PropertyScalar::Number(20.0)));
}

/// §8 invariant: renaming a property cascades the cached name onto every
/// catalogue item and item carrying that property id, without touching
/// the stored value.
#[tokio::test]
async fn rename_property_propagates_cached_name_to_existing_instances() {
    let app = create_test_app().await;
    let manufacturer = create_manufacturer(&app).await;
    let category = create_leaf_category(
        &app,
        json!([{
            "name": "Resistance",
            "type": "number",
            "unit_id": null,
            "mandatory": true,
            "allowed_values": null
        }]),
    )
    .await;
    let property_id = category.properties[0].id;

    let catalogue_item_request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-items")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "catalogue_category_id": category.id,
                "manufacturer_id": manufacturer.id,
                "name": "330 Ohm Resistor",
                "properties": [{"id": property_id, "value": 330}]
            })
            .to_string(),
        ))
        .unwrap();
    let catalogue_item_response = app.clone().oneshot(catalogue_item_request).await.unwrap();
    assert_eq!(catalogue_item_response.status(), StatusCode::CREATED);
    let catalogue_item: CatalogueItemResponse = body_json(catalogue_item_response).await;

    let rename_request = Request::builder()
        .method(Method::PATCH)
        .uri(format!(
            "/v1/catalogue-categories/{}/properties/{}",
            category.id, property_id
        ))
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "Resistance (Ohms)"}).to_string()))
        .unwrap();
    let rename_response = app.clone().oneshot(rename_request).await.unwrap();
    assert_eq!(rename_response.status(), StatusCode::OK);

    let get_request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/catalogue-items/{}", catalogue_item.id))
        .body(Body::empty())
        .unwrap();
    let get_response = app.oneshot(get_request).await.unwrap();
    let fetched: CatalogueItemResponse = body_json(get_response).await;
    let prop = fetched.properties.iter().find(|p| p.id == property_id).unwrap();
    assert_eq!(prop.name, "Resistance (Ohms)");
    assert_eq!(prop.value, Some(PropertyScalar::Number(330.0)));
}
