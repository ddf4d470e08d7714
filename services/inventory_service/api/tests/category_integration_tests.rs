mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use helpers::create_test_app;
use inventory_service_core::dto::category::{CategoryListResponse, CategoryResponse};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_and_get_root_category() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-categories")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Resistors",
                "parent_id": null,
                "is_leaf": true,
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CategoryResponse = body_json(response).await;
    assert_eq!(created.name, "Resistors");
    assert_eq!(created.code, "resistors");

    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/catalogue-categories/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: CategoryResponse = body_json(response).await;
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn create_category_rejects_duplicate_code_in_same_parent() {
    let app = create_test_app().await;

    let make_request = || {
        Request::builder()
            .method(Method::POST)
            .uri("/v1/catalogue-categories")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "name": "Capacitors",
                    "parent_id": null,
                    "is_leaf": true,
                    "properties": []
                })
                .to_string(),
            ))
            .unwrap()
    };

    let first = app.clone().oneshot(make_request()).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(make_request()).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn get_unknown_category_returns_404() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/catalogue-categories/000000000000000000000000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_in_path_returns_404() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/catalogue-categories/not-an-object-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_categories_returns_pagination_info() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/catalogue-categories?parent_id=null&page=1&page_size=10")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed: CategoryListResponse = body_json(response).await;
    assert_eq!(listed.pagination.page, 1);
}

#[tokio::test]
async fn delete_category_with_children_is_conflict() {
    let app = create_test_app().await;

    let parent_request = Request::builder()
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
    let parent_response = app.clone().oneshot(parent_request).await.unwrap();
    assert_eq!(parent_response.status(), StatusCode::CREATED);
    let parent: CategoryResponse = body_json(parent_response).await;

    let child_request = Request::builder()
        .method(Method::POST)
        .uri("/v1/catalogue-categories")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Diodes",
                "parent_id": parent.id,
                "is_leaf": true,
                "properties": []
            })
            .to_string(),
        ))
        .unwrap();
    let child_response = app.clone().oneshot(child_request).await.unwrap();
    assert_eq!(child_response.status(), StatusCode::CREATED);

    let delete_request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/v1/catalogue-categories/{}", parent.id))
        .body(Body::empty())
        .unwrap();
    let delete_response = app.oneshot(delete_request).await.unwrap();
    assert_eq!(delete_response.status(), StatusCode::CONFLICT);
}
