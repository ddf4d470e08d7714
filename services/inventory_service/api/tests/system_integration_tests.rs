mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use helpers::create_test_app;
use inventory_service_core::dto::category::BreadcrumbsResponse;
use inventory_service_core::dto::system::{SystemListResponse, SystemResponse};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_system(
    app: &axum::Router,
    name: &str,
    parent_id: Option<shared_types::ObjectId>,
) -> SystemResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/systems")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"name": name, "parent_id": parent_id, "importance": "medium"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn create_and_get_root_system() {
    let app = create_test_app().await;
    let created = create_system(&app, "Lab 1", None).await;
    assert_eq!(created.code, "lab-1");

    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/systems/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn breadcrumbs_reports_full_trail_for_nested_systems() {
    let app = create_test_app().await;
    let root = create_system(&app, "Building A", None).await;
    let child = create_system(&app, "Room 101", Some(root.id)).await;
    let grandchild = create_system(&app, "Bench 3", Some(child.id)).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/v1/systems/{}/breadcrumbs", grandchild.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let trail: BreadcrumbsResponse = body_json(response).await;
    assert!(trail.full_trail);
    assert_eq!(trail.trail.len(), 3);
    assert_eq!(trail.trail[0].id, root.id);
}

#[tokio::test]
async fn delete_system_with_children_is_conflict() {
    let app = create_test_app().await;
    let root = create_system(&app, "Building B", None).await;
    create_system(&app, "Room 202", Some(root.id)).await;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/v1/systems/{}", root.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn moving_system_to_its_own_descendant_is_rejected() {
    let app = create_test_app().await;
    let a = create_system(&app, "System A", None).await;
    let b = create_system(&app, "System B", Some(a.id)).await;
    let c = create_system(&app, "System C", Some(b.id)).await;

    let request = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/v1/systems/{}", a.id))
        .header("content-type", "application/json")
        .body(Body::from(json!({"parent_id": c.id}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_systems_returns_pagination_info() {
    let app = create_test_app().await;
    create_system(&app, "System Z", None).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/systems?parent_id=null&page=1&page_size=10")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed: SystemListResponse = body_json(response).await;
    assert_eq!(listed.pagination.page, 1);
}
