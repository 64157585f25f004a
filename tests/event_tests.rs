//! Integration tests for the calendar event endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use calboard::config::Config;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("calboard-event-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = calboard::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    calboard::api::router(state).expect("Failed to build router")
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn add_event(app: &Router, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_event")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn list_events(app: &Router) -> Vec<serde_json::Value> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await.as_array().unwrap().clone()
}

async fn delete_event(app: &Router, id: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/delete_event/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_events_start_empty() {
    let app = spawn_app().await;
    assert!(list_events(&app).await.is_empty());
}

#[tokio::test]
async fn test_end_date_is_made_exclusive() {
    let app = spawn_app().await;

    let response = add_event(
        &app,
        serde_json::json!({
            "title": "Holiday",
            "start": "2024-01-01",
            "end_date": "2024-01-05",
            "persons": ["Alice"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "success");

    let response = add_event(
        &app,
        serde_json::json!({
            "title": "Dentist",
            "start": "2024-01-10",
            "persons": ["Bob"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let events = list_events(&app).await;
    assert_eq!(events.len(), 2);

    assert_eq!(events[0]["title"], "Holiday");
    assert_eq!(events[0]["start"], "2024-01-01");
    assert_eq!(events[0]["end"], "2024-01-06");

    assert_eq!(events[1]["title"], "Dentist");
    assert!(events[1]["end"].is_null());
}

#[tokio::test]
async fn test_persons_round_trip() {
    let app = spawn_app().await;

    add_event(
        &app,
        serde_json::json!({
            "title": "Dinner",
            "start": "2024-02-14",
            "persons": ["Alice", "Bob"]
        }),
    )
    .await;

    let events = list_events(&app).await;
    assert_eq!(events[0]["persons"], serde_json::json!(["Alice", "Bob"]));
    assert!(events[0]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_persons_default_to_empty() {
    let app = spawn_app().await;

    let response = add_event(
        &app,
        serde_json::json!({ "title": "Solo", "start": "2024-02-14", "end_date": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let events = list_events(&app).await;
    assert_eq!(events[0]["persons"], serde_json::json!([]));
    assert!(events[0]["end"].is_null());
}

#[tokio::test]
async fn test_add_event_validation() {
    let app = spawn_app().await;

    let invalid = [
        serde_json::json!({ "start": "2024-01-01" }),
        serde_json::json!({ "title": "No start" }),
        serde_json::json!({ "title": "Bad date", "start": "01.01.2024" }),
        serde_json::json!({ "title": "Backwards", "start": "2024-01-05", "end_date": "2024-01-01" }),
        serde_json::json!({ "title": "Comma", "start": "2024-01-05", "persons": ["Doe, Jane"] }),
        serde_json::json!({ "title": "Wrong type", "start": "2024-01-05", "persons": "Alice" }),
    ];

    for body in invalid {
        let response = add_event(&app, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert!(body_json(response).await["error"].is_string());
    }

    assert!(list_events(&app).await.is_empty());
}

#[tokio::test]
async fn test_delete_event() {
    let app = spawn_app().await;

    add_event(
        &app,
        serde_json::json!({ "title": "Keep", "start": "2024-03-01" }),
    )
    .await;
    add_event(
        &app,
        serde_json::json!({ "title": "Drop", "start": "2024-03-02" }),
    )
    .await;

    let events = list_events(&app).await;
    let drop_id = events
        .iter()
        .find(|e| e["title"] == "Drop")
        .unwrap()["id"]
        .to_string();

    let response = delete_event(&app, &drop_id).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "deleted");

    let events = list_events(&app).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Keep");

    let response = delete_event(&app, &drop_id).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_event() {
    let app = spawn_app().await;

    for id in ["9999", "0", "-1", "abc"] {
        let response = delete_event(&app, id).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{id}");
        assert!(body_json(response).await["error"].is_string());
    }
}

#[tokio::test]
async fn test_event_routes_do_not_require_login() {
    let app = spawn_app().await;

    let response = add_event(
        &app,
        serde_json::json!({ "title": "Open", "start": "2024-04-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list_events(&app).await.len(), 1);
}
