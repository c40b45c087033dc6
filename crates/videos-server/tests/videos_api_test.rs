//! End-to-end tests for the videos API
//!
//! These tests drive the full router, base path and middleware included:
//! - Create, read, update and delete through HTTP
//! - Validation error bodies
//! - Store reset

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`
use videos_server::{api::create_router, config::Config, store::VideoStore};

const BASE: &str = "/hometask_01/api";

/// Router plus the store behind it
struct TestApp {
    store: Arc<VideoStore>,
    config: Config,
}

impl TestApp {
    fn new() -> Self {
        Self {
            store: Arc::new(VideoStore::new()),
            config: Config::default(),
        }
    }

    fn router(&self) -> Router {
        create_router(self.store.clone(), &self.config)
    }

    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(format!("{BASE}{path}"));
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

fn error_fields(body: &Value) -> Vec<String> {
    body["errorsMessages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_update_scenario() {
    let app = TestApp::new();
    let before = Utc::now();

    let (status, created) = app
        .request(Method::POST, "/videos", Some(json!({ "title": "A", "author": "B" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_u64().unwrap();
    assert_eq!(created["canBeDownloaded"], false);
    assert_eq!(created["minAgeRestriction"], Value::Null);
    assert_eq!(created["availableResolutions"], json!([]));

    let publication = timestamp(&created["publicationDate"]);
    let expected = before + Duration::days(1);
    assert!((publication - expected).num_seconds().abs() < 5);
    assert_eq!(publication - timestamp(&created["createdAt"]), Duration::days(1));

    let (status, body) = app
        .request(Method::PUT, &format!("/videos/{id}"), Some(json!({ "minAgeRestriction": 21 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["minAgeRestriction"]);

    let (status, updated) = app
        .request(Method::PUT, &format!("/videos/{id}"), Some(json!({ "minAgeRestriction": 12 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["minAgeRestriction"], 12);

    let (status, fetched) = app.request(Method::GET, &format!("/videos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_create_missing_fields_never_stores() {
    let app = TestApp::new();

    let (status, body) = app.request(Method::POST, "/videos", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["title", "author"]);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_explicit_false_and_resolutions_preserved() {
    let app = TestApp::new();

    let (status, created) = app
        .request(
            Method::POST,
            "/videos",
            Some(json!({
                "title": "  Launch  ",
                "author": "Team",
                "canBeDownloaded": false,
                "availableResolutions": ["P1080", "P144"],
                "minAgeRestriction": 18
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Launch");
    assert_eq!(created["canBeDownloaded"], false);
    assert_eq!(created["availableResolutions"], json!(["P1080", "P144"]));
    assert_eq!(created["minAgeRestriction"], 18);
}

#[tokio::test]
async fn test_list_delete_and_reset() {
    let app = TestApp::new();
    for title in ["one", "two", "three"] {
        app.request(Method::POST, "/videos", Some(json!({ "title": title, "author": "x" })))
            .await;
    }

    let (status, listed) = app.request(Method::GET, "/videos", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = listed.as_array().unwrap().iter().map(|v| v["title"].clone()).collect();
    assert_eq!(titles, vec![json!("one"), json!("two"), json!("three")]);

    let (status, _) = app.request(Method::DELETE, "/videos/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.request(Method::DELETE, "/videos/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len(), 2);

    let (status, body) = app.request(Method::DELETE, "/testing/all-data", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, listed) = app.request(Method::GET, "/videos", None).await;
    assert_eq!(listed, json!([]));

    let (_, created) = app
        .request(Method::POST, "/videos", Some(json!({ "title": "four", "author": "x" })))
        .await;
    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn test_update_precedence_and_publication_date() {
    let app = TestApp::new();

    let (status, _) = app
        .request(Method::PUT, "/videos/1", Some(json!({ "title": "" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, created) = app
        .request(Method::POST, "/videos", Some(json!({ "title": "A", "author": "B" })))
        .await;

    let (status, updated) = app
        .request(
            Method::PUT,
            &format!("/videos/{}", created["id"]),
            Some(json!({ "publicationDate": "2030-05-01T10:00:00+02:00", "title": "Renamed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["publicationDate"], "2030-05-01T08:00:00.000Z");
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["id"], created["id"]);
}
