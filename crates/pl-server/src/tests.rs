use crate::app;
use crate::state::AppState;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pl_client::PeopleSource;
use pl_core::{Person, PlError, Result};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct FixedSource {
    people: Vec<Person>,
}

#[async_trait]
impl PeopleSource for FixedSource {
    async fn list_people(&self) -> Result<Vec<Person>> {
        Ok(self.people.clone())
    }
}

struct FailingSource;

#[async_trait]
impl PeopleSource for FailingSource {
    async fn list_people(&self) -> Result<Vec<Person>> {
        Err(PlError::Upstream { status: 503 })
    }
}

fn person(id: i64, email: &str) -> Person {
    Person {
        id,
        email_address: Some(email.to_string()),
        ..Person::default()
    }
}

fn state_with_emails(emails: &[&str]) -> AppState {
    let people = emails
        .iter()
        .enumerate()
        .map(|(i, e)| person(i as i64 + 1, e))
        .collect();
    AppState::new(Arc::new(FixedSource { people }))
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = app(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_ok() {
    let state = state_with_emails(&[]);
    let (status, body) = get_json(state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_people_envelope() {
    let state = state_with_emails(&["a@x.com", "b@x.com"]);
    let (status, body) = get_json(state, "/people").await;
    assert_eq!(status, StatusCode::OK);
    let people = body["people"].as_array().unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0]["email_address"], "a@x.com");
}

#[tokio::test]
async fn test_char_frequencies_envelope() {
    let state = state_with_emails(&["aaaabbb@cc.d"]);
    let (status, body) = get_json(state, "/people/char_frequencies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["frequencies"],
        json!([
            { "key": "a", "value": 4 },
            { "key": "b", "value": 3 },
            { "key": "c", "value": 2 },
            { "key": "d", "value": 1 },
        ])
    );
}

#[tokio::test]
async fn test_char_frequencies_skip_people_without_email() {
    let mut people = vec![person(1, "ab@c.d")];
    people.push(Person {
        id: 2,
        ..Person::default()
    });
    let state = AppState::new(Arc::new(FixedSource { people }));
    let (status, body) = get_json(state, "/people/char_frequencies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["frequencies"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_duplicates_envelope() {
    let state = state_with_emails(&[
        "dan@test.com",
        "dann@test.com",
        "and@test.com",
        "dave@testing.com",
    ]);
    let (status, body) = get_json(state, "/people/duplicates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["possibleDuplicates"],
        json!([["dan@test.com", "dann@test.com"]])
    );
}

#[tokio::test]
async fn test_duplicates_threshold_query_overrides() {
    let emails = ["ab@x.com", "ba@x.com"];

    // A transposition is two edits; the default distance threshold of 1
    // rejects it.
    let (_, body) = get_json(state_with_emails(&emails), "/people/duplicates").await;
    assert_eq!(body["possibleDuplicates"], json!([]));

    let (_, body) = get_json(state_with_emails(&emails), "/people/duplicates?distance=2").await;
    assert_eq!(
        body["possibleDuplicates"],
        json!([["ab@x.com", "ba@x.com"]])
    );
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let state = AppState::new(Arc::new(FailingSource));
    for uri in ["/people", "/people/char_frequencies", "/people/duplicates"] {
        let (status, body) = get_json(state.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "upstream_error");
    }
}
