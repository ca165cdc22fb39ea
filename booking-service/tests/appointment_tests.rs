mod common;

use common::Account;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn book(app: &TestApp, client: &Account, professional_id: &str, date: &str) -> Value {
    let response = app
        .post_authenticated("/appointments", &client.token)
        .json(&json!({ "professional_id": professional_id, "date": date }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    response.json().await.expect("Failed to parse response")
}

async fn setup(app: &TestApp) -> (Account, Account) {
    let client = app
        .register_account("Carol", "carol@example.com", None)
        .await;
    let professional = app
        .register_account("Pat", "pat@example.com", Some("professional"))
        .await;
    (client, professional)
}

#[tokio::test]
async fn test_book_appointment() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;

    let body = book(&app, &client, &professional.id, "2024-07-01T09:00:00Z").await;

    let data = &body["data"];
    assert!(data["id"].is_string());
    assert_eq!(data["client_id"], client.id.as_str());
    assert_eq!(data["professional"]["id"], professional.id.as_str());
    assert_eq!(data["professional"]["name"], "Pat");
    assert_eq!(data["professional"]["email"], "pat@example.com");
    assert_eq!(data["date"], "2024-07-01T09:00:00Z");
}

#[tokio::test]
async fn test_book_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/appointments")
        .json(&json!({ "professional_id": "x", "date": "y" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_book_with_non_professional() {
    let app = TestApp::spawn().await;
    let (client, _) = setup(&app).await;
    let other_client = app
        .register_account("Dave", "dave@example.com", None)
        .await;

    let response = app
        .post_authenticated("/appointments", &client.token)
        .json(&json!({ "professional_id": other_client.id, "date": "2024-07-01T09:00:00Z" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Professional not found");
}

#[tokio::test]
async fn test_book_with_invalid_input() {
    let app = TestApp::spawn().await;
    let (client, _) = setup(&app).await;

    let response = app
        .post_authenticated("/appointments", &client.token)
        .json(&json!({ "professional_id": "nope", "date": "next tuesday" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["data"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["professional_id", "date"]);
}

#[tokio::test]
async fn test_list_is_sorted_and_scoped() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;
    let other_client = app
        .register_account("Dave", "dave@example.com", None)
        .await;

    book(&app, &client, &professional.id, "2024-07-20T09:00:00Z").await;
    book(&app, &client, &professional.id, "2024-07-05T09:00:00Z").await;
    book(&app, &other_client, &professional.id, "2024-07-10T09:00:00Z").await;

    let response = app
        .get_authenticated("/appointments", &client.token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["date"], "2024-07-05T09:00:00Z");
    assert_eq!(list[1]["date"], "2024-07-20T09:00:00Z");
    assert!(list.iter().all(|a| a["professional"]["name"] == "Pat"));

    let response = app
        .get_authenticated("/appointments", &professional.token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.unwrap();
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1]["client_id"], other_client.id.as_str());
}

#[tokio::test]
async fn test_get_is_limited_to_participants() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;
    let outsider = app
        .register_account("Eve", "eve@example.com", None)
        .await;

    let booked = book(&app, &client, &professional.id, "2024-07-01T09:00:00Z").await;
    let path = format!("/appointments/{}", booked["data"]["id"].as_str().unwrap());

    for participant in [&client, &professional] {
        let response = app
            .get_authenticated(&path, &participant.token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .get_authenticated(&path, &outsider.token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_malformed_id() {
    let app = TestApp::spawn().await;
    let (client, _) = setup(&app).await;

    let response = app
        .get_authenticated("/appointments/not-a-uuid", &client.token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reschedule_appointment() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;

    let booked = book(&app, &client, &professional.id, "2024-07-01T09:00:00Z").await;
    let path = format!("/appointments/{}", booked["data"]["id"].as_str().unwrap());

    let response = app
        .patch_authenticated(&path, &client.token)
        .json(&json!({ "date": "2024-07-02T11:30:00+02:00" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["date"], "2024-07-02T09:30:00Z");
    assert_eq!(body["data"]["id"], booked["data"]["id"]);
}

#[tokio::test]
async fn test_cancel_appointment() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;
    let outsider = app
        .register_account("Eve", "eve@example.com", None)
        .await;

    let booked = book(&app, &client, &professional.id, "2024-07-01T09:00:00Z").await;
    let path = format!("/appointments/{}", booked["data"]["id"].as_str().unwrap());

    let response = app
        .delete_authenticated(&path, &outsider.token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .delete_authenticated(&path, &professional.token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .get_authenticated(&path, &client.token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reschedule_with_wrongly_typed_date() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;

    let booked = book(&app, &client, &professional.id, "2024-07-01T09:00:00Z").await;
    let path = format!("/appointments/{}", booked["data"]["id"].as_str().unwrap());

    let response = app
        .patch_authenticated(&path, &client.token)
        .json(&json!({ "date": 20240702 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_professional_lists_bookings_made_as_client() {
    let app = TestApp::spawn().await;
    let (client, professional) = setup(&app).await;
    let colleague = app
        .register_account("Quinn", "quinn@example.com", Some("professional"))
        .await;

    book(&app, &client, &professional.id, "2024-07-10T09:00:00Z").await;
    book(&app, &professional, &colleague.id, "2024-07-03T09:00:00Z").await;

    let response = app
        .get_authenticated("/appointments", &professional.token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["date"], "2024-07-03T09:00:00Z");
    assert_eq!(list[0]["professional"]["name"], "Quinn");
    assert_eq!(list[1]["client_id"], client.id.as_str());

    let response = app
        .get_authenticated("/appointments", &colleague.token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
