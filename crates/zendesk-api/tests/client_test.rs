//! Integration tests for the Zendesk client using wiremock

use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zendesk_api::{Macro, MacroAction, MacroApi, ZendeskClient, ZendeskConfig, ZendeskError};

fn client(server: &MockServer) -> ZendeskClient {
    let config = ZendeskConfig::new(&server.uri(), "agent@acme.test", "secret").unwrap();
    ZendeskClient::new(config).unwrap()
}

fn macro_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("https://acme.zendesk.com/api/v2/macros/{}.json", id),
        "title": title,
        "description": "Closes the ticket",
        "position": 3,
        "active": true,
        "restriction": null,
        "actions": [
            {"field": "status", "value": "solved"},
            {"field": "priority", "value": "low"}
        ],
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z"
    })
}

#[tokio::test]
async fn test_create_macro_posts_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/macros.json"))
        .and(basic_auth("agent@acme.test/token", "secret"))
        .and(body_json(json!({
            "macro": {
                "title": "Close",
                "description": "",
                "restriction": null,
                "active": true,
                "actions": [
                    {"field": "status", "value": "solved"},
                    {"field": "priority", "value": "low"}
                ]
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"macro": macro_json(777, "Close")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_macro(Macro {
            title: "Close".to_string(),
            active: true,
            actions: vec![
                MacroAction::new("status", "solved"),
                MacroAction::new("priority", "low"),
            ],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, 777);
    assert_eq!(created.url, "https://acme.zendesk.com/api/v2/macros/777.json");
    assert_eq!(created.actions[1], MacroAction::new("priority", "low"));
}

#[tokio::test]
async fn test_get_macro() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/macros/1234.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"macro": macro_json(1234, "foobar")})),
        )
        .mount(&server)
        .await;

    let m = client(&server).get_macro(1234).await.unwrap();
    assert_eq!(m.id, 1234);
    assert_eq!(m.title, "foobar");
    assert_eq!(m.position, 3);
    assert_eq!(m.restriction, "");
}

#[tokio::test]
async fn test_update_macro_uses_path_id() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/macros/12345.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"macro": macro_json(12345, "renamed")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let m = client(&server)
        .update_macro(
            12345,
            Macro {
                title: "renamed".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(m.title, "renamed");
}

#[tokio::test]
async fn test_delete_macro_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/macros/12345.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete_macro(12345).await.unwrap();
}

#[tokio::test]
async fn test_not_found_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/macros/99.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "RecordNotFound",
            "description": "Not found"
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_macro(99).await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        ZendeskError::Api { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("RecordNotFound"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unprocessable_entity() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/macros.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": "RecordInvalid",
            "details": {"title": [{"description": "Title: cannot be blank"}]}
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_macro(Macro::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/macros/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).get_macro(5).await.unwrap_err();
    assert!(matches!(err, ZendeskError::Json(_)));
}
