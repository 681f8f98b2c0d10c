//! Integration tests for the resource clients.
//!
//! These tests run the clients against a local mock server and verify the
//! request line, query string, headers and body that reach the wire.

use pulse_api::api::{
    AccountApi, ActivityAssignment, PeopleApi, PulseApi, TalentApi, WorkflowApi,
};
use pulse_api::clients::{AuthenticationError, HttpError};
use pulse_api::rest::{Document, ListParams, ResourceError, ResourceKind};
use pulse_api::{ApiToken, BaseUrl, PulseConfig};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a config pointing at the mock server.
fn create_test_config(uri: &str) -> PulseConfig {
    PulseConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .api_token(ApiToken::new("test-token").unwrap())
        .build()
        .unwrap()
}

async fn mount_ok(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(server)
        .await;
}

// ============================================================================
// People
// ============================================================================

#[tokio::test]
async fn test_get_person_by_id_with_included() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/iam/people/123"))
        .and(query_param("included", "account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "iam/people", "id": "123", "attributes": {"firstName": "Ada"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let people = PeopleApi::new(&create_test_config(&server.uri())).unwrap();
    let result = people.get_person_by_id("123", &["account"]).await.unwrap();

    assert_eq!(result["data"]["id"], "123");
    assert_eq!(result["data"]["attributes"]["firstName"], "Ada");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("included=account"));
}

#[tokio::test]
async fn test_get_person_without_included_sends_no_query() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let people = PeopleApi::new(&create_test_config(&server.uri())).unwrap();
    people.get_person_by_id("123", &[]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/api/v3/iam/people/123");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_update_person_injects_path_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v3/iam/people/42"))
        .and(body_json(json!({
            "data": {"type": "iam/people", "id": "42", "attributes": {"lastName": "Hopper"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "42"}})))
        .expect(1)
        .mount(&server)
        .await;

    let people = PeopleApi::new(&create_test_config(&server.uri())).unwrap();
    let document = Document::new(ResourceKind::People, json!({"lastName": "Hopper"}));
    people.update_person_by_id("42", &document).await.unwrap();
}

#[tokio::test]
async fn test_update_person_with_mismatched_id_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let people = PeopleApi::new(&create_test_config(&server.uri())).unwrap();
    let document = Document::with_id(ResourceKind::People, "7", json!({}));
    let result = people.update_person_by_id("42", &document).await;

    assert!(matches!(result, Err(ResourceError::IdMismatch { .. })));
}

// ============================================================================
// Talent
// ============================================================================

#[tokio::test]
async fn test_create_talent_sends_envelope_unchanged() {
    let server = MockServer::start().await;
    let envelope = json!({
        "data": {
            "type": "talent/talents",
            "attributes": {"name": "X", "tags": ["a", "b"], "level": 3}
        }
    });
    Mock::given(method("POST"))
        .and(path("/api/v3/talent/talents"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(envelope.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "1"}})))
        .expect(1)
        .mount(&server)
        .await;

    let talent = TalentApi::new(&create_test_config(&server.uri())).unwrap();
    let document: Document = serde_json::from_value(envelope).unwrap();
    let result = talent.create_talent(&document).await.unwrap();

    assert_eq!(result["data"]["id"], "1");
}

#[tokio::test]
async fn test_create_skill_with_wrong_type_is_rejected() {
    let server = MockServer::start().await;
    let talent = TalentApi::new(&create_test_config(&server.uri())).unwrap();

    let document = Document::new(ResourceKind::Language, json!({}));
    let result = talent.create_skill(&document).await;

    assert!(matches!(
        result,
        Err(ResourceError::TypeMismatch {
            expected: "talent/skills",
            ..
        })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_skill_list_serializes_list_params() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let talent = TalentApi::new(&create_test_config(&server.uri())).unwrap();
    let params = ListParams::new()
        .filter("level", "3")
        .fields("talent/skills", "name")
        .sort("-level")
        .page(1, 10);
    talent.get_skills_list(Some(&params)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("filter[level]".to_string(), "3".to_string()),
            ("fields[talent/skills]".to_string(), "name".to_string()),
            ("sort".to_string(), "-level".to_string()),
            ("page[number]".to_string(), "1".to_string()),
            ("page[size]".to_string(), "10".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_included_entries_keep_count_and_order() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let talent = TalentApi::new(&create_test_config(&server.uri())).unwrap();
    let included = ["skills", "languages", "account", "skills"];
    talent.get_talent_by_id("9", &included).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let values: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "included")
        .map(|(_, v)| v.into_owned())
        .collect();

    assert_eq!(values, included);
}

// ============================================================================
// Paths and methods for every resource
// ============================================================================

#[tokio::test]
async fn test_every_resource_uses_expected_paths_and_methods() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let api = PulseApi::new(&create_test_config(&server.uri())).unwrap();
    for kind in ResourceKind::ALL {
        api.list(kind, None).await.unwrap();
        api.find(kind, "id-1", &[]).await.unwrap();
        api.create(kind, &Document::new(kind, json!({"k": "v"})))
            .await
            .unwrap();
        api.update(kind, "id-1", &Document::new(kind, json!({"k": "v"})))
            .await
            .unwrap();
        api.delete(kind, "id-1").await.unwrap();
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), ResourceKind::ALL.len() * 5);

    for (kind, chunk) in ResourceKind::ALL.iter().zip(requests.chunks(5)) {
        let base = kind.collection_path();
        let member = format!("{base}/id-1");
        let seen: Vec<(String, String)> = chunk
            .iter()
            .map(|r| (r.method.to_string(), r.url.path().to_string()))
            .collect();

        assert_eq!(
            seen,
            vec![
                ("GET".to_string(), base.to_string()),
                ("GET".to_string(), member.clone()),
                ("POST".to_string(), base.to_string()),
                ("PATCH".to_string(), member.clone()),
                ("DELETE".to_string(), member),
            ],
            "unexpected requests for {kind:?}"
        );
    }
}

#[tokio::test]
async fn test_named_clients_hit_their_collections() {
    let server = MockServer::start().await;
    mount_ok(&server).await;
    let config = create_test_config(&server.uri());

    AccountApi::new(&config)
        .unwrap()
        .get_account_list(None)
        .await
        .unwrap();
    let talent = TalentApi::new(&config).unwrap();
    talent.get_languages_list(None).await.unwrap();
    talent.get_education_list(None).await.unwrap();
    talent.get_certification_list(None).await.unwrap();
    talent.get_experience_list(None).await.unwrap();
    WorkflowApi::new(&config)
        .unwrap()
        .get_activity_list(None)
        .await
        .unwrap();

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();

    assert_eq!(
        paths,
        vec![
            "/api/v3/iam/accounts",
            "/api/v3/talent/languages",
            "/api/v3/talent/educations",
            "/api/v3/talent/certifications",
            "/api/v3/talent/experiences",
            "/api/v3/workflow/activities",
        ]
    );
}

// ============================================================================
// Activity assignment
// ============================================================================

#[tokio::test]
async fn test_assign_activity_member() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/workflow/activities/7/assignments"))
        .and(body_json(json!({"account_id": "acc-1", "start_working": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"assigned": true})))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = WorkflowApi::new(&create_test_config(&server.uri())).unwrap();
    let result = workflow
        .assign_activity_member("7", &ActivityAssignment::new("acc-1", true))
        .await
        .unwrap();

    assert_eq!(result, json!({"assigned": true}));
}

#[tokio::test]
async fn test_unassign_activity_member() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/workflow/activities/7/assignments"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = WorkflowApi::new(&create_test_config(&server.uri())).unwrap();
    let result = workflow.unassign_activity_member("7").await.unwrap();

    assert_eq!(result, serde_json::Value::Null);
}

// ============================================================================
// Authentication and error mapping
// ============================================================================

#[tokio::test]
async fn test_bearer_token_and_accept_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let people = PeopleApi::new(&create_test_config(&server.uri())).unwrap();
    people.get_people_list(None).await.unwrap();
}

#[tokio::test]
async fn test_not_found_maps_to_request_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/iam/people/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!({"errors": [{"title": "Not found"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let people = PeopleApi::new(&create_test_config(&server.uri())).unwrap();
    let error = people.get_person_by_id("missing", &[]).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    match error {
        ResourceError::Http(HttpError::Request(e)) => {
            assert_eq!(e.body["errors"][0]["title"], "Not found");
            assert_eq!(e.request_id.as_deref(), Some("req-1"));
        }
        other => panic!("expected RequestError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "bad token"})))
        .expect(1)
        .mount(&server)
        .await;

    let accounts = AccountApi::new(&create_test_config(&server.uri())).unwrap();
    let error = accounts.get_account_list(None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Http(HttpError::Authentication(
            AuthenticationError::Rejected { status: 401, .. }
        ))
    ));
}

#[tokio::test]
async fn test_server_error_body_passes_through_as_text() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let api = PulseApi::new(&create_test_config(&server.uri())).unwrap();
    let error = api.delete(ResourceKind::Skill, "1").await.unwrap_err();

    match error {
        ResourceError::Http(HttpError::Request(e)) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.body, json!("upstream exploded"));
        }
        other => panic!("expected RequestError, got {other:?}"),
    }
}
