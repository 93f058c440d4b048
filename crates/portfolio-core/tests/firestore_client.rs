use httpmock::prelude::*;
use portfolio_core::config::FirestoreConfig;
use portfolio_core::repository::FirestoreClient;
use portfolio_core::{CollectionReader, CollectionSpec, Project, ProjectType, RetrievalError, SocialLink};
use serde_json::json;

const RUN_QUERY_PATH: &str = "/projects/demo/databases/(default)/documents:runQuery";

fn client_for(server: &MockServer) -> FirestoreClient {
    FirestoreClient::new(&FirestoreConfig {
        project_id: "demo".to_string(),
        api_key: "test-key".to_string(),
        endpoint: server.base_url(),
        ..FirestoreConfig::default()
    })
}

fn project_document(id: &str, title: &str, year: &str, kind: &str) -> serde_json::Value {
    json!({
        "document": {
            "name": format!("projects/demo/databases/(default)/documents/projects/{}", id),
            "fields": {
                "title": { "stringValue": title },
                "description": { "stringValue": "" },
                "year": { "integerValue": year },
                "type": { "stringValue": kind },
                "tech": { "arrayValue": { "values": [{ "stringValue": "Kotlin" }] } }
            },
            "createTime": "2024-01-01T00:00:00Z",
            "updateTime": "2024-01-01T00:00:00Z"
        },
        "readTime": "2024-06-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_run_query_decodes_and_orders_projects() {
    let server = MockServer::start_async().await;

    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(RUN_QUERY_PATH)
                .query_param("key", "test-key")
                .json_body(json!({
                    "structuredQuery": {
                        "from": [{ "collectionId": "projects" }],
                        "orderBy": [{ "field": { "fieldPath": "year" }, "direction": "ASCENDING" }]
                    }
                }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    project_document("later", "Dashboard", "2024", "Web"),
                    project_document("earlier", "Shop App", "2021", "Android")
                ]));
        })
        .await;

    let reader = CollectionReader::new(client_for(&server));
    let projects: Vec<Project> = reader
        .load_ordered(&CollectionSpec::for_document::<Project>("projects"))
        .await
        .expect("query should succeed");

    api_mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "earlier");
    assert_eq!(projects[0].kind, ProjectType::Android);
    assert_eq!(projects[0].tech, vec!["Kotlin"]);
    assert_eq!(projects[1].id, "later");
    assert_eq!(projects[1].year, 2024);
}

#[tokio::test]
async fn test_read_time_only_response_is_empty() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(RUN_QUERY_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{ "readTime": "2024-06-01T00:00:00Z" }]));
        })
        .await;

    let links: Vec<SocialLink> = CollectionReader::new(client_for(&server))
        .load_ordered(&CollectionSpec::for_document::<SocialLink>("socialLinks"))
        .await
        .expect("empty collection is not an error");

    assert!(links.is_empty());
}

#[tokio::test]
async fn test_permission_denied_is_status_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(RUN_QUERY_PATH);
            then.status(403)
                .header("content-type", "application/json")
                .json_body(json!([{
                    "error": {
                        "code": 403,
                        "message": "Missing or insufficient permissions.",
                        "status": "PERMISSION_DENIED"
                    }
                }]));
        })
        .await;

    let err = CollectionReader::new(client_for(&server))
        .load_ordered::<SocialLink>(&CollectionSpec::for_document::<SocialLink>("socialLinks"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RetrievalError::Status {
            collection: "socialLinks".to_string(),
            status: 403,
            message: "PERMISSION_DENIED: Missing or insufficient permissions.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(RUN_QUERY_PATH);
            then.status(200).body("<html>captive portal</html>");
        })
        .await;

    let err = CollectionReader::new(client_for(&server))
        .load_ordered::<Project>(&CollectionSpec::for_document::<Project>("projects"))
        .await
        .unwrap_err();

    assert!(matches!(err, RetrievalError::Malformed { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = FirestoreClient::new(&FirestoreConfig {
        project_id: "demo".to_string(),
        endpoint: "http://127.0.0.1:9".to_string(),
        ..FirestoreConfig::default()
    });

    let err = CollectionReader::new(client)
        .load_ordered::<Project>(&CollectionSpec::for_document::<Project>("projects"))
        .await
        .unwrap_err();

    assert!(matches!(err, RetrievalError::Transport { .. }));
}
