//! Firestore REST Client
//!
//! Runs structured queries through `documents:runQuery`. Works in the
//! browser (reqwest's fetch backend) and natively.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::value::decode_fields;
use crate::config::FirestoreConfig;
use crate::error::RetrievalError;
use crate::repository::{DocumentSource, RawDocument, StructuredQuery};

/// Characters escaped in project and database path segments.
/// Parentheses stay literal so `(default)` reads as Firestore expects.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Handle to one Firestore database; cheap to clone
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: Client,
    run_query_url: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    pub fn new(config: &FirestoreConfig) -> Self {
        Self::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: &FirestoreConfig) -> Self {
        let run_query_url = format!(
            "{}/projects/{}/databases/{}/documents:runQuery",
            config.endpoint.trim_end_matches('/'),
            utf8_percent_encode(config.project_id.trim(), PATH_SEGMENT),
            utf8_percent_encode(config.database.trim(), PATH_SEGMENT),
        );
        let api_key = Some(config.api_key.trim())
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        Self {
            http,
            run_query_url,
            api_key,
        }
    }

    pub fn run_query_url(&self) -> &str {
        &self.run_query_url
    }
}

// ========================
// Wire Shapes
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryRequest<'a> {
    structured_query: &'a StructuredQuery,
}

/// One element of the streamed response. A result-less query still
/// answers with a single element carrying only `readTime`.
#[derive(Deserialize)]
struct RunQueryResponse {
    #[serde(default)]
    document: Option<FirestoreDocument>,
}

#[derive(Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Error body; `runQuery` wraps the envelope in an array. `Many` goes first
/// because a struct also deserializes from a sequence.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Many(Vec<ErrorEnvelope>),
    One(ErrorEnvelope),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ServiceError,
}

#[derive(Deserialize)]
struct ServiceError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Pull the service's message out of an error body, which may be a single
/// envelope or an array of them
fn service_message(body: &str) -> String {
    let envelope = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Many(all)) => all.into_iter().next(),
        Ok(ErrorBody::One(one)) => Some(one),
        Err(_) => None,
    };

    match envelope {
        Some(ErrorEnvelope { error }) => match error.status {
            Some(status) => format!("{}: {}", status, error.message),
            None => error.message,
        },
        None => body.chars().take(200).collect(),
    }
}

/// Last path segment of `projects/p/databases/d/documents/coll/ID`
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

#[async_trait(?Send)]
impl DocumentSource for FirestoreClient {
    async fn run_query(&self, query: &StructuredQuery) -> Result<Vec<RawDocument>, RetrievalError> {
        let collection = query.collection();

        let mut request = self
            .http
            .post(&self.run_query_url)
            .json(&RunQueryRequest { structured_query: query });
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RetrievalError::transport(collection, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RetrievalError::transport(collection, e))?;

        if !status.is_success() {
            return Err(RetrievalError::Status {
                collection: collection.to_string(),
                status: status.as_u16(),
                message: service_message(&body),
            });
        }

        let entries: Vec<RunQueryResponse> =
            serde_json::from_str(&body).map_err(|e| RetrievalError::malformed(collection, e))?;

        entries
            .into_iter()
            .filter_map(|entry| entry.document)
            .map(|doc| {
                let fields = decode_fields(&doc.fields)
                    .map_err(|e| RetrievalError::malformed(collection, e))?;
                Ok(RawDocument::new(document_id(&doc.name), fields))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(project_id: &str, api_key: &str) -> FirestoreConfig {
        FirestoreConfig {
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
            ..FirestoreConfig::default()
        }
    }

    #[test]
    fn test_run_query_url() {
        let client = FirestoreClient::new(&config("my-portfolio", "k"));
        assert_eq!(
            client.run_query_url(),
            "https://firestore.googleapis.com/v1/projects/my-portfolio/databases/(default)/documents:runQuery"
        );
    }

    #[test]
    fn test_blank_api_key_is_not_sent() {
        let client = FirestoreClient::new(&config("p", "   "));
        assert_eq!(client.api_key, None);
    }

    #[test]
    fn test_document_id() {
        assert_eq!(
            document_id("projects/p/databases/(default)/documents/projects/abc123"),
            "abc123"
        );
        assert_eq!(document_id("abc"), "abc");
    }

    #[test]
    fn test_service_message_shapes() {
        let single = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
        let streamed = r#"[{"error":{"code":404,"message":"Project not found"}}]"#;

        assert_eq!(
            service_message(single),
            "PERMISSION_DENIED: Missing or insufficient permissions."
        );
        assert_eq!(service_message(streamed), "Project not found");
        assert_eq!(service_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_streamed_error_keeps_status_and_message() {
        let streamed = r#"[{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}]"#;
        assert_eq!(
            service_message(streamed),
            "PERMISSION_DENIED: Missing or insufficient permissions."
        );
        assert_eq!(service_message("[]"), "[]");
    }
}
