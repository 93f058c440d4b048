//! Raw Documents
//!
//! A document as a plain JSON object plus the id it is stored under.
//! Converting to a typed record merges the id in as the `id` field.

use serde_json::{Map, Value};

use crate::domain::Document;
use crate::error::RetrievalError;

#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Store a typed record; its `id` becomes the document id, not a field
    pub fn from_record<T: Document>(record: &T) -> Result<Self, serde_json::Error> {
        let mut fields = match serde_json::to_value(record)? {
            Value::Object(fields) => fields,
            other => {
                let mut fields = Map::new();
                fields.insert("value".to_string(), other);
                fields
            }
        };
        fields.remove("id");
        Ok(Self::new(record.id(), fields))
    }

    /// Decode into `T`, tagging it with the document id
    pub fn into_record<T: Document>(self, collection: &str) -> Result<T, RetrievalError> {
        let RawDocument { id, mut fields } = self;
        fields.insert("id".to_string(), Value::String(id.clone()));
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| RetrievalError::malformed(collection, format!("document `{}`: {}", id, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SocialLink;
    use serde_json::json;

    #[test]
    fn test_id_is_merged_into_record() {
        let fields = json!({ "label": "github", "href": "https://github.com", "order": 1 });
        let doc = RawDocument::new("gh", fields.as_object().unwrap().clone());

        let link: SocialLink = doc.into_record("socialLinks").unwrap();
        assert_eq!(link.id, "gh");
        assert_eq!(link.label, "github");
    }

    #[test]
    fn test_document_id_wins_over_stored_id_field() {
        let fields = json!({ "id": "stale", "label": "x", "href": "#", "order": 1 });
        let doc = RawDocument::new("fresh", fields.as_object().unwrap().clone());

        let link: SocialLink = doc.into_record("socialLinks").unwrap();
        assert_eq!(link.id, "fresh");
    }

    #[test]
    fn test_undecodable_document_is_malformed() {
        let fields = json!({ "label": "github" });
        let doc = RawDocument::new("gh", fields.as_object().unwrap().clone());

        let err = doc.into_record::<SocialLink>("socialLinks").unwrap_err();
        assert!(matches!(err, RetrievalError::Malformed { ref collection, .. } if collection == "socialLinks"));
    }

    #[test]
    fn test_from_record_strips_id() {
        let link = SocialLink {
            id: "li".to_string(),
            label: "linkedin".to_string(),
            href: "https://linkedin.com".to_string(),
            username: None,
            order: 2,
        };
        let doc = RawDocument::from_record(&link).unwrap();

        assert_eq!(doc.id, "li");
        assert!(!doc.fields.contains_key("id"));
        assert_eq!(doc.into_record::<SocialLink>("socialLinks").unwrap(), link);
    }
}
