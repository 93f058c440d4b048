//! Firestore Value Codec
//!
//! Firestore's REST API wraps every field in a one-key object naming its
//! type (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). Decoding
//! strips that wrapping down to plain JSON so records deserialize with serde.

use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("field `{0}`: expected a typed value object")]
    NotTyped(String),

    #[error("field `{field}`: unknown value type `{kind}`")]
    UnknownType { field: String, kind: String },

    #[error("field `{field}`: invalid {kind} `{raw}`")]
    Invalid {
        field: String,
        kind: &'static str,
        raw: String,
    },
}

/// Decode a document's `fields` map
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>, DecodeError> {
    fields
        .iter()
        .map(|(name, value)| Ok((name.clone(), decode_value(name, value)?)))
        .collect()
}

/// Decode one typed value; `path` names it in errors
pub fn decode_value(path: &str, value: &Value) -> Result<Value, DecodeError> {
    let typed = value
        .as_object()
        .filter(|obj| obj.len() == 1)
        .ok_or_else(|| DecodeError::NotTyped(path.to_string()))?;
    let Some((kind, inner)) = typed.iter().next() else {
        return Err(DecodeError::NotTyped(path.to_string()));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| invalid(path, "boolean", inner)),
        "integerValue" => decode_integer(path, inner),
        "doubleValue" => decode_double(path, inner),
        "stringValue" | "timestampValue" | "bytesValue" | "referenceValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| invalid(path, "string", inner)),
        "geoPointValue" => {
            let point = inner.as_object().ok_or_else(|| invalid(path, "geo point", inner))?;
            let coordinate = |key: &str| point.get(key).cloned().unwrap_or_else(|| Value::from(0.0));
            let mut decoded = Map::new();
            decoded.insert("latitude".to_string(), coordinate("latitude"));
            decoded.insert("longitude".to_string(), coordinate("longitude"));
            Ok(Value::Object(decoded))
        }
        "arrayValue" => {
            // An empty array arrives as `{}` with no `values` key
            let values = match inner.get("values") {
                None => return Ok(Value::Array(Vec::new())),
                Some(values) => values.as_array().ok_or_else(|| invalid(path, "array", inner))?,
            };
            values
                .iter()
                .enumerate()
                .map(|(i, item)| decode_value(&format!("{}[{}]", path, i), item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => {
            let fields = match inner.get("fields") {
                None => return Ok(Value::Object(Map::new())),
                Some(fields) => fields.as_object().ok_or_else(|| invalid(path, "map", inner))?,
            };
            fields
                .iter()
                .map(|(name, value)| Ok((name.clone(), decode_value(&format!("{}.{}", path, name), value)?)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object)
        }
        other => Err(DecodeError::UnknownType {
            field: path.to_string(),
            kind: other.to_string(),
        }),
    }
}

/// int64 travels as a decimal string
fn decode_integer(path: &str, inner: &Value) -> Result<Value, DecodeError> {
    let parsed = match inner {
        Value::String(s) => s.parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed
        .map(|n| Value::Number(n.into()))
        .ok_or_else(|| invalid(path, "integer", inner))
}

/// NaN and the infinities arrive as strings and have no JSON form
fn decode_double(path: &str, inner: &Value) -> Result<Value, DecodeError> {
    match inner {
        Value::Number(n) => Ok(Value::Number(n.clone())),
        Value::String(s) if matches!(s.as_str(), "NaN" | "Infinity" | "-Infinity") => Ok(Value::Null),
        Value::String(s) => s
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| invalid(path, "double", inner)),
        _ => Err(invalid(path, "double", inner)),
    }
}

fn invalid(path: &str, kind: &'static str, raw: &Value) -> DecodeError {
    DecodeError::Invalid {
        field: path.to_string(),
        kind,
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_project_fields() {
        let fields = json!({
            "title": { "stringValue": "Task Dashboard" },
            "year": { "integerValue": "2024" },
            "rating": { "doubleValue": 4.5 },
            "featured": { "booleanValue": true },
            "liveUrl": { "nullValue": null },
            "tech": { "arrayValue": { "values": [
                { "stringValue": "React" },
                { "stringValue": "TypeScript" }
            ]}},
            "meta": { "mapValue": { "fields": {
                "stars": { "integerValue": "12" }
            }}}
        });

        let decoded = decode_fields(fields.as_object().unwrap()).unwrap();

        assert_eq!(
            Value::Object(decoded),
            json!({
                "title": "Task Dashboard",
                "year": 2024,
                "rating": 4.5,
                "featured": true,
                "liveUrl": null,
                "tech": ["React", "TypeScript"],
                "meta": { "stars": 12 }
            })
        );
    }

    #[test]
    fn test_double_stored_order_still_loads() {
        use crate::domain::{ContactInfo, SocialLink};
        use crate::repository::RawDocument;

        let fields = json!({
            "label": { "stringValue": "github" },
            "href": { "stringValue": "https://github.com/ajith" },
            "order": { "doubleValue": 1.0 }
        });
        let decoded = decode_fields(fields.as_object().unwrap()).unwrap();

        let link: SocialLink = RawDocument::new("gh", decoded)
            .into_record("socialLinks")
            .unwrap();
        assert_eq!(link.order, 1);

        let fields = json!({
            "label": { "stringValue": "Email" },
            "value": { "stringValue": "me@example.com" },
            "order": { "doubleValue": 2.5 }
        });
        let decoded = decode_fields(fields.as_object().unwrap()).unwrap();
        assert!(RawDocument::new("mail", decoded)
            .into_record::<ContactInfo>("contactInfo")
            .is_err());
    }

    #[test]
    fn test_empty_array_and_map() {
        assert_eq!(decode_value("tech", &json!({ "arrayValue": {} })).unwrap(), json!([]));
        assert_eq!(decode_value("meta", &json!({ "mapValue": {} })).unwrap(), json!({}));
    }

    #[test]
    fn test_special_doubles_become_null() {
        assert_eq!(decode_value("x", &json!({ "doubleValue": "NaN" })).unwrap(), Value::Null);
        assert_eq!(decode_value("x", &json!({ "doubleValue": "Infinity" })).unwrap(), Value::Null);
    }

    #[test]
    fn test_timestamp_and_geo_point() {
        assert_eq!(
            decode_value("at", &json!({ "timestampValue": "2024-05-01T10:00:00Z" })).unwrap(),
            json!("2024-05-01T10:00:00Z")
        );
        assert_eq!(
            decode_value("where", &json!({ "geoPointValue": { "latitude": 37.7 } })).unwrap(),
            json!({ "latitude": 37.7, "longitude": 0.0 })
        );
    }

    #[test]
    fn test_bad_integer_names_the_nested_field() {
        let err = decode_value(
            "tech",
            &json!({ "arrayValue": { "values": [{ "integerValue": "twelve" }] } }),
        )
        .unwrap_err();

        assert_eq!(
            err,
            DecodeError::Invalid {
                field: "tech[0]".to_string(),
                kind: "integer",
                raw: "\"twelve\"".to_string(),
            }
        );
    }

    #[test]
    fn test_untyped_and_unknown_values_are_errors() {
        assert_eq!(
            decode_value("title", &json!("plain")),
            Err(DecodeError::NotTyped("title".to_string()))
        );
        assert!(matches!(
            decode_value("title", &json!({ "blobValue": "x" })),
            Err(DecodeError::UnknownType { .. })
        ));
    }
}
