//! Structured Queries
//!
//! The subset of Firestore's `StructuredQuery` the site needs: one
//! collection, ordered by one field.

use serde::Serialize;

use crate::domain::Document;

/// Which collection to read and which field orders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    pub collection: String,
    pub order_by: String,
}

impl CollectionSpec {
    pub fn new(collection: impl Into<String>, order_by: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            order_by: order_by.into(),
        }
    }

    /// Spec for `T` stored under `collection`, ordered by `T::ORDER_FIELD`
    pub fn for_document<T: Document>(collection: impl Into<String>) -> Self {
        Self::new(collection, T::ORDER_FIELD)
    }

    pub fn to_query(&self) -> StructuredQuery {
        StructuredQuery {
            from: vec![CollectionSelector {
                collection_id: self.collection.clone(),
            }],
            order_by: vec![Order {
                field: FieldReference {
                    field_path: self.order_by.clone(),
                },
                direction: Direction::Ascending,
            }],
        }
    }
}

// ========================
// Wire Shapes
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    from: Vec<CollectionSelector>,
    order_by: Vec<Order>,
}

impl StructuredQuery {
    pub fn collection(&self) -> &str {
        self.from
            .first()
            .map(|selector| selector.collection_id.as_str())
            .unwrap_or_default()
    }

    pub fn order_field(&self) -> Option<&str> {
        self.order_by.first().map(|order| order.field.field_path.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Order {
    field: FieldReference,
    direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Ascending,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Project;
    use serde_json::json;

    #[test]
    fn test_query_wire_format() {
        let query = CollectionSpec::for_document::<Project>("projects").to_query();

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "from": [{ "collectionId": "projects" }],
                "orderBy": [{ "field": { "fieldPath": "year" }, "direction": "ASCENDING" }]
            })
        );
        assert_eq!(query.collection(), "projects");
        assert_eq!(query.order_field(), Some("year"));
    }
}
