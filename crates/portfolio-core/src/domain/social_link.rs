//! Social Link Record

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::entity::Document;
use super::sort_key::IntegralNumber;

/// Link to an external profile, shown as an icon button
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Authors sometimes store this as a string or a double
    #[serde_as(as = "IntegralNumber")]
    pub order: i64,
}

impl Document for SocialLink {
    const ORDER_FIELD: &'static str = "order";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> i64 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_accepts_number_or_string() {
        let from_number: SocialLink = serde_json::from_value(json!({
            "id": "a", "label": "github", "href": "https://github.com", "order": 2
        }))
        .unwrap();
        let from_string: SocialLink = serde_json::from_value(json!({
            "id": "a", "label": "github", "href": "https://github.com", "order": "2"
        }))
        .unwrap();

        assert_eq!(from_number.order, 2);
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.username, None);
    }

    #[test]
    fn test_missing_href_is_rejected() {
        let result = serde_json::from_value::<SocialLink>(json!({
            "id": "a", "label": "github", "order": 1
        }));
        assert!(result.is_err());
    }
}
