//! Contact Info Record

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::entity::Document;
use super::sort_key::IntegralNumber;

/// One row of the contact card (email, location, response time...)
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "IntegralNumber")]
    pub order: i64,
}

impl Document for ContactInfo {
    const ORDER_FIELD: &'static str = "order";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> i64 {
        self.order
    }
}
