//! Project Record
//!
//! A showcased project plus its category. Categories are stored as free text
//! by content authors, so parsing is lenient and never fails the read.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::entity::Document;
use super::sort_key::IntegralNumber;
use crate::icons::Icon;

/// Project category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Android,
    Web,
    CrossPlatform,
    Frontend,
    FullStack,
    Backend,
    Desktop,
    DataScience,
    MachineLearning,
    Ai,
    /// Anything the site has no styling for; kept verbatim
    Other(String),
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Other(String::new())
    }
}

impl ProjectType {
    /// Known categories, in filter-bar order
    pub const KNOWN: [ProjectType; 10] = [
        ProjectType::Android,
        ProjectType::Web,
        ProjectType::CrossPlatform,
        ProjectType::Frontend,
        ProjectType::FullStack,
        ProjectType::Backend,
        ProjectType::Desktop,
        ProjectType::DataScience,
        ProjectType::MachineLearning,
        ProjectType::Ai,
    ];

    /// Case-insensitive, ignoring spaces, hyphens and underscores
    pub fn parse(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::KNOWN
            .iter()
            .find(|known| known.filter_id() == Some(key.as_str()))
            .cloned()
            .unwrap_or_else(|| ProjectType::Other(raw.trim().to_string()))
    }

    /// Canonical stored name
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Android => "Android",
            ProjectType::Web => "Web",
            ProjectType::CrossPlatform => "CrossPlatform",
            ProjectType::Frontend => "Frontend",
            ProjectType::FullStack => "FullStack",
            ProjectType::Backend => "Backend",
            ProjectType::Desktop => "Desktop",
            ProjectType::DataScience => "DataScience",
            ProjectType::MachineLearning => "MachineLearning",
            ProjectType::Ai => "AI",
            ProjectType::Other(raw) => raw,
        }
    }

    /// Human label for badges and filter buttons
    pub fn label(&self) -> &str {
        match self {
            ProjectType::CrossPlatform => "Cross Platform",
            ProjectType::DataScience => "Data Science",
            ProjectType::MachineLearning => "Machine Learning",
            other => other.as_str(),
        }
    }

    /// Id used by the project filter bar; `None` for unknown categories
    pub fn filter_id(&self) -> Option<&'static str> {
        match self {
            ProjectType::Android => Some("android"),
            ProjectType::Web => Some("web"),
            ProjectType::CrossPlatform => Some("crossplatform"),
            ProjectType::Frontend => Some("frontend"),
            ProjectType::FullStack => Some("fullstack"),
            ProjectType::Backend => Some("backend"),
            ProjectType::Desktop => Some("desktop"),
            ProjectType::DataScience => Some("datascience"),
            ProjectType::MachineLearning => Some("machinelearning"),
            ProjectType::Ai => Some("ai"),
            ProjectType::Other(_) => None,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ProjectType::Android => Icon::Android,
            ProjectType::Web => Icon::World,
            ProjectType::CrossPlatform => Icon::ArrowsCross,
            ProjectType::Frontend => Icon::DeviceDesktop,
            ProjectType::FullStack | ProjectType::Other(_) => Icon::Stack,
            ProjectType::Backend => Icon::Server,
            ProjectType::Desktop => Icon::DeviceLaptop,
            ProjectType::DataScience => Icon::Database,
            ProjectType::MachineLearning => Icon::Brain,
            ProjectType::Ai => Icon::Sparkles,
        }
    }

    /// Colour token; unknown categories borrow the FullStack tone
    pub fn tone(&self) -> &'static str {
        match self {
            ProjectType::Android => "green",
            ProjectType::Web => "cyan",
            ProjectType::CrossPlatform => "purple",
            ProjectType::Frontend => "orange",
            ProjectType::FullStack | ProjectType::Other(_) => "blue",
            ProjectType::Backend => "rose",
            ProjectType::Desktop => "lime",
            ProjectType::DataScience => "fuchsia",
            ProjectType::MachineLearning => "indigo",
            ProjectType::Ai => "pink",
        }
    }
}

impl From<String> for ProjectType {
    fn from(raw: String) -> Self {
        ProjectType::parse(&raw)
    }
}

impl From<ProjectType> for String {
    fn from(kind: ProjectType) -> Self {
        kind.as_str().to_string()
    }
}

/// A portfolio project
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "IntegralNumber")]
    pub year: i64,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl Document for Project {
    const ORDER_FIELD: &'static str = "year";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> i64 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_project_type() {
        assert_eq!(ProjectType::parse("Android"), ProjectType::Android);
        assert_eq!(ProjectType::parse("android"), ProjectType::Android);
        assert_eq!(ProjectType::parse("Cross-Platform"), ProjectType::CrossPlatform);
        assert_eq!(ProjectType::parse("machine learning"), ProjectType::MachineLearning);
        assert_eq!(ProjectType::parse("AI"), ProjectType::Ai);
        assert_eq!(
            ProjectType::parse("Embedded"),
            ProjectType::Other("Embedded".to_string())
        );
    }

    #[test]
    fn test_deserialize_project() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Weather App",
            "description": "Forecasts",
            "year": 2023,
            "tech": ["Kotlin", "Room"],
            "type": "Cross-Platform",
            "githubUrl": "https://github.com/me/weather"
        }))
        .unwrap();

        assert_eq!(project.kind, ProjectType::CrossPlatform);
        assert_eq!(project.tech, vec!["Kotlin", "Room"]);
        assert_eq!(project.github_url.as_deref(), Some("https://github.com/me/weather"));
        assert_eq!(project.live_url, None);
        assert_eq!(project.sort_key(), 2023);
    }

    #[test]
    fn test_missing_type_and_tech_default() {
        let project: Project = serde_json::from_value(json!({
            "id": "p2", "title": "Untyped", "year": "2021"
        }))
        .unwrap();

        assert_eq!(project.year, 2021);
        assert!(project.tech.is_empty());
        assert_eq!(project.kind.filter_id(), None);
    }

    #[test]
    fn test_year_stored_as_double() {
        let project: Project = serde_json::from_value(json!({
            "id": "p3", "title": "Console Entry", "year": 2022.0
        }))
        .unwrap();

        assert_eq!(project.sort_key(), 2022);
        assert_eq!(serde_json::to_value(&project).unwrap()["year"], json!(2022));
    }

    #[test]
    fn test_serialize_uses_canonical_type() {
        let value = serde_json::to_value(ProjectType::CrossPlatform).unwrap();
        assert_eq!(value, json!("CrossPlatform"));
    }
}
