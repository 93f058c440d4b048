//! Site Configuration
//!
//! `site.toml` is embedded into the bundle at build time. Secrets can be
//! kept out of it and supplied through build-time environment overrides.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub firestore: FirestoreConfig,
    pub collections: CollectionNames,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Name typed out in the hero and shown in the footer
    pub owner: String,
    pub role: String,
    pub resume_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            owner: "Ajith Goveas".to_string(),
            role: "Android Developer & Frontend Engineer".to_string(),
            resume_url: "/resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    pub project_id: String,
    /// Browser API key; Firebase web keys are not secret
    pub api_key: String,
    pub database: String,
    pub endpoint: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl FirestoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.project_id.trim().is_empty()
    }
}

/// Remote collection names
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollectionNames {
    pub social_links: String,
    pub projects: String,
    pub contact_info: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            social_links: "socialLinks".to_string(),
            projects: "projects".to_string(),
            contact_info: "contactInfo".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "logging.level",
            message: format!("unknown level `{}`", self.level),
        })
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply build-time overrides; blank values are ignored
    pub fn with_overrides(mut self, project_id: Option<&str>, api_key: Option<&str>) -> Self {
        if let Some(project_id) = project_id.map(str::trim).filter(|v| !v.is_empty()) {
            self.firestore.project_id = project_id.to_string();
        }
        if let Some(api_key) = api_key.map(str::trim).filter(|v| !v.is_empty()) {
            self.firestore.api_key = api_key.to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.firestore.endpoint;
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                key: "firestore.endpoint",
                message: format!("`{}` is not an http(s) URL", endpoint),
            });
        }
        if self.firestore.database.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "firestore.database",
                message: "must not be empty".to_string(),
            });
        }

        let names = [
            ("collections.social_links", &self.collections.social_links),
            ("collections.projects", &self.collections.projects),
            ("collections.contact_info", &self.collections.contact_info),
        ];
        for (key, name) in names {
            if name.trim().is_empty() || name.contains('/') {
                return Err(ConfigError::Invalid {
                    key,
                    message: format!("`{}` is not a collection id", name),
                });
            }
        }

        self.logging.level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(!config.firestore.is_configured());
        assert_eq!(config.collections.social_links, "socialLinks");
    }

    #[test]
    fn test_partial_file() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
owner = "Jane Doe"

[firestore]
project_id = "jane-portfolio"

[collections]
projects = "work"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.site.owner, "Jane Doe");
        assert_eq!(config.site.resume_url, "/resume.pdf");
        assert!(config.firestore.is_configured());
        assert_eq!(config.firestore.database, "(default)");
        assert_eq!(config.collections.projects, "work");
        assert_eq!(config.collections.contact_info, "contactInfo");
        assert_eq!(config.logging.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            SiteConfig::from_toml_str("[firestore]\nendpoint = \"ftp://x\""),
            Err(ConfigError::Invalid { key: "firestore.endpoint", .. })
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[collections]\nprojects = \"a/b\""),
            Err(ConfigError::Invalid { key: "collections.projects", .. })
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[logging]\nlevel = \"loud\""),
            Err(ConfigError::Invalid { key: "logging.level", .. })
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[firestore"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let config = SiteConfig::default().with_overrides(Some("from-env"), Some("  "));
        assert_eq!(config.firestore.project_id, "from-env");
        assert_eq!(config.firestore.api_key, "");
    }
}
