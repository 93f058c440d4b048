//! Project Filters
//!
//! Category filtering happens over the already-loaded list; changing the
//! filter never touches the network.

use crate::domain::{Project, ProjectType};
use crate::icons::Icon;

pub const ALL_FILTER: &str = "all";

/// A filter-bar button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFilter {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// `all` first, then one per known category
pub const FILTERS: &[ProjectFilter] = &[
    ProjectFilter { id: ALL_FILTER, label: "All Projects", icon: Icon::CodeCircle },
    ProjectFilter { id: "android", label: "Android", icon: Icon::Android },
    ProjectFilter { id: "web", label: "Web", icon: Icon::World },
    ProjectFilter { id: "crossplatform", label: "Cross Platform", icon: Icon::ArrowsCross },
    ProjectFilter { id: "frontend", label: "Frontend", icon: Icon::DeviceDesktop },
    ProjectFilter { id: "fullstack", label: "FullStack", icon: Icon::Stack },
    ProjectFilter { id: "backend", label: "Backend", icon: Icon::Server },
    ProjectFilter { id: "desktop", label: "Desktop", icon: Icon::DeviceLaptop },
    ProjectFilter { id: "datascience", label: "Data Science", icon: Icon::Database },
    ProjectFilter { id: "machinelearning", label: "Machine Learning", icon: Icon::Brain },
    ProjectFilter { id: "ai", label: "AI", icon: Icon::Sparkles },
];

/// Does `kind` pass the filter with id `filter_id` (case-insensitive)?
pub fn matches_filter(kind: &ProjectType, filter_id: &str) -> bool {
    filter_id.eq_ignore_ascii_case(ALL_FILTER)
        || kind
            .filter_id()
            .is_some_and(|id| id.eq_ignore_ascii_case(filter_id))
}

/// Projects passing `filter_id`, in their loaded order
pub fn filter_projects(projects: &[Project], filter_id: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| matches_filter(&project.kind, filter_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(id: &str, kind: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: String::new(),
            year: 2024,
            tech: vec![],
            kind: ProjectType::parse(kind),
            github_url: None,
            live_url: None,
        }
    }

    #[test]
    fn test_filter_android() {
        let projects = vec![
            make_project("1", "Android"),
            make_project("2", "Web"),
            make_project("3", "android"),
            make_project("4", "Frontend"),
        ];

        let filtered = filter_projects(&projects, "android");
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_all_is_unchanged() {
        let projects = vec![
            make_project("1", "Web"),
            make_project("2", "Embedded"),
            make_project("3", "Android"),
        ];
        assert_eq!(filter_projects(&projects, "all"), projects);
    }

    #[test]
    fn test_filter_on_empty_list() {
        for filter in FILTERS {
            assert!(filter_projects(&[], filter.id).is_empty());
        }
    }

    #[test]
    fn test_unknown_category_only_matches_all() {
        let kind = ProjectType::parse("Embedded");
        assert!(matches_filter(&kind, "all"));
        assert!(FILTERS[1..].iter().all(|f| !matches_filter(&kind, f.id)));
    }

    #[test]
    fn test_every_known_category_has_a_filter() {
        for kind in ProjectType::KNOWN.iter() {
            let id = kind.filter_id().unwrap();
            assert!(FILTERS.iter().any(|f| f.id == id), "{}", id);
        }
    }
}
