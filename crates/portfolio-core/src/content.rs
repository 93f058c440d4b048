//! Static Site Content
//!
//! Copy for the sections that are not backed by a collection, plus the
//! sample records served when the site runs without Firestore.

use crate::config::CollectionNames;
use crate::domain::{ContactInfo, Project, ProjectType, SocialLink};
use crate::icons::Icon;
use crate::repository::MemorySource;

/// Navigation anchors, in page order
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "hero"),
    ("About", "about"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

pub const HERO_TAGLINE: &str = "I build native mobile applications and modern web experiences. \
Passionate about clean code, user experience, and solving real-world problems through technology.";

/// (name, colour token)
pub const HERO_TECH: &[(&str, &str)] = &[
    ("Android", "green"),
    ("Kotlin", "purple"),
    ("React", "cyan"),
    ("TypeScript", "blue"),
    ("JavaScript", "yellow"),
];

/// (count, label)
pub const STATS: &[(&str, &str)] = &[
    ("3+", "Years of Development"),
    ("50+", "Projects Delivered"),
    ("25+", "Happy Clients"),
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate developer specializing in Android and Frontend web development. \
With expertise in modern technologies and frameworks, I create seamless user experiences across platforms.",
    "My journey in development has led me to work with cutting-edge technologies, always staying \
updated with the latest trends and best practices in the industry.",
];

pub const ABOUT_PHILOSOPHY: &str = "I believe in writing clean, maintainable code that solves real problems. \
Every project is an opportunity to learn something new and push the boundaries of what's possible with technology.";

pub const ABOUT_FOCUS: &str = "Exploring advanced Android architecture patterns and modern React frameworks \
to build even better user experiences.";

/// (label, description)
pub const ABOUT_HIGHLIGHTS: &[(&str, &str)] = &[
    ("Android Development", "Native apps with Kotlin"),
    ("Frontend Development", "Modern web experiences"),
    ("Backend Integration", "APIs and databases"),
    ("Problem Solving", "Clean, efficient solutions"),
];

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        icon: Icon::DeviceDesktop,
        skills: &["React", "TypeScript", "Next.js", "Tailwind CSS", "JavaScript"],
    },
    SkillCategory {
        title: "Android Development",
        icon: Icon::Android,
        skills: &["Kotlin", "Java", "Android SDK", "Jetpack Compose", "Room Database", "Retrofit"],
    },
    SkillCategory {
        title: "Tools & Technologies",
        icon: Icon::Stack,
        skills: &["Git", "Vite", "Firebase", "REST APIs"],
    },
];

// ========================
// Sample Records
// ========================

pub fn sample_social_links() -> Vec<SocialLink> {
    let link = |id: &str, label: &str, href: &str, username: &str, order| SocialLink {
        id: id.to_string(),
        label: label.to_string(),
        href: href.to_string(),
        username: Some(username.to_string()),
        order,
    };
    vec![
        link("github", "GitHub", "https://github.com", "@yourusername", 1),
        link("linkedin", "LinkedIn", "https://linkedin.com", "/in/yourname", 2),
        link("gmail", "Gmail", "mailto:your.email@example.com", "your.email@example.com", 3),
    ]
}

pub fn sample_projects() -> Vec<Project> {
    let project = |id: &str, title: &str, description: &str, year, tech: &[&str], kind| Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        year,
        tech: tech.iter().map(|t| t.to_string()).collect(),
        kind,
        github_url: Some("https://github.com".to_string()),
        live_url: None,
    };
    vec![
        project(
            "ecommerce-android",
            "E-Commerce Android App",
            "A full-featured Android e-commerce application built with Kotlin and Jetpack Compose, \
featuring real-time updates and seamless payment integration.",
            2022,
            &["Kotlin", "Jetpack Compose", "Room", "Retrofit"],
            ProjectType::Android,
        ),
        project(
            "task-dashboard",
            "Task Management Dashboard",
            "Modern web dashboard for project management with real-time collaboration, built using \
React and TypeScript with a clean, intuitive interface.",
            2023,
            &["React", "TypeScript", "Tailwind CSS", "Firebase"],
            ProjectType::Web,
        ),
        project(
            "weather-forecast",
            "Weather Forecast App",
            "Cross-platform weather application providing accurate forecasts with beautiful UI and \
smooth animations across Android and web platforms.",
            2024,
            &["React Native", "OpenWeather API", "Redux"],
            ProjectType::Frontend,
        ),
    ]
}

pub fn sample_contact_info() -> Vec<ContactInfo> {
    let info = |id: &str, label: &str, value: &str, description: &str, order| ContactInfo {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        order,
    };
    vec![
        info("email", "Email", "your.email@example.com", "Drop me a line anytime", 1),
        info("location", "Location", "San Francisco, CA", "Available for remote work", 2),
        info("response", "Response Time", "< 24 hours", "Usually much faster", 3),
    ]
}

/// In-memory source holding every sample collection
pub fn sample_source(names: &CollectionNames) -> MemorySource {
    MemorySource::new()
        .with_records(&names.social_links, &sample_social_links())
        .with_records(&names.projects, &sample_projects())
        .with_records(&names.contact_info, &sample_contact_info())
}
