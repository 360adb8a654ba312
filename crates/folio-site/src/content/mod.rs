//! Static content tables.
//!
//! Everything here is immutable display data. Slice order is display order.

mod about;
mod contact;
mod decor;
mod hero;
mod projects;
mod skills;

pub use about::*;
pub use contact::*;
pub use decor::*;
pub use hero::*;
pub use projects::*;
pub use skills::*;

/// Opaque icon reference, resolved to a glyph when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Server,
    Database,
    Cloud,
    React,
    NodeJs,
    TypeScript,
    Tailwind,
    MongoDb,
    Express,
    JavaScript,
    Html5,
    Css3,
    Framer,
    GitHub,
    LinkedIn,
    Twitter,
    Mail,
    MapPin,
    Phone,
    Heart,
    Coffee,
    Book,
    Send,
    Check,
    External,
}

impl Icon {
    /// Returns the glyph drawn for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Server => "▤",
            Icon::Database | Icon::MongoDb => "⛁",
            Icon::Cloud => "☁",
            Icon::React => "⚛",
            Icon::NodeJs => "⬢",
            Icon::TypeScript => "TS",
            Icon::Tailwind => "≋",
            Icon::Express => "ex",
            Icon::JavaScript => "JS",
            Icon::Html5 => "5",
            Icon::Css3 => "3",
            Icon::Framer => "◈",
            Icon::GitHub => "⌥",
            Icon::LinkedIn => "in",
            Icon::Twitter => "𝕏",
            Icon::Mail => "✉",
            Icon::MapPin => "⌖",
            Icon::Phone => "☎",
            Icon::Heart => "♥",
            Icon::Coffee => "☕",
            Icon::Book => "❐",
            Icon::Send => "➤",
            Icon::Check => "✓",
            Icon::External => "↗",
        }
    }

    /// Returns the CSS class suffix for this icon.
    pub fn css_name(self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::Cloud => "cloud",
            Icon::React => "react",
            Icon::NodeJs => "nodejs",
            Icon::TypeScript => "typescript",
            Icon::Tailwind => "tailwind",
            Icon::MongoDb => "mongodb",
            Icon::Express => "express",
            Icon::JavaScript => "javascript",
            Icon::Html5 => "html5",
            Icon::Css3 => "css3",
            Icon::Framer => "framer",
            Icon::GitHub => "github",
            Icon::LinkedIn => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Phone => "phone",
            Icon::Heart => "heart",
            Icon::Coffee => "coffee",
            Icon::Book => "book",
            Icon::Send => "send",
            Icon::Check => "check",
            Icon::External => "external",
        }
    }
}

/// A headline number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(SKILL_BADGES.len(), 12);
        assert_eq!(SKILL_CATEGORIES.len(), 4);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(TIMELINE.len(), 5);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert_eq!(CONTACT_INFO.len(), 3);
        assert_eq!(ABOUT_ORBS.len(), 3);
    }

    #[test]
    fn test_timeline_in_display_order() {
        let years: Vec<_> = TIMELINE.iter().map(|step| step.year).collect();
        assert_eq!(years.first(), Some(&"2020"));
        assert_eq!(years.last(), Some(&"2024 →"));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_projects_have_titles_and_tech() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tech.is_empty());
        }
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 2);
    }

    #[test]
    fn test_project_images_exist() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for project in PROJECTS {
            if let Some(path) = project.image {
                assert!(
                    root.join(path).is_file(),
                    "{} points at missing image {path}",
                    project.title
                );
            }
        }
    }
}
