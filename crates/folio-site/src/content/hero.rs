//! Hero banner copy.

use super::Stat;

/// Text shown in the hero banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroCopy {
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
}

pub static HERO: HeroCopy = HeroCopy {
    greeting: "Hello, I'm",
    name: "Alex Carter",
    role: "Full Stack Developer",
    intro: "I design and build fast, accessible web applications, from the first sketch to production.",
};

pub static HERO_STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "20+", label: "Technologies" },
    Stat { value: "100%", label: "Client Satisfaction" },
];

pub static TECH_STACK: &[&str] = &[
    "JavaScript",
    "HTML5",
    "CSS3",
    "Sass",
    "Webpack",
    "Vite",
    "Jest",
    "Cypress",
    "Figma",
    "Adobe XD",
    "Notion",
    "Slack",
];
