//! Skills grid and rated skill categories.

use super::Icon;

/// A technology badge in the skills grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillBadge {
    pub name: &'static str,
    pub icon: Icon,
    /// CSS colour for the icon.
    pub tint: &'static str,
}

/// A skill with a proficiency rating out of 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillLevel {
    pub name: &'static str,
    pub level: u8,
    pub tint: &'static str,
}

/// A group of rated skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub skills: &'static [SkillLevel],
}

pub static SKILL_BADGES: &[SkillBadge] = &[
    SkillBadge { name: "React", icon: Icon::React, tint: "#60a5fa" },
    SkillBadge { name: "Node.js", icon: Icon::NodeJs, tint: "#22c55e" },
    SkillBadge { name: "TypeScript", icon: Icon::TypeScript, tint: "#2563eb" },
    SkillBadge { name: "Tailwind CSS", icon: Icon::Tailwind, tint: "#22d3ee" },
    SkillBadge { name: "MongoDB", icon: Icon::MongoDb, tint: "#16a34a" },
    SkillBadge { name: "Express", icon: Icon::Express, tint: "#9ca3af" },
    SkillBadge { name: "JavaScript", icon: Icon::JavaScript, tint: "#facc15" },
    SkillBadge { name: "HTML5", icon: Icon::Html5, tint: "#f97316" },
    SkillBadge { name: "CSS3", icon: Icon::Css3, tint: "#3b82f6" },
    SkillBadge { name: "Framer Motion", icon: Icon::Framer, tint: "#a855f7" },
    SkillBadge { name: "Database", icon: Icon::Database, tint: "#818cf8" },
    SkillBadge { name: "GitHub", icon: Icon::GitHub, tint: "#6b7280" },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: Icon::Code,
        description: "Crafting beautiful, responsive user interfaces",
        skills: &[
            SkillLevel { name: "React", level: 95, tint: "#3b82f6" },
            SkillLevel { name: "TypeScript", level: 90, tint: "#2563eb" },
            SkillLevel { name: "Next.js", level: 80, tint: "#1f2937" },
            SkillLevel { name: "Tailwind CSS", level: 92, tint: "#06b6d4" },
            SkillLevel { name: "Framer Motion", level: 85, tint: "#ec4899" },
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: Icon::Server,
        description: "Building robust server-side solutions",
        skills: &[
            SkillLevel { name: "Node.js", level: 90, tint: "#22c55e" },
            SkillLevel { name: "Express.js", level: 88, tint: "#374151" },
            SkillLevel { name: "Python", level: 85, tint: "#eab308" },
            SkillLevel { name: "GraphQL", level: 80, tint: "#db2777" },
            SkillLevel { name: "REST APIs", level: 92, tint: "#f97316" },
        ],
    },
    SkillCategory {
        title: "Database",
        icon: Icon::Database,
        description: "Managing and optimizing data storage",
        skills: &[
            SkillLevel { name: "MongoDB", level: 88, tint: "#16a34a" },
            SkillLevel { name: "MySQL", level: 85, tint: "#1d4ed8" },
            SkillLevel { name: "Redis", level: 80, tint: "#ef4444" },
            SkillLevel { name: "Prisma", level: 82, tint: "#4f46e5" },
            SkillLevel { name: "Firebase", level: 78, tint: "#ca8a04" },
        ],
    },
    SkillCategory {
        title: "DevOps",
        icon: Icon::Cloud,
        description: "Deploying and scaling applications",
        skills: &[
            SkillLevel { name: "Docker", level: 82, tint: "#2563eb" },
            SkillLevel { name: "AWS", level: 78, tint: "#ea580c" },
            SkillLevel { name: "Vercel", level: 90, tint: "#111827" },
            SkillLevel { name: "Git", level: 95, tint: "#c2410c" },
            SkillLevel { name: "CI/CD", level: 75, tint: "#9333ea" },
        ],
    },
];
