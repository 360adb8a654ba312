//! Biography, timeline and passions for the about section.

use super::{Icon, Stat};

/// One step on the career timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineStep {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Something the author cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passion {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static ABOUT_BIO: &[&str] = &[
    "I'm a Full Stack Developer passionate about crafting digital experiences that are both beautiful and performant.",
    "With expertise spanning React, Node.js, TypeScript, and modern databases, I build products end-to-end, from pixel-perfect interfaces to robust backend systems.",
    "I believe great software is a conversation between technology and human behavior. Every line of code I write is guided by that principle.",
    "Outside of work, I explore creative coding, contribute to open source, and constantly experiment with emerging technologies.",
];

pub static ABOUT_STATS: &[Stat] = &[
    Stat { value: "4+", label: "Years Exp." },
    Stat { value: "30+", label: "Projects Built" },
    Stat { value: "15+", label: "Happy Clients" },
];

pub static TIMELINE: &[TimelineStep] = &[
    TimelineStep {
        year: "2020",
        title: "Started the Journey",
        description: "Wrote my first line of code. Became obsessed with building things for the web.",
    },
    TimelineStep {
        year: "2021",
        title: "Dove Deep into React",
        description: "Built dozens of projects, mastered state management, and fell in love with component-driven UI.",
    },
    TimelineStep {
        year: "2022",
        title: "Full-Stack Development",
        description: "Expanded into Node.js, databases, and REST APIs. Delivered my first commercial project.",
    },
    TimelineStep {
        year: "2023",
        title: "Professional Experience",
        description: "Joined a startup as a full-stack developer. Led front-end architecture for multiple products.",
    },
    TimelineStep {
        year: "2024 →",
        title: "Building What's Next",
        description: "Exploring AI-powered UX, WebGL, and performance engineering at scale.",
    },
];

pub static PASSIONS: &[Passion] = &[
    Passion {
        icon: Icon::Heart,
        title: "User Experience",
        description: "Crafting intuitive interfaces that users love",
    },
    Passion {
        icon: Icon::Coffee,
        title: "Problem Solving",
        description: "Turning complex challenges into elegant solutions",
    },
    Passion {
        icon: Icon::Book,
        title: "Continuous Learning",
        description: "Always exploring new technologies and best practices",
    },
];
