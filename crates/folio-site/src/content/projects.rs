//! Project cards for the work section.

/// A portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Cover image path, relative to the crate root. `None` shows a placeholder.
    pub image: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with real-time inventory, cart management, and secure Stripe payments.",
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        image: None,
        repo_url: Some("#"),
        live_url: Some("#"),
        featured: true,
    },
    Project {
        title: "AI Chat Application",
        description: "Real-time chat powered by OpenAI API with conversation history, multiple AI personas, and streaming responses.",
        tech: &["Next.js", "OpenAI", "Socket.io", "Redis"],
        image: None,
        repo_url: Some("#"),
        live_url: Some("#"),
        featured: true,
    },
    Project {
        title: "Task Management Dashboard",
        description: "Kanban-style project management with drag-and-drop, team collaboration, and detailed analytics.",
        tech: &["React", "TypeScript", "Prisma", "PostgreSQL"],
        image: None,
        repo_url: Some("#"),
        live_url: Some("#"),
        featured: false,
    },
    Project {
        title: "Social Media Analytics",
        description: "A comprehensive analytics dashboard aggregating data across platforms with visual charts and trend prediction.",
        tech: &["Vue.js", "Python", "D3.js", "FastAPI"],
        image: None,
        repo_url: Some("#"),
        live_url: Some("#"),
        featured: false,
    },
    Project {
        title: "Dev Blog Platform",
        description: "MDX-powered blog platform with syntax highlighting, newsletter integration, and SEO optimization.",
        tech: &["Next.js", "MDX", "Tailwind", "Vercel"],
        image: None,
        repo_url: Some("#"),
        live_url: Some("#"),
        featured: false,
    },
    Project {
        title: "Finance Tracker",
        description: "Personal finance tracker with budget categorization, spending trends, and multi-currency support.",
        tech: &["React Native", "Expo", "Firebase", "Plaid"],
        image: None,
        repo_url: Some("#"),
        live_url: Some("#"),
        featured: false,
    },
];
