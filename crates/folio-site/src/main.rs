//! Entry point for the Folio portfolio site.
//!
//! This Dioxus desktop application renders a single-page animated
//! portfolio: hero, skills, work, about and contact sections with a
//! light/dark theme toggle.

use std::sync::OnceLock;

use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use folio_site::components::App;
use folio_site::config::{parse_particle_count, SiteConfig};
use folio_site::state::PARTICLE_COUNT;
use folio_ui::ThemeMode;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the resolved site configuration.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Theme names accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Single-page animated developer portfolio")]
struct Args {
    /// Theme to start in
    #[arg(short, long, value_enum, default_value = "light")]
    theme: ThemeArg,

    /// Number of particles in the contact backdrop (at most 600)
    #[arg(short, long, default_value_t = PARTICLE_COUNT, value_parser = parse_particle_count)]
    particles: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = SiteConfig {
        initial_theme: args.theme.into(),
        particle_count: args.particles,
    };
    tracing::info!(
        theme = config.initial_theme.display_name(),
        particles = config.particle_count,
        "Starting Folio"
    );
    SITE_CONFIG.set(config).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Alex Carter - Full Stack Developer")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    folio_ui::SHARED_CSS,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component that publishes the configuration to the tree.
#[component]
fn RootApp() -> Element {
    let config = SITE_CONFIG.get().cloned().unwrap_or_default();
    use_context_provider(|| config);

    use_drop(|| {
        tracing::info!("Shutting down Folio");
    });

    rsx! {
        App {}
    }
}
