//! Site configuration supplied at launch.

use folio_ui::ThemeMode;
use thiserror::Error;

use crate::state::PARTICLE_COUNT;

/// Upper bound for `particle_count`. Linking is quadratic in the count and
/// runs every frame.
pub const MAX_PARTICLES: usize = 600;

/// Invalid launch settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Particle count must be a whole number, got {0:?}")]
    InvalidParticleCount(String),

    #[error("Particle count {0} exceeds the maximum of {MAX_PARTICLES}")]
    TooManyParticles(usize),
}

/// Parses a particle count, rejecting values above [`MAX_PARTICLES`].
pub fn parse_particle_count(raw: &str) -> Result<usize, ConfigError> {
    let count = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidParticleCount(raw.to_string()))?;
    if count > MAX_PARTICLES {
        return Err(ConfigError::TooManyParticles(count));
    }
    Ok(count)
}

/// Launch-time settings, provided to the root component as context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Palette shown on first render. Not persisted.
    pub initial_theme: ThemeMode,
    /// Number of particles in the contact background.
    pub particle_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            initial_theme: ThemeMode::Light,
            particle_count: PARTICLE_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.initial_theme, ThemeMode::Light);
        assert_eq!(config.particle_count, 120);
    }

    #[test]
    fn test_particle_count_bounds() {
        assert_eq!(parse_particle_count("0"), Ok(0));
        assert_eq!(parse_particle_count("120"), Ok(PARTICLE_COUNT));
        assert_eq!(parse_particle_count("600"), Ok(MAX_PARTICLES));
        assert_eq!(
            parse_particle_count("20000"),
            Err(ConfigError::TooManyParticles(20000))
        );
        assert!(matches!(
            parse_particle_count("-5"),
            Err(ConfigError::InvalidParticleCount(_))
        ));
    }
}
