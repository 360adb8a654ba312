//! Particle field simulation for the contact background.
//!
//! Particles drift at constant velocity on a torus: leaving one edge
//! re-enters from the opposite one. Nearby pairs are joined by faint links.

use rand::Rng;

/// Default number of particles.
pub const PARTICLE_COUNT: usize = 120;

/// Pairs closer than this many pixels are linked.
pub const LINK_DISTANCE: f64 = 90.0;

/// Opacity of a link between two coincident particles.
pub const LINK_OPACITY: f64 = 0.12;

/// RGB triplets for each palette.
pub const DARK_RGB: (u8, u8, u8) = (59, 130, 246);
pub const LIGHT_RGB: (u8, u8, u8) = (96, 165, 250);

/// A single drifting dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
}

impl Particle {
    /// Creates a particle at a random position within the bounds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: sample(rng, width),
            y: sample(rng, height),
            radius: rng.random::<f64>() * 1.4 + 0.3,
            vx: (rng.random::<f64>() - 0.5) * 0.22,
            vy: (rng.random::<f64>() - 0.5) * 0.22,
            alpha: rng.random::<f64>() * 0.5 + 0.15,
        }
    }

    fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }
}

/// A link between particles `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

/// A link resolved to endpoint coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub opacity: f64,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub dots: Vec<Particle>,
    pub links: Vec<Segment>,
}

/// A fixed-size set of particles inside a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Allocates `count` particles spread over `width` x `height`.
    pub fn new<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        tracing::debug!(count, width, height, "Particle field initialized");
        Self {
            width,
            height,
            particles,
        }
    }

    /// Returns the current bounds.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Returns the particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns whether there is anything to draw.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Advances every particle by one frame. No-op without area.
    pub fn step(&mut self) {
        if !self.has_area() {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Adopts new bounds and wraps existing particles into them.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = sanitize(width);
        self.height = sanitize(height);
        tracing::debug!(width = self.width, height = self.height, "Particle field resized");
        if !self.has_area() {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.x = wrap(particle.x, width);
            particle.y = wrap(particle.y, height);
        }
    }

    /// Adopts measured bounds. The first time the field gains an area the
    /// particles are scattered afresh; later calls behave like [`resize`].
    ///
    /// [`resize`]: ParticleField::resize
    pub fn fit<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let had_area = self.has_area();
        self.resize(width, height);
        if !had_area && self.has_area() {
            let (width, height) = (self.width, self.height);
            for particle in &mut self.particles {
                *particle = Particle::random(rng, width, height);
            }
        }
    }

    /// Returns every pair closer than `max_distance`, with opacity falling
    /// off linearly with distance.
    pub fn links(&self, max_distance: f64) -> Vec<Link> {
        if !self.has_area() || max_distance <= 0.0 {
            return Vec::new();
        }

        let mut links = Vec::new();
        for (a, p) in self.particles.iter().enumerate() {
            for (offset, q) in self.particles[a + 1..].iter().enumerate() {
                let dist = (p.x - q.x).hypot(p.y - q.y);
                if dist < max_distance {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        opacity: (1.0 - dist / max_distance) * LINK_OPACITY,
                    });
                }
            }
        }
        links
    }

    /// Builds the render list for the current positions. Empty without area.
    pub fn frame(&self) -> Frame {
        if !self.has_area() {
            return Frame::default();
        }
        let links = self
            .links(LINK_DISTANCE)
            .into_iter()
            .map(|link| {
                let (p, q) = (&self.particles[link.a], &self.particles[link.b]);
                Segment {
                    x1: p.x,
                    y1: p.y,
                    x2: q.x,
                    y2: q.y,
                    opacity: link.opacity,
                }
            })
            .collect();
        Frame {
            dots: self.particles.clone(),
            links,
        }
    }
}

/// Formats an `rgba()` colour for the given palette.
pub fn rgba(dark: bool, alpha: f64) -> String {
    let (r, g, b) = if dark { DARK_RGB } else { LIGHT_RGB };
    format!("rgba({r},{g},{b},{alpha:.3})")
}

fn sample<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

/// Wraps `value` into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn field(count: usize, width: f64, height: f64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::new(count, width, height, &mut rng)
    }

    fn in_bounds(field: &ParticleField) -> bool {
        let (w, h) = field.size();
        field
            .particles()
            .iter()
            .all(|p| (0.0..w).contains(&p.x) && (0.0..h).contains(&p.y))
    }

    #[test]
    fn test_initial_particles_within_ranges() {
        let field = field(PARTICLE_COUNT, 800.0, 600.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!((0.3..1.7).contains(&p.radius));
            assert!((0.15..0.65).contains(&p.alpha));
            assert!(p.vx.abs() <= 0.11 && p.vy.abs() <= 0.11);
        }
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut field = field(PARTICLE_COUNT, 320.0, 200.0);
        for _ in 0..5_000 {
            field.step();
            assert!(in_bounds(&field));
        }
    }

    #[test]
    fn test_wraps_to_opposite_edge() {
        let mut field = field(0, 100.0, 50.0);
        field.particles.push(Particle {
            x: 99.95,
            y: 0.05,
            radius: 1.0,
            vx: 0.1,
            vy: -0.1,
            alpha: 0.5,
        });
        field.step();
        let p = field.particles()[0];
        assert!(p.x < 0.1, "x wrapped to {}", p.x);
        assert!(p.y > 49.9, "y wrapped to {}", p.y);
    }

    #[test]
    fn test_wrap_never_returns_extent() {
        assert_eq!(wrap(-1e-18, 10.0), 0.0);
        assert_eq!(wrap(10.0, 10.0), 0.0);
        assert!((wrap(-0.5, 10.0) - 9.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let mut field = field(PARTICLE_COUNT, 0.0, 0.0);
        assert!(!field.has_area());
        let before = field.clone();
        field.step();
        assert_eq!(field, before);
        assert!(field.links(LINK_DISTANCE).is_empty());

        let mut odd = self::field(10, f64::NAN, -5.0);
        odd.step();
        assert_eq!(odd.size(), (0.0, 0.0));
    }

    #[test]
    fn test_resize_wraps_into_new_bounds() {
        let mut field = field(PARTICLE_COUNT, 1000.0, 800.0);
        field.resize(300.0, 120.0);
        assert!(in_bounds(&field));

        field.resize(0.0, 120.0);
        field.step();
        field.resize(640.0, 480.0);
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_fit_scatters_after_first_measure() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::new(PARTICLE_COUNT, 0.0, 0.0, &mut rng);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));

        field.fit(800.0, 400.0, &mut rng);
        assert!(in_bounds(&field));
        assert!(field.particles().iter().any(|p| p.x > 0.0));

        let before: Vec<_> = field.particles().to_vec();
        field.fit(800.0, 400.0, &mut rng);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_links_opacity_scales_with_distance() {
        let mut field = field(0, 500.0, 500.0);
        let dot = |x, y| Particle {
            x,
            y,
            radius: 1.0,
            vx: 0.0,
            vy: 0.0,
            alpha: 0.5,
        };
        field.particles = vec![dot(10.0, 10.0), dot(55.0, 10.0), dot(400.0, 400.0)];

        let links = field.links(LINK_DISTANCE);
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].opacity - 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_particle_count_is_fixed() {
        let mut field = field(42, 200.0, 200.0);
        for _ in 0..100 {
            field.step();
        }
        field.resize(50.0, 50.0);
        assert_eq!(field.particles().len(), 42);
    }

    #[test]
    fn test_frame_resolves_link_endpoints() {
        let mut field = field(0, 200.0, 200.0);
        let dot = |x, y| Particle {
            x,
            y,
            radius: 1.0,
            vx: 0.0,
            vy: 0.0,
            alpha: 0.4,
        };
        field.particles = vec![dot(20.0, 20.0), dot(20.0, 50.0)];

        let frame = field.frame();
        assert_eq!(frame.dots.len(), 2);
        assert_eq!(frame.links.len(), 1);
        let segment = frame.links[0];
        assert_eq!((segment.x1, segment.y1, segment.x2, segment.y2), (20.0, 20.0, 20.0, 50.0));

        field.resize(0.0, 0.0);
        assert_eq!(field.frame(), Frame::default());
    }

    #[test]
    fn test_rgba_palettes() {
        assert_eq!(rgba(true, 0.5), "rgba(59,130,246,0.500)");
        assert_eq!(rgba(false, 0.12), "rgba(96,165,250,0.120)");
    }
}
