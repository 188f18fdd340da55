//! Decorative particle background.
//!
//! A fixed-size batch of circles drifts across the viewport and bounces off
//! its edges. The field owns its particles and its random source; drawing is
//! delegated to a [`Surface`] so the same code drives a browser canvas and the
//! recording surface used by tests.

use crate::constants::{
    PARTICLE_COUNT, PARTICLE_MAX_RADIUS, PARTICLE_MAX_SPEED, PARTICLE_MIN_RADIUS,
    PARTICLE_PALETTE,
};
use glam::Vec2;
use rand::Rng;

/// Something a particle frame can be painted onto.
pub trait Surface {
    /// Match the backing store to a new viewport size.
    fn resize(&mut self, width: f32, height: f32);
    /// Erase the whole drawable area.
    fn clear(&mut self, width: f32, height: f32);
    /// Paint a filled circle. `color` is a CSS color string.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}

#[derive(Clone, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub max_speed: f32,
    pub palette: &'static [&'static str],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            max_speed: PARTICLE_MAX_SPEED,
            palette: &PARTICLE_PALETTE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub velocity: Vec2,
}

impl Particle {
    /// Move one step and reflect any velocity component whose axis left
    /// `[0, bounds]`. Position is not clamped, so a particle may sit just
    /// outside the box for a single frame.
    #[inline]
    pub fn update(&mut self, bounds: Vec2) {
        self.position += self.velocity;
        if self.position.x > bounds.x || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > bounds.y || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }
}

pub struct ParticleField<R: Rng> {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: ParticleConfig,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: ParticleConfig, rng: R) -> Self {
        Self {
            particles: Vec::with_capacity(config.count),
            bounds: Vec2::ZERO,
            config,
            rng,
        }
    }

    /// Drop every particle and spawn a fresh batch across the viewport.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        self.particles.clear();
        for _ in 0..self.config.count {
            let p = self.spawn();
            self.particles.push(p);
        }
        log::debug!(
            "[particles] spawned {} in {:.0}x{:.0}",
            self.particles.len(),
            self.bounds.x,
            self.bounds.y
        );
    }

    fn spawn(&mut self) -> Particle {
        let cfg = &self.config;
        let size = cfg.min_radius + self.rng.gen::<f32>() * (cfg.max_radius - cfg.min_radius);
        let position = Vec2::new(
            self.rng.gen::<f32>() * self.bounds.x,
            self.rng.gen::<f32>() * self.bounds.y,
        );
        let color = if cfg.palette.is_empty() {
            "rgba(255, 255, 255, 0.7)"
        } else {
            cfg.palette[self.rng.gen_range(0..cfg.palette.len())]
        };
        let velocity = Vec2::new(
            (self.rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
            (self.rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
        );
        Particle {
            position,
            size,
            color,
            velocity,
        }
    }

    pub fn tick(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds);
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear(self.bounds.x, self.bounds.y);
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, p.color);
        }
    }

    /// One animation frame: paint the current state, then advance it.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        self.render(surface);
        self.tick();
    }

    /// Particles are not carried over; the field is rebuilt for the new size.
    pub fn on_resize(&mut self, width: f32, height: f32, surface: &mut impl Surface) {
        surface.resize(width, height);
        self.initialize(width, height);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recording {
        size: (f32, f32),
        clears: usize,
        circles: Vec<(Vec2, f32, String)>,
    }

    impl Surface for Recording {
        fn resize(&mut self, width: f32, height: f32) {
            self.size = (width, height);
        }
        fn clear(&mut self, _width: f32, _height: f32) {
            self.clears += 1;
            self.circles.clear();
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.circles.push((center, radius, color.to_string()));
        }
    }

    fn field(seed: u64) -> ParticleField<StdRng> {
        ParticleField::new(ParticleConfig::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn initialize_samples_within_ranges() {
        let mut f = field(7);
        f.initialize(800.0, 600.0);
        assert_eq!(f.particles().len(), PARTICLE_COUNT);
        for p in f.particles() {
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.velocity.x.abs() <= 0.75);
            assert!(p.velocity.y.abs() <= 0.75);
            assert!(PARTICLE_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn reinitialize_always_yields_fixed_count() {
        let mut f = field(1);
        for (w, h) in [(100.0, 100.0), (1920.0, 1080.0), (0.0, 0.0), (320.0, 640.0)] {
            f.initialize(w, h);
            assert_eq!(f.particles().len(), 50);
        }
    }

    #[test]
    fn zero_viewport_does_not_panic() {
        let mut f = field(3);
        f.initialize(0.0, 0.0);
        f.tick();
        assert_eq!(f.particles().len(), 50);
    }

    #[test]
    fn reflection_flips_only_the_crossing_axis() {
        let mut p = Particle {
            position: Vec2::new(99.8, 50.0),
            size: 2.0,
            color: PARTICLE_PALETTE[0],
            velocity: Vec2::new(0.5, 0.25),
        };
        p.update(Vec2::new(100.0, 100.0));
        // overshoot is kept for this frame
        assert!((p.position.x - 100.3).abs() < 1e-4);
        assert_eq!(p.velocity, Vec2::new(-0.5, 0.25));
        p.update(Vec2::new(100.0, 100.0));
        assert!(p.position.x <= 100.0);
        assert_eq!(p.velocity.x, -0.5);
    }

    #[test]
    fn particles_stay_in_bounds_up_to_one_step_of_overshoot() {
        const EPS: f32 = 1e-3;
        let bounds = Vec2::new(300.0, 200.0);
        let mut f = field(42);
        f.initialize(bounds.x, bounds.y);
        let n = f.particles().len();
        let mut out_x = vec![false; n];
        let mut out_y = vec![false; n];
        for _ in 0..5_000 {
            f.tick();
            for (i, p) in f.particles().iter().enumerate() {
                let ox = p.position.x < -EPS || p.position.x > bounds.x + EPS;
                let oy = p.position.y < -EPS || p.position.y > bounds.y + EPS;
                assert!(p.position.x >= -p.velocity.x.abs() - EPS);
                assert!(p.position.x <= bounds.x + p.velocity.x.abs() + EPS);
                assert!(p.position.y >= -p.velocity.y.abs() - EPS);
                assert!(p.position.y <= bounds.y + p.velocity.y.abs() + EPS);
                // an excursion on one axis never lasts two consecutive frames
                assert!(!(ox && out_x[i]), "particle {i} stuck outside on x");
                assert!(!(oy && out_y[i]), "particle {i} stuck outside on y");
                out_x[i] = ox;
                out_y[i] = oy;
            }
        }
    }

    #[test]
    fn render_clears_then_draws_every_particle() {
        let mut f = field(9);
        let mut s = Recording::default();
        f.on_resize(640.0, 480.0, &mut s);
        assert_eq!(s.size, (640.0, 480.0));
        f.frame(&mut s);
        assert_eq!(s.clears, 1);
        assert_eq!(s.circles.len(), 50);
    }

    #[test]
    fn resize_regenerates_particles() {
        let mut f = field(11);
        let mut s = Recording::default();
        f.on_resize(1000.0, 1000.0, &mut s);
        let before: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
        f.on_resize(200.0, 100.0, &mut s);
        assert_eq!(f.bounds(), Vec2::new(200.0, 100.0));
        assert!(f
            .particles()
            .iter()
            .all(|p| p.position.x < 200.0 && p.position.y < 100.0));
        let after: Vec<Vec2> = f.particles().iter().map(|p| p.position).collect();
        assert_ne!(before, after);
    }
}
