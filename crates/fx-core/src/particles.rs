//! Decorative particle field for the hero canvas.
//!
//! A fixed pool of slow-moving dots that bounce off the canvas edges, shy away
//! from the pointer, and are linked by faint lines when close to each other.
//! The field owns no drawing state; the web frontend reads `particles()` and
//! `connections()` each frame and paints them.

use crate::constants::*;
use crate::params::FxParams;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
        );
        Self {
            pos,
            vel,
            radius: rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN,
            opacity: (rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_MIN)
                .clamp(0.0, 1.0),
        }
    }

    fn step(&mut self, bounds: Vec2, pointer: Option<Vec2>, repel_radius: f32) {
        self.pos += self.vel;

        // Reflect so the velocity always points back inside.
        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > bounds.x {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > bounds.y {
            self.vel.y = -self.vel.y.abs();
        }

        if let Some(p) = pointer {
            let away = self.pos - p;
            if away.length() < repel_radius {
                self.pos += away * POINTER_REPEL_STRENGTH;
            }
        }

        self.pos = self.pos.clamp(Vec2::ZERO, bounds);
    }
}

/// A line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Opacity of a connection line for two particles `dist` apart, or `None` when
/// they are too far apart to be linked.
#[inline]
pub fn connection_opacity(dist: f32, max_dist: f32) -> Option<f32> {
    (dist < max_dist).then(|| (1.0 - dist / max_dist) * CONNECTION_MAX_OPACITY)
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Option<Vec2>,
    connection_distance: f32,
    repel_radius: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let particles = (0..count).map(|_| Particle::spawn(rng, bounds)).collect();
        Self {
            particles,
            bounds,
            pointer: None,
            connection_distance: CONNECTION_DISTANCE,
            repel_radius: POINTER_REPEL_RADIUS,
        }
    }

    pub fn from_params<R: Rng + ?Sized>(
        params: &FxParams,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        let mut field = Self::new(params.particle_count, width, height, rng);
        field.connection_distance = params.connection_distance;
        field.repel_radius = params.repel_radius;
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Adopt new canvas dimensions, pulling any particle left outside back
    /// onto the edge.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        for p in &mut self.particles {
            p.pos = p.pos.clamp(Vec2::ZERO, self.bounds);
        }
        log::debug!(
            "[particles] resized to {:.0}x{:.0}",
            self.bounds.x,
            self.bounds.y
        );
    }

    /// Advance every particle by one animation frame.
    pub fn tick(&mut self) {
        let bounds = self.bounds;
        let pointer = self.pointer;
        let repel = self.repel_radius;
        for p in &mut self.particles {
            p.step(bounds, pointer, repel);
        }
    }

    /// Lines to draw this frame, one per pair closer than the connection
    /// distance.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let max_dist = self.connection_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                connection_opacity(a.pos.distance(b.pos), max_dist).map(|opacity| Connection {
                    from: a.pos,
                    to: b.pos,
                    opacity,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawned_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(200, 640.0, 480.0, &mut rng);
        assert_eq!(field.particles().len(), 200);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0);
            assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
            assert!(p.radius >= 0.5 && p.radius < 2.5);
            assert!(p.opacity >= 0.1 && p.opacity < 0.6);
        }
    }

    #[test]
    fn step_reflects_off_right_edge() {
        let mut p = Particle {
            pos: Vec2::new(99.9, 50.0),
            vel: Vec2::new(0.5, 0.0),
            radius: 1.0,
            opacity: 0.5,
        };
        p.step(Vec2::new(100.0, 100.0), None, POINTER_REPEL_RADIUS);
        assert!(p.vel.x < 0.0);
        assert_eq!(p.pos.x, 100.0);
        p.step(Vec2::new(100.0, 100.0), None, POINTER_REPEL_RADIUS);
        assert!(p.pos.x < 100.0);
    }

    #[test]
    fn pointer_pushes_nearby_particle_away() {
        let mut p = Particle {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::ZERO,
            radius: 1.0,
            opacity: 0.5,
        };
        p.step(Vec2::new(200.0, 200.0), Some(Vec2::new(40.0, 50.0)), 100.0);
        assert!((p.pos.x - 50.1).abs() < 1e-4);
        assert_eq!(p.pos.y, 50.0);
    }

    #[test]
    fn connection_opacity_fades_with_distance() {
        assert_eq!(connection_opacity(0.0, 120.0), Some(0.15));
        assert!((connection_opacity(60.0, 120.0).unwrap() - 0.075).abs() < 1e-6);
        assert_eq!(connection_opacity(120.0, 120.0), None);
        assert_eq!(connection_opacity(500.0, 120.0), None);
    }
}
