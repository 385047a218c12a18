// The particle field: a fixed set of particles drifting inside the surface bounds,
// drawn as circles with faint lines between every pair that is close enough.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::surface::DrawSurface;
use vecmath::{vec2_len, vec2_sub};

/// A pair of particles closer than the link distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: RandomSource + ?Sized>(
        config: FieldConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, &config, width, height))
            .collect();

        ParticleField {
            config,
            particles,
            width,
            height,
        }
    }

    pub fn with_particles(
        config: FieldConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        ParticleField {
            config,
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // Bounds only. Particles keep their state and find their own way back
    // in if the surface shrank underneath them.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Line alpha for two particles `distance` apart, `None` when they are
    /// not connected. The threshold is exclusive.
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        if distance < self.config.link_distance {
            Some(self.config.link_max_alpha * (1.0 - distance / self.config.link_distance))
        } else {
            None
        }
    }

    /// Every connected pair (a < b) at the current positions.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |a| {
            (a + 1..particles.len()).filter_map(move |b| {
                let distance = vec2_len(vec2_sub(particles[a].pos(), particles[b].pos()));
                self.link_alpha(distance).map(|alpha| Connection {
                    a,
                    b,
                    distance,
                    alpha,
                })
            })
        })
    }

    // One animation frame. Each particle is drawn at its current position and
    // then moved, so circles lag their position by a frame while the lines use
    // the freshly moved positions.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);

        for particle in &mut self.particles {
            surface.fill_circle(particle.pos(), particle.radius(), &particle.fill_style());
            particle.advance(self.width, self.height);
        }

        for connection in self.connections() {
            let stroke_style = self.config.link_color.to_rgba(connection.alpha);
            surface.stroke_line(
                self.particles[connection.a].pos(),
                self.particles[connection.b].pos(),
                &stroke_style,
                self.config.link_width,
            );
        }
    }
}
