// Simple particle struct to keep track of individual position, velocity, and appearance.
// Only position and velocity ever change after creation.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::random::RandomSource;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    radius: f64,
    color: Color,
    opacity: f64,
}

impl Particle {
    pub fn new(
        pos: Vector2<f64>,
        vel: Vector2<f64>,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
            opacity,
        }
    }

    // Samples are taken in a fixed order (radius, x, y, color, vx, vy, opacity)
    // so a replayed sequence always produces the same field.
    pub fn random<R: RandomSource + ?Sized>(
        rng: &mut R,
        config: &FieldConfig,
        width: f64,
        height: f64,
    ) -> Particle {
        let radius = rng.in_range(config.radius_min, config.radius_max);
        let pos_x = rng.next_f64() * width;
        let pos_y = rng.next_f64() * height;
        let color = if config.palette.is_empty() {
            Color::SAGE
        } else {
            config.palette[rng.index(config.palette.len())]
        };
        let vel_x = rng.in_range(-config.max_speed, config.max_speed);
        let vel_y = rng.in_range(-config.max_speed, config.max_speed);
        let opacity = rng.in_range(config.opacity_min, config.opacity_max);

        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, color, opacity)
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn fill_style(&self) -> String {
        self.color.to_hex_with_opacity(self.opacity)
    }

    // Moves by one frame of velocity, then bounces off the bounds. The position
    // is never clamped, so a particle can overshoot an edge by one step (or sit
    // outside after a shrink). An axis only flips while it is still heading
    // away from the bounds, so a stranded particle drifts straight back in.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);

        if outward(self.pos[0], self.vel[0], width) {
            self.vel[0] *= -1.0;
        }
        if outward(self.pos[1], self.vel[1], height) {
            self.vel[1] *= -1.0;
        }
    }
}

fn outward(pos: f64, vel: f64, bound: f64) -> bool {
    (pos < 0.0 && vel < 0.0) || (pos > bound && vel > 0.0)
}
