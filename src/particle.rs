// Simple particle struct to keep track of individual position, velocity,
// size and flickering opacity

use crate::config::{ParticleOptions, Physics};
use crate::surface::Viewport;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub max_speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub opacity_direction: f64,
    pub opacity_speed: f64,
}

impl Particle {
    // Random particle somewhere inside the viewport. The order of the draws
    // is fixed so a seeded generator always yields the same field.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        options: &ParticleOptions,
        viewport: Viewport,
    ) -> Particle {
        let physics = &options.physics;
        let multiplier = lerp(
            physics.min_speed_multiplier,
            physics.max_speed_multiplier,
            rng.gen::<f64>(),
        );
        let max_speed = options.base_speed * multiplier;

        let pos_x = rng.gen::<f64>() * viewport.width;
        let pos_y = rng.gen::<f64>() * viewport.height;
        let vel_x = (rng.gen::<f64>() - 0.5) * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * max_speed;
        let size = lerp(options.min_size, options.max_size, rng.gen::<f64>());
        let opacity = rng.gen::<f64>();
        let opacity_direction = if rng.gen::<f64>() > 0.5 { 1.0 } else { -1.0 };
        let opacity_speed = lerp(
            physics.min_opacity_speed,
            physics.max_opacity_speed,
            rng.gen::<f64>(),
        );

        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            max_speed,
            size,
            opacity,
            opacity_direction,
            opacity_speed,
        }
    }

    // One tick of motion: integrate, drift, clamp, flicker, wrap
    pub fn step<R: Rng>(&mut self, rng: &mut R, physics: &Physics, viewport: Viewport) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        let drift = [
            (rng.gen::<f64>() - 0.5) * physics.drift,
            (rng.gen::<f64>() - 0.5) * physics.drift,
        ];
        self.vel = vecmath::vec2_add(self.vel, drift);

        let limit = self.max_speed * physics.speed_limit_factor;
        self.vel[0] = self.vel[0].max(-limit).min(limit);
        self.vel[1] = self.vel[1].max(-limit).min(limit);

        self.opacity += self.opacity_direction * self.opacity_speed;
        if self.opacity < 0.0 || self.opacity > 1.0 {
            self.opacity_direction = -self.opacity_direction;
            self.opacity = self.opacity.max(0.0).min(1.0);
        }

        self.pos[0] = wrap(self.pos[0], self.size, viewport.width);
        self.pos[1] = wrap(self.pos[1], self.size, viewport.height);
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    t * (to - from) + from
}

// A particle that has fully left one edge reappears just outside the other
fn wrap(coord: f64, size: f64, extent: f64) -> f64 {
    if coord < -size {
        extent + size
    } else if coord > extent + size {
        -size
    } else {
        coord
    }
}
