// The particle field: a fixed set of particles created once, advanced and
// drawn every tick into a Surface.

use crate::config::{ParticleOptions, Physics, MAX_PARTICLES};
use crate::particle::Particle;
use crate::surface::{Surface, Viewport};
use rand::Rng;

pub struct ParticleField<R> {
    particles: Vec<Particle>,
    fill_style: String,
    physics: Physics,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(options: &ParticleOptions, viewport: Viewport, mut rng: R) -> ParticleField<R> {
        let count = options.particle_count.min(MAX_PARTICLES);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(&mut rng, options, viewport));
        }

        ParticleField {
            particles,
            fill_style: options.color.to_css(),
            physics: options.physics,
            rng,
        }
    }

    // Clear the surface, then move and draw every particle in order. Wrapping
    // uses the surface's current size, so a resize takes effect here without
    // touching any particle directly.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let viewport = surface.viewport();
        surface.clear();

        for particle in &mut self.particles {
            particle.step(&mut self.rng, &self.physics, viewport);
            surface.fill_circle(
                particle.pos,
                particle.radius(),
                &self.fill_style,
                particle.opacity,
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
