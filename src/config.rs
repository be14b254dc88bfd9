// Particle field configuration. Every option has a default; values supplied
// by the page override them, zero included.

use crate::color::Color;
use crate::error::PageError;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

// Upper bound on particle_count, larger requests are capped to it
pub const MAX_PARTICLES: usize = 10_000;

// Tuning constants of the drift / flicker motion
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Physics {
    // Width of the uniform velocity perturbation added each tick
    pub drift: f64,
    // Velocity is clamped to this multiple of a particle's max speed
    pub speed_limit_factor: f64,
    // Per-particle speed multiplier range, applied to the base speed
    pub min_speed_multiplier: f64,
    pub max_speed_multiplier: f64,
    // Opacity change per tick
    pub min_opacity_speed: f64,
    pub max_opacity_speed: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Physics {
            drift: 0.02,
            speed_limit_factor: 1.5,
            min_speed_multiplier: 0.3,
            max_speed_multiplier: 1.2,
            min_opacity_speed: 0.001,
            max_opacity_speed: 0.003,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleOptions {
    pub particle_count: usize,
    pub color: Color,
    pub min_size: f64,
    pub max_size: f64,
    pub base_speed: f64,
    pub physics: Physics,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        ParticleOptions {
            particle_count: 60,
            color: Color::SITE_RED,
            min_size: 2.0,
            max_size: 10.0,
            base_speed: 0.1,
            physics: Physics::default(),
        }
    }
}

impl ParticleOptions {
    // What the portfolio page mounts on load
    pub fn site() -> Self {
        ParticleOptions {
            color: Color::SITE_RED,
            base_speed: 0.8,
            ..ParticleOptions::default()
        }
    }

    // Reads `particleCount`, `color`, `minSize`, `maxSize` and `baseSpeed`
    // off a JS object. Absent or non-numeric keys keep their default; an
    // unparsable color is an error.
    pub fn from_js(options: &JsValue) -> Result<Self, PageError> {
        let mut parsed = ParticleOptions::default();
        if !options.is_object() {
            return Ok(parsed);
        }

        if let Some(count) = number_field(options, "particleCount")? {
            parsed.particle_count = if count.is_nan() || count <= 0.0 {
                0
            } else if count >= MAX_PARTICLES as f64 {
                MAX_PARTICLES
            } else {
                count as usize
            };
        }
        if let Some(text) = field(options, "color")?.and_then(|v| v.as_string()) {
            parsed.color = Color::parse_hex(&text)?;
        }
        if let Some(min_size) = number_field(options, "minSize")? {
            parsed.min_size = min_size;
        }
        if let Some(max_size) = number_field(options, "maxSize")? {
            parsed.max_size = max_size;
        }
        if let Some(base_speed) = number_field(options, "baseSpeed")? {
            parsed.base_speed = base_speed;
        }

        Ok(parsed.sanitized())
    }

    // Keeps the field's invariants satisfiable: at most MAX_PARTICLES, sizes
    // and speeds finite and non-negative, and the size range ordered.
    pub fn sanitized(mut self) -> Self {
        self.particle_count = self.particle_count.min(MAX_PARTICLES);
        let non_negative = |value: f64, fallback: f64| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                fallback
            }
        };
        let defaults = ParticleOptions::default();
        self.min_size = non_negative(self.min_size, defaults.min_size);
        self.max_size = non_negative(self.max_size, defaults.max_size);
        if self.min_size > self.max_size {
            std::mem::swap(&mut self.min_size, &mut self.max_size);
        }
        self.base_speed = non_negative(self.base_speed, defaults.base_speed);
        self
    }
}

fn field(options: &JsValue, key: &str) -> Result<Option<JsValue>, PageError> {
    let value = Reflect::get(options, &JsValue::from_str(key)).map_err(PageError::host)?;
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

fn number_field(options: &JsValue, key: &str) -> Result<Option<f64>, PageError> {
    Ok(field(options, key)?.and_then(|v| v.as_f64()))
}
