// What the particle field needs from whatever it draws into. The browser
// canvas implements this in renderer.rs; tests record the calls instead.

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }
}

pub trait Surface {
    // Current pixel dimensions, used for wrapping
    fn viewport(&self) -> Viewport;

    fn clear(&mut self);

    // Filled circle drawn with `alpha` as the global transparency
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, fill_style: &str, alpha: f64);
}
