//! Static color fill effect
//!
//! Fills every owned pixel with a single solid color.

use rand::RngCore;

use super::{Effect, paint};
use crate::color::Rgb;

/// Static color effect - fills all owned pixels with one color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for StaticColorEffect {
    fn update<R: RngCore>(&mut self, pixels: &[u16], frame: &mut [Rgb], _rng: &mut R) {
        paint(pixels, frame, self.color);
    }
}
