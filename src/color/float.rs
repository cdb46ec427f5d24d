use core::ops::{AddAssign, SubAssign};

use super::Rgb;

/// Color with floating-point channels in the 0.0-255.0 range
///
/// Used by effects that accumulate fractional steps between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl FloatRgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Per-channel step that walks from `from` to `to` in `steps` increments
    pub fn step_between(from: Self, to: Self, steps: f32) -> Self {
        Self {
            r: (to.r - from.r) / steps,
            g: (to.g - from.g) / steps,
            b: (to.b - from.b) / steps,
        }
    }

    /// Divide every channel by `divisor`
    pub fn scaled_down(self, divisor: f32) -> Self {
        Self {
            r: self.r / divisor,
            g: self.g / divisor,
            b: self.b / divisor,
        }
    }

    /// Subtract `amount` from every channel without going below zero
    pub fn fade(&mut self, amount: Self) {
        self.r = (self.r - amount.r).max(0.0);
        self.g = (self.g - amount.g).max(0.0);
        self.b = (self.b - amount.b).max(0.0);
    }

    /// Clamp every channel into the span between `a` and `b`
    pub fn clamped(self, a: Self, b: Self) -> Self {
        Self {
            r: self.r.clamp(a.r.min(b.r), a.r.max(b.r)),
            g: self.g.clamp(a.g.min(b.g), a.g.max(b.g)),
            b: self.b.clamp(a.b.min(b.b), a.b.max(b.b)),
        }
    }

    /// Returns true if every channel is below `threshold`
    pub fn all_below(self, threshold: f32) -> bool {
        self.r < threshold && self.g < threshold && self.b < threshold
    }

    /// Truncate to 8-bit channels
    ///
    /// Values outside 0..=255 saturate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r as u8,
            g: self.g as u8,
            b: self.b as u8,
        }
    }
}

impl From<Rgb> for FloatRgb {
    fn from(color: Rgb) -> Self {
        Self {
            r: f32::from(color.r),
            g: f32::from(color.g),
            b: f32::from(color.b),
        }
    }
}

impl AddAssign for FloatRgb {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl SubAssign for FloatRgb {
    fn sub_assign(&mut self, rhs: Self) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
    }
}
