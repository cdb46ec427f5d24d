//! Gradient effect
//!
//! Walks linearly from the first color to the second and back, one tick
//! at a time. Blink is the same walk with black as the second color.

use rand::RngCore;

use super::{Effect, paint};
use crate::color::{FloatRgb, Rgb};

/// Direction of the color walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moving from the first color to the second
    TowardEnd,
    /// Moving from the second color back to the first
    TowardStart,
}

impl Direction {
    const fn reversed(self) -> Self {
        match self {
            Self::TowardEnd => Self::TowardStart,
            Self::TowardStart => Self::TowardEnd,
        }
    }
}

/// Ping-pong interpolation between two colors
///
/// One half period takes `ticks_per_half` updates. The tick counter starts
/// at 1 moving toward the second color, so the first frame is one step away
/// from the first color. The turning frames land on the end colors, every
/// other frame stays within the span between them.
#[derive(Debug, Clone)]
pub struct GradientEffect {
    start: FloatRgb,
    end: FloatRgb,
    step: FloatRgb,
    current: FloatRgb,
    ticks_per_half: u16,
    tick: u16,
    direction: Direction,
}

impl GradientEffect {
    /// Create a gradient that spends `period` seconds in each direction
    ///
    /// Returns `None` when the period rounds to zero ticks.
    pub fn new(from: Rgb, to: Rgb, period: f32, tick_rate: u16) -> Option<Self> {
        let ticks_per_half = ticks_in(period, tick_rate);
        if ticks_per_half == 0 {
            return None;
        }
        let start = FloatRgb::from(from);
        let end = FloatRgb::from(to);
        Some(Self {
            start,
            end,
            step: FloatRgb::step_between(start, end, f32::from(ticks_per_half)),
            current: start,
            ticks_per_half,
            tick: 1,
            direction: Direction::TowardEnd,
        })
    }

    pub const fn ticks_per_half(&self) -> u16 {
        self.ticks_per_half
    }

    pub const fn tick(&self) -> u16 {
        self.tick
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn current(&self) -> FloatRgb {
        self.current
    }
}

impl Effect for GradientEffect {
    fn update<R: RngCore>(&mut self, pixels: &[u16], frame: &mut [Rgb], _rng: &mut R) {
        match self.direction {
            Direction::TowardEnd => self.current += self.step,
            Direction::TowardStart => self.current -= self.step,
        }
        // Accumulated steps drift, turning frames snap to the exact color
        self.current = match self.direction {
            Direction::TowardEnd if self.tick >= self.ticks_per_half => self.end,
            Direction::TowardStart if self.tick == 0 => self.start,
            _ => self.current.clamped(self.start, self.end),
        };
        paint(pixels, frame, self.current.to_rgb());

        // Boundary check uses the counter before it advances
        if self.tick == 0 || self.tick >= self.ticks_per_half {
            self.direction = self.direction.reversed();
        }
        self.tick = match self.direction {
            Direction::TowardEnd => self.tick.saturating_add(1),
            Direction::TowardStart => self.tick.saturating_sub(1),
        };
    }
}

/// Number of ticks in `period` seconds, rounded and saturated to `u16`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ticks_in(period: f32, tick_rate: u16) -> u16 {
    libm::roundf(period * f32::from(tick_rate)) as u16
}
