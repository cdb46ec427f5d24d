//! Random flicker effect
//!
//! Every pixel runs its own ignite-then-fade cycle. An unlit pixel ignites
//! with a fixed chance per tick, jumps to the configured color and fades
//! linearly back to black.

use rand::{Rng, RngCore};

use super::Effect;
use crate::color::{FloatRgb, Rgb};

/// A lit pixel switches off once every channel drops below this level
const OFF_LEVEL: f32 = 1.0;

/// State of a single flickering pixel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlickerPixel {
    pub is_on: bool,
    pub color: FloatRgb,
}

impl FlickerPixel {
    const OFF: Self = Self {
        is_on: false,
        color: FloatRgb::BLACK,
    };
}

/// Independent per-pixel twinkle
///
/// `P` is the maximum number of pixels the owning zone can hold.
#[derive(Debug, Clone)]
pub struct FlickerEffect<const P: usize> {
    color: FloatRgb,
    fade_step: FloatRgb,
    /// Chance per tick, in percent, that an unlit pixel ignites
    threshold: f32,
    pixels: [FlickerPixel; P],
}

impl<const P: usize> FlickerEffect<P> {
    /// Create a flicker that fades out over `period` seconds
    ///
    /// A period shorter than one tick fades in a single tick.
    pub fn new(color: Rgb, period: f32, activation_percent: u8, tick_rate: u16) -> Self {
        let color = FloatRgb::from(color);
        let fade_ticks = period * f32::from(tick_rate);
        let fade_step = if fade_ticks > 0.0 {
            color.scaled_down(fade_ticks)
        } else {
            color
        };
        Self {
            color,
            fade_step,
            threshold: activation_threshold(activation_percent, tick_rate),
            pixels: [FlickerPixel::OFF; P],
        }
    }

    /// Chance per tick, in percent, that an unlit pixel ignites
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Per-pixel state, in the order of the zone's pixel indices
    pub fn pixels(&self) -> &[FlickerPixel] {
        &self.pixels
    }
}

impl<const P: usize> Effect for FlickerEffect<P> {
    fn update<R: RngCore>(&mut self, pixels: &[u16], frame: &mut [Rgb], rng: &mut R) {
        for (&index, state) in pixels.iter().zip(self.pixels.iter_mut()) {
            if state.is_on {
                state.color.fade(self.fade_step);
                if state.color.all_below(OFF_LEVEL) {
                    *state = FlickerPixel::OFF;
                }
            } else if rng.gen_range(0.0_f32..100.0) < self.threshold {
                state.is_on = true;
                state.color = self.color;
            }

            if let Some(led) = frame.get_mut(usize::from(index)) {
                *led = state.color.to_rgb();
            }
        }
    }
}

/// Per-tick ignition chance, in percent, for a per-second `activation_percent`
///
/// Compounds over the ticks of one second so that the chance of igniting at
/// least once per second stays at `activation_percent` for any tick rate.
pub fn activation_threshold(activation_percent: u8, tick_rate: u16) -> f32 {
    let per_second = f32::from(activation_percent.min(100)) / 100.0;
    if tick_rate == 0 {
        return per_second * 100.0;
    }
    let per_tick = 1.0 - libm::powf(1.0 - per_second, 1.0 / f32::from(tick_rate));
    per_tick * 100.0
}
