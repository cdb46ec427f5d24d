//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod flicker;
mod gradient;
mod static_color;

pub use flicker::{FlickerEffect, FlickerPixel, activation_threshold};
pub use gradient::{Direction, GradientEffect};
use rand::RngCore;
pub use static_color::StaticColorEffect;

use crate::color::{BLACK, Rgb};
use crate::settings::{EffectKind, EffectSettings};

pub trait Effect {
    /// Advance one tick and write the owned pixels into `frame`
    ///
    /// `pixels` are indices into `frame`.
    fn update<R: RngCore>(&mut self, pixels: &[u16], frame: &mut [Rgb], rng: &mut R);
}

/// Effect slot - enum containing all possible effects
///
/// `P` is the maximum number of pixels a zone can own.
#[derive(Debug, Clone)]
pub enum EffectSlot<const P: usize> {
    /// Single color, also used for switched off zones
    Static(StaticColorEffect),
    /// Ping-pong between two colors, also used for blink
    Gradient(GradientEffect),
    /// Independent per-pixel ignite and fade
    Flicker(FlickerEffect<P>),
}

impl<const P: usize> EffectSlot<P> {
    /// Build a fresh effect from settings
    ///
    /// Never fails: degenerate periods fall back to holding `color1`.
    pub fn build(settings: &EffectSettings, tick_rate: u16) -> Self {
        match settings.kind {
            EffectKind::Off => Self::Static(StaticColorEffect::new(BLACK)),
            EffectKind::Const => Self::Static(StaticColorEffect::new(settings.color1)),
            EffectKind::Blink => {
                Self::gradient(settings.color1, BLACK, settings.period, tick_rate)
            }
            EffectKind::Gradient => Self::gradient(
                settings.color1,
                settings.color2,
                settings.period,
                tick_rate,
            ),
            EffectKind::Random => Self::Flicker(FlickerEffect::new(
                settings.color1,
                settings.period,
                settings.activation_percent,
                tick_rate,
            )),
        }
    }

    fn gradient(from: Rgb, to: Rgb, period: f32, tick_rate: u16) -> Self {
        match GradientEffect::new(from, to, period, tick_rate) {
            Some(effect) => Self::Gradient(effect),
            None => Self::Static(StaticColorEffect::new(from)),
        }
    }

    /// Run the current effect for one tick
    pub fn update<R: RngCore>(&mut self, pixels: &[u16], frame: &mut [Rgb], rng: &mut R) {
        match self {
            Self::Static(effect) => effect.update(pixels, frame, rng),
            Self::Gradient(effect) => effect.update(pixels, frame, rng),
            Self::Flicker(effect) => effect.update(pixels, frame, rng),
        }
    }
}

/// Write `color` to every pixel in `pixels`
pub(crate) fn paint(pixels: &[u16], frame: &mut [Rgb], color: Rgb) {
    for &index in pixels {
        if let Some(led) = frame.get_mut(usize::from(index)) {
            *led = color;
        }
    }
}
