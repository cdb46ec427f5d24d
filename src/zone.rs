//! Zones
//!
//! A zone owns a fixed set of pixel indices and runs exactly one effect on
//! them. Settings can be replaced from another execution context (an
//! interrupt-driven transport callback) while the tick loop is running, so
//! the active effect lives behind a critical-section mutex.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;
use rand::RngCore;

use crate::color::Rgb;
use crate::effect::EffectSlot;
use crate::error::ZoneError;
use crate::settings::EffectSettings;

/// Settings together with the effect built from them
#[derive(Debug, Clone)]
struct ActiveEffect<const P: usize> {
    settings: EffectSettings,
    effect: EffectSlot<P>,
}

/// Group of pixels sharing one effect
///
/// `P` is the maximum number of pixels in the zone.
pub struct Zone<const P: usize> {
    pixels: Vec<u16, P>,
    tick_rate: u16,
    active: Mutex<RefCell<Option<ActiveEffect<P>>>>,
}

impl<const P: usize> Zone<P> {
    /// Create a zone without an effect
    ///
    /// Every index must be unique and below `led_count`. The zone rebuilds
    /// its effects for `tick_rate` updates per second.
    pub fn new(pixels: &[u16], led_count: usize, tick_rate: u16) -> Result<Self, ZoneError> {
        if pixels.len() > P {
            return Err(ZoneError::TooManyPixels {
                count: pixels.len(),
                capacity: P,
            });
        }

        let mut owned: Vec<u16, P> = Vec::new();
        for &index in pixels {
            if usize::from(index) >= led_count {
                return Err(ZoneError::PixelOutOfRange { index, led_count });
            }
            if owned.contains(&index) {
                return Err(ZoneError::DuplicatePixel(index));
            }
            // Capacity checked above
            let _ = owned.push(index);
        }

        Ok(Self {
            pixels: owned,
            tick_rate,
            active: Mutex::new(RefCell::new(None)),
        })
    }

    /// Create a zone and immediately start an effect
    pub fn with_settings(
        pixels: &[u16],
        led_count: usize,
        tick_rate: u16,
        settings: EffectSettings,
    ) -> Result<Self, ZoneError> {
        let zone = Self::new(pixels, led_count, tick_rate)?;
        zone.set_effect(settings);
        Ok(zone)
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub const fn tick_rate(&self) -> u16 {
        self.tick_rate
    }

    /// Returns the first pixel index that does not fit a strip of `led_count`
    pub fn pixel_out_of(&self, led_count: usize) -> Option<u16> {
        self.pixels
            .iter()
            .copied()
            .find(|&index| usize::from(index) >= led_count)
    }

    /// Replace the effect with a fresh one built from `settings`
    ///
    /// The new effect starts from its initial phase even if the settings did
    /// not change. A concurrent tick sees either the old or the new effect.
    pub fn set_effect(&self, settings: EffectSettings) {
        let next = ActiveEffect {
            settings,
            effect: EffectSlot::build(&settings, self.tick_rate),
        };
        // The replaced effect is dropped outside the critical section
        let _previous = critical_section::with(|cs| self.active.borrow(cs).replace(Some(next)));
    }

    /// Last applied settings, or the off settings if none were applied
    pub fn settings(&self) -> EffectSettings {
        critical_section::with(|cs| {
            self.active
                .borrow(cs)
                .borrow()
                .as_ref()
                .map_or_else(EffectSettings::off, |active| active.settings)
        })
    }

    /// Returns true once an effect has been set
    pub fn is_active(&self) -> bool {
        critical_section::with(|cs| self.active.borrow(cs).borrow().is_some())
    }

    /// Copy of the running effect, mostly useful for inspection
    pub fn effect(&self) -> Option<EffectSlot<P>> {
        critical_section::with(|cs| {
            self.active
                .borrow(cs)
                .borrow()
                .as_ref()
                .map(|active| active.effect.clone())
        })
    }

    /// Advance the effect one tick, writing into `frame`
    ///
    /// Does nothing if no effect was set yet.
    pub fn tick<R: RngCore>(&self, frame: &mut [Rgb], rng: &mut R) {
        critical_section::with(|cs| {
            if let Some(active) = self.active.borrow(cs).borrow_mut().as_mut() {
                active.effect.update(&self.pixels, frame, rng);
            }
        });
    }
}
