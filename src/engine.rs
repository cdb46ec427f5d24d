use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::RngCore;

use crate::OutputDriver;
use crate::controller::Controller;
use crate::error::ZoneError;
use crate::pixel_buffer::PixelBuffer;
use crate::zone::Zone;

/// Reference tick rate (10 Hz, 100 ms per tick)
pub const DEFAULT_TICK_RATE: u16 = 10;

/// Configuration for the engine
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Ticks per second
    pub tick_rate: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl EngineConfig {
    /// Time between two ticks
    pub fn tick_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.tick_rate.max(1)))
    }
}

/// Engine - runs every zone once per tick and flushes the frame
///
/// `LEDS` is the physical pixel count, `P` the per-zone pixel capacity.
/// Zones are borrowed so a [`Controller`] over the same slice can change
/// their settings concurrently.
pub struct Engine<'a, O: OutputDriver, R: RngCore, const LEDS: usize, const P: usize> {
    zones: &'a [Zone<P>],
    config: EngineConfig,
    buffer: PixelBuffer<LEDS>,
    output: O,
    rng: R,
}

impl<'a, O: OutputDriver, R: RngCore, const LEDS: usize, const P: usize> Engine<'a, O, R, LEDS, P> {
    /// Assemble the engine
    ///
    /// Fails if a zone addresses a pixel past `LEDS` or was built for a
    /// different tick rate.
    pub fn new(
        zones: &'a [Zone<P>],
        output: O,
        rng: R,
        config: EngineConfig,
    ) -> Result<Self, ZoneError> {
        for zone in zones {
            if let Some(index) = zone.pixel_out_of(LEDS) {
                #[cfg(feature = "esp32-log")]
                println!("zones: pixel {} does not fit {} leds", index, LEDS);

                return Err(ZoneError::PixelOutOfRange {
                    index,
                    led_count: LEDS,
                });
            }
            if zone.tick_rate() != config.tick_rate {
                return Err(ZoneError::TickRateMismatch {
                    zone: zone.tick_rate(),
                    engine: config.tick_rate,
                });
            }
        }

        Ok(Self {
            zones,
            config,
            buffer: PixelBuffer::new(),
            output,
            rng,
        })
    }

    /// Process one tick
    ///
    /// Zones update in slice order, so on shared pixels the last zone wins.
    pub fn tick(&mut self) {
        for zone in self.zones {
            zone.tick(&mut self.buffer, &mut self.rng);
        }
        self.output.write(&self.buffer);
    }

    /// Settings access over the same zones
    pub const fn controller(&self) -> Controller<'a, P> {
        Controller::new(self.zones)
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn buffer(&self) -> &PixelBuffer<LEDS> {
        &self.buffer
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
