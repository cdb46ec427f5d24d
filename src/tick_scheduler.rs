//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::RngCore;

use crate::OutputDriver;
use crate::engine::Engine;

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Runs the engine, which renders all zones and flushes the output
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(engine);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<'a, O: OutputDriver, R: RngCore, const LEDS: usize, const P: usize> {
    engine: Engine<'a, O, R, LEDS, P>,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<'a, O: OutputDriver, R: RngCore, const LEDS: usize, const P: usize>
    TickScheduler<'a, O, R, LEDS, P>
{
    /// Create a new scheduler ticking at the engine's configured rate.
    pub fn new(engine: Engine<'a, O, R, LEDS, P>) -> Self {
        let tick_duration = engine.config().tick_duration();
        Self {
            engine,
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// If we've fallen more than two ticks behind, the schedule restarts
    /// from `now` instead of catching up in a burst.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.tick_duration * 2;
        if now > self.next_tick + max_drift {
            #[cfg(feature = "esp32-log")]
            println!(
                "zones: tick late by {} ms, resetting schedule",
                (now - self.next_tick).as_millis()
            );

            self.next_tick = now;
        }

        self.engine.tick();

        self.next_tick += self.tick_duration;

        let sleep_duration = if self.next_tick > now {
            self.next_tick - now
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub const fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &Engine<'a, O, R, LEDS, P> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut Engine<'a, O, R, LEDS, P> {
        &mut self.engine
    }
}
