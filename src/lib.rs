#![no_std]

pub mod color;
pub mod controller;
pub mod effect;
pub mod engine;
pub mod error;
pub mod pixel_buffer;
pub mod preset;
pub mod settings;
pub mod store;
pub mod tick_scheduler;
pub mod wire;
pub mod zone;

pub use controller::Controller;
pub use effect::{Effect, EffectSlot};
pub use engine::{DEFAULT_TICK_RATE, Engine, EngineConfig};
pub use error::ZoneError;
pub use pixel_buffer::PixelBuffer;
pub use settings::{EffectKind, EffectSettings};
pub use store::SettingsStore;
pub use tick_scheduler::{TickResult, TickScheduler};
pub use wire::{DecodeError, SettingField, SettingsPatch};
pub use zone::Zone;

pub use color::{FloatRgb, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait and calls it once per tick.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
