//! Reference installation
//!
//! A 106 pixel strip threaded through a painting: the eyes, the hair, an
//! amulet and the background are lit as separate zones.

use crate::error::ZoneError;
use crate::settings::EffectSettings;
use crate::zone::Zone;

pub const LED_COUNT: usize = 106;

/// Largest zone (hair) rounded up
pub const MAX_ZONE_PIXELS: usize = 64;

pub const ZONE_EYE: usize = 0;
pub const ZONE_HAIR: usize = 1;
pub const ZONE_AMULET: usize = 2;
pub const ZONE_BACKGROUND: usize = 3;
pub const ZONE_COUNT: usize = 4;

pub const EYE_PIXELS: &[u16] = &[44, 51];

pub const HAIR_PIXELS: &[u16] = &[
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 40, 41, 42, 43, 45, 46, 47, 48, 49, 50,
    52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 78, 79, 80, 81,
];

pub const AMULET_PIXELS: &[u16] = &[74, 75, 76, 77];

pub const BACKGROUND_PIXELS: &[u16] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 38,
    39, 65, 66, 67, 68, 69, 70, 71, 72, 73, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95,
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105,
];

pub const ZONE_PIXELS: [&[u16]; ZONE_COUNT] =
    [EYE_PIXELS, HAIR_PIXELS, AMULET_PIXELS, BACKGROUND_PIXELS];

/// Settings every zone boots with when nothing else is stored
pub const BOOT_SETTINGS: [EffectSettings; ZONE_COUNT] = [
    EffectSettings {
        period: 1.0,
        ..EffectSettings::constant(0xFF_00_00)
    },
    EffectSettings::constant(0x97_76_E3),
    EffectSettings {
        period: 3.0,
        ..EffectSettings::constant(0x00_FF_00)
    },
    EffectSettings {
        activation_percent: 10,
        ..EffectSettings::gradient(0x1D_8A_04, 0x00_00_00, 2.0)
    },
];

/// Build the reference zones without effects
///
/// Use [`crate::Controller::restore`] to start them.
pub fn zones(tick_rate: u16) -> Result<[Zone<MAX_ZONE_PIXELS>; ZONE_COUNT], ZoneError> {
    Ok([
        Zone::new(EYE_PIXELS, LED_COUNT, tick_rate)?,
        Zone::new(HAIR_PIXELS, LED_COUNT, tick_rate)?,
        Zone::new(AMULET_PIXELS, LED_COUNT, tick_rate)?,
        Zone::new(BACKGROUND_PIXELS, LED_COUNT, tick_rate)?,
    ])
}
