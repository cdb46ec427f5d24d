//! Effect settings
//!
//! A plain value record that fully determines which effect a zone runs
//! and with which parameters.

use crate::color::{BLACK, Rgb, rgb_from_u32};

const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_CONST: &str = "const";
const EFFECT_NAME_BLINK: &str = "blink";
const EFFECT_NAME_GRADIENT: &str = "gradient";
const EFFECT_NAME_RANDOM: &str = "random";

const EFFECT_ID_OFF: u8 = 0;
const EFFECT_ID_CONST: u8 = 1;
const EFFECT_ID_BLINK: u8 = 2;
const EFFECT_ID_GRADIENT: u8 = 3;
const EFFECT_ID_RANDOM: u8 = 4;

/// Known effect kinds that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectKind {
    #[default]
    Off = EFFECT_ID_OFF,
    Const = EFFECT_ID_CONST,
    Blink = EFFECT_ID_BLINK,
    Gradient = EFFECT_ID_GRADIENT,
    Random = EFFECT_ID_RANDOM,
}

impl EffectKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_CONST => Self::Const,
            EFFECT_ID_BLINK => Self::Blink,
            EFFECT_ID_GRADIENT => Self::Gradient,
            EFFECT_ID_RANDOM => Self::Random,
            _ => return None,
        })
    }

    /// Decode a raw kind, treating unknown values as [`EffectKind::Off`]
    pub fn from_raw_or_off(value: u8) -> Self {
        Self::from_raw(value).unwrap_or(Self::Off)
    }

    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => EFFECT_NAME_OFF,
            Self::Const => EFFECT_NAME_CONST,
            Self::Blink => EFFECT_NAME_BLINK,
            Self::Gradient => EFFECT_NAME_GRADIENT,
            Self::Random => EFFECT_NAME_RANDOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_OFF => Some(Self::Off),
            EFFECT_NAME_CONST => Some(Self::Const),
            EFFECT_NAME_BLINK => Some(Self::Blink),
            EFFECT_NAME_GRADIENT => Some(Self::Gradient),
            EFFECT_NAME_RANDOM => Some(Self::Random),
            _ => None,
        }
    }
}

/// Configuration of a single zone effect
///
/// `activation_percent` is only used by [`EffectKind::Random`] and `color2`
/// only by [`EffectKind::Gradient`]. Blink ignores `color2` and fades to black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    pub kind: EffectKind,
    /// Seconds. Half-cycle time for gradients, fade time for random flicker
    pub period: f32,
    /// Chance per second (0-100) that an unlit random pixel ignites
    pub activation_percent: u8,
    pub color1: Rgb,
    pub color2: Rgb,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self::off()
    }
}

impl EffectSettings {
    /// Settings that switch the zone off
    pub const fn off() -> Self {
        Self {
            kind: EffectKind::Off,
            period: 0.0,
            activation_percent: 0,
            color1: BLACK,
            color2: BLACK,
        }
    }

    /// Solid color from a packed `0xRRGGBB` value
    pub const fn constant(color: u32) -> Self {
        Self {
            kind: EffectKind::Const,
            color1: rgb_from_u32(color),
            ..Self::off()
        }
    }

    /// Fade from `color` to black and back over `period` seconds each way
    pub const fn blink(color: u32, period: f32) -> Self {
        Self {
            kind: EffectKind::Blink,
            period,
            color1: rgb_from_u32(color),
            ..Self::off()
        }
    }

    /// Ping-pong between two packed colors, `period` seconds each way
    pub const fn gradient(from: u32, to: u32, period: f32) -> Self {
        Self {
            kind: EffectKind::Gradient,
            period,
            color1: rgb_from_u32(from),
            color2: rgb_from_u32(to),
            ..Self::off()
        }
    }

    /// Pixels ignite with `activation_percent` chance per second and fade
    /// out over `period` seconds
    pub const fn random(color: u32, period: f32, activation_percent: u8) -> Self {
        Self {
            kind: EffectKind::Random,
            period,
            activation_percent,
            color1: rgb_from_u32(color),
            ..Self::off()
        }
    }
}
