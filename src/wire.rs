//! Binary encoding of effect settings
//!
//! The configuration transport exposes every settings field as a separate
//! attribute and writes them one at a time. Each write is decoded into a
//! [`SettingsPatch`] and merged into the zone's current settings.
//!
//! Field layout:
//! - kind: 1 byte
//! - period: 2 bytes, `byte0 + byte1 / 256` seconds
//! - activation percent: 1 byte
//! - colors: 3 bytes each, red, green, blue

use core::fmt;

use heapless::Vec;

use crate::color::Rgb;
use crate::settings::{EffectKind, EffectSettings};

/// Length of a complete encoded [`EffectSettings`] record
pub const SETTINGS_LEN: usize = 10;

/// Longest single field payload
pub const MAX_FIELD_LEN: usize = 3;

/// Largest period that fits the 8.8 fixed-point encoding
pub const MAX_PERIOD: f32 = 255.0 + 255.0 / 256.0;

/// Error returned when a payload cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload size does not match the field
    Length { expected: usize, actual: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
        }
    }
}

/// Individually writable settings field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Kind,
    Period,
    Activation,
    Color1,
    Color2,
}

impl SettingField {
    pub const ALL: [Self; 5] = [
        Self::Kind,
        Self::Period,
        Self::Activation,
        Self::Color1,
        Self::Color2,
    ];

    /// Encoded payload size in bytes
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Kind | Self::Activation => 1,
            Self::Period => 2,
            Self::Color1 | Self::Color2 => 3,
        }
    }

    /// Offset of the field within a full settings record
    const fn offset(self) -> usize {
        match self {
            Self::Kind => 0,
            Self::Period => 1,
            Self::Activation => 3,
            Self::Color1 => 4,
            Self::Color2 => 7,
        }
    }
}

/// Single-field update decoded from the transport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsPatch {
    Kind(EffectKind),
    Period(f32),
    Activation(u8),
    Color1(Rgb),
    Color2(Rgb),
}

impl SettingsPatch {
    /// Decode a field payload
    ///
    /// Unknown effect kinds decode as [`EffectKind::Off`].
    pub fn decode(field: SettingField, bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != field.payload_len() {
            return Err(DecodeError::Length {
                expected: field.payload_len(),
                actual: bytes.len(),
            });
        }
        Ok(match field {
            SettingField::Kind => Self::Kind(EffectKind::from_raw_or_off(bytes[0])),
            SettingField::Period => Self::Period(decode_period([bytes[0], bytes[1]])),
            SettingField::Activation => Self::Activation(bytes[0]),
            SettingField::Color1 => Self::Color1(decode_color(bytes)),
            SettingField::Color2 => Self::Color2(decode_color(bytes)),
        })
    }

    /// Merge the patch into a complete settings record
    pub fn apply_to(self, settings: &mut EffectSettings) {
        match self {
            Self::Kind(kind) => settings.kind = kind,
            Self::Period(period) => settings.period = period,
            Self::Activation(percent) => settings.activation_percent = percent,
            Self::Color1(color) => settings.color1 = color,
            Self::Color2(color) => settings.color2 = color,
        }
    }
}

/// Encode one field of `settings` for a transport read
pub fn encode_field(settings: &EffectSettings, field: SettingField) -> Vec<u8, MAX_FIELD_LEN> {
    let record = settings.to_bytes();
    let start = field.offset();
    let mut out = Vec::new();
    // Every field fits MAX_FIELD_LEN
    let _ = out.extend_from_slice(&record[start..start + field.payload_len()]);
    out
}

impl EffectSettings {
    /// Encode the full record as kind, period, activation, color1, color2
    pub fn to_bytes(&self) -> [u8; SETTINGS_LEN] {
        let period = encode_period(self.period);
        [
            self.kind.to_raw(),
            period[0],
            period[1],
            self.activation_percent,
            self.color1.r,
            self.color1.g,
            self.color1.b,
            self.color2.r,
            self.color2.g,
            self.color2.b,
        ]
    }

    /// Decode a full record produced by [`EffectSettings::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != SETTINGS_LEN {
            return Err(DecodeError::Length {
                expected: SETTINGS_LEN,
                actual: bytes.len(),
            });
        }
        let mut settings = Self::off();
        for field in SettingField::ALL {
            let start = field.offset();
            SettingsPatch::decode(field, &bytes[start..start + field.payload_len()])?
                .apply_to(&mut settings);
        }
        Ok(settings)
    }
}

fn decode_period(bytes: [u8; 2]) -> f32 {
    f32::from(bytes[0]) + f32::from(bytes[1]) / 256.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_period(period: f32) -> [u8; 2] {
    // Clamp before rounding so the fraction never carries past 255
    let fixed = libm::roundf(period.clamp(0.0, MAX_PERIOD) * 256.0) as u16;
    fixed.to_be_bytes()
}

fn decode_color(bytes: &[u8]) -> Rgb {
    Rgb {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
    }
}
