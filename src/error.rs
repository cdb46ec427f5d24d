use core::fmt;

/// Error returned when zones are assembled or addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneError {
    /// The zone holds more pixels than its capacity
    TooManyPixels { count: usize, capacity: usize },
    /// The same pixel index is listed twice in one zone
    DuplicatePixel(u16),
    /// A pixel index does not exist on the strip
    PixelOutOfRange { index: u16, led_count: usize },
    /// The zone was built for another tick rate than the engine runs at
    TickRateMismatch { zone: u16, engine: u16 },
    /// No zone with this id
    UnknownZone(usize),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPixels { count, capacity } => {
                write!(f, "zone has {count} pixels, capacity is {capacity}")
            }
            Self::DuplicatePixel(index) => write!(f, "pixel {index} listed twice"),
            Self::PixelOutOfRange { index, led_count } => {
                write!(f, "pixel {index} out of range for {led_count} leds")
            }
            Self::TickRateMismatch { zone, engine } => {
                write!(f, "zone ticks at {zone} Hz, engine at {engine} Hz")
            }
            Self::UnknownZone(id) => write!(f, "unknown zone {id}"),
        }
    }
}
