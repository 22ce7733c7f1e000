/*!
 * Timecode conversion from MPL2 markers to SRT timestamps.
 *
 * MPL2 markers count tenths of a second. SRT timestamps are rendered as
 * `HH:MM:SS.mmm`. Hours wrap at 24 like a UTC wall clock; subtitle timing
 * is expected to stay within a day.
 */

use std::fmt;

use crate::errors::FormatError;

const DECISECONDS_PER_SECOND: u64 = 10;
const MILLIS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_HOUR: u64 = 3_600;
const HOURS_PER_DAY: u64 = 24;

/// A decomposed SRT timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
}

impl Timestamp {
    /// Decompose a count of tenths of a second.
    ///
    /// The fractional second is multiplied by 1000 and truncated. With a
    /// tenths-of-a-second source the millisecond field is therefore always a
    /// multiple of 100.
    pub fn from_deciseconds(deciseconds: u64) -> Self {
        let whole_seconds = deciseconds / DECISECONDS_PER_SECOND;
        let tenths = deciseconds % DECISECONDS_PER_SECOND;

        // Fixed point: fraction = tenths / 10
        let millis = tenths * MILLIS_PER_SECOND / DECISECONDS_PER_SECOND;

        Self {
            hours: ((whole_seconds / SECONDS_PER_HOUR) % HOURS_PER_DAY) as u8,
            minutes: ((whole_seconds % SECONDS_PER_HOUR) / 60) as u8,
            seconds: (whole_seconds % 60) as u8,
            millis: millis as u16,
        }
    }

    /// Seconds since midnight represented by this timestamp
    pub fn as_seconds(&self) -> f64 {
        f64::from(self.hours) * SECONDS_PER_HOUR as f64
            + f64::from(self.minutes) * 60.0
            + f64::from(self.seconds)
            + f64::from(self.millis) / MILLIS_PER_SECOND as f64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// Parse the digits of an MPL2 time marker into tenths of a second
pub fn parse_marker(marker: &[u8]) -> Result<u64, FormatError> {
    String::from_utf8_lossy(marker)
        .parse::<u64>()
        .map_err(|e| FormatError::invalid_marker(marker, e))
}

/// Convert an MPL2 time marker to the SRT timestamp text.
///
/// ```
/// use mpl2srt::timecodes::format_timestamp;
///
/// assert_eq!(format_timestamp(b"1793").unwrap(), "00:02:59.300");
/// ```
pub fn format_timestamp(marker: &[u8]) -> Result<String, FormatError> {
    let deciseconds = parse_marker(marker)?;
    Ok(Timestamp::from_deciseconds(deciseconds).to_string())
}
