/*!
 * # mpl2srt - MPL2 to SRT subtitle converter
 *
 * A Rust library for converting MPL2 subtitles into SubRip (SRT) without
 * touching the character encoding: the output has the same encoding as the
 * input, whatever it is.
 *
 * ## Features
 *
 * - Byte-oriented matching of `[START][STOP]TEXT` dialog lines
 * - Tenths-of-a-second markers rendered as `HH:MM:SS.mmm`
 * - `|` line splitting and `/` italic markers mapped to `<i>...</i>`
 * - Streaming conversion over any `BufRead`/`Write` pair
 * - Configurable line terminator
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Dialog line matching and SRT cue emission
 * - `timecodes`: MPL2 marker to SRT timestamp conversion
 * - `app_controller`: The streaming conversion pass
 * - `app_config`: Configuration management
 * - `file_utils`: Input/output stream handling
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod timecodes;

// Re-export main types for easier usage
pub use app_config::{Config, LineEnding, LogLevel};
pub use app_controller::{ConversionStats, Controller};
pub use errors::{AppError, ConversionError, FormatError};
pub use subtitle_processor::{DialogRecord, SegmentStyle, SrtCue, parse_dialog_line};
pub use timecodes::{Timestamp, format_timestamp};
