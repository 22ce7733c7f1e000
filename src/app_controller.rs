use log::{debug, info, trace};
use std::fmt;
use std::io::{BufRead, Write};

use crate::app_config::{Config, LineEnding};
use crate::errors::ConversionError;
use crate::subtitle_processor::{SrtCue, parse_dialog_line};

// @module: Application controller for MPL2 to SRT conversion

/// Counters collected during one conversion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Input lines read
    pub lines_read: usize,

    /// SRT cues written
    pub cues_written: usize,

    /// Lines that were not MPL2 dialog lines
    pub lines_skipped: usize,
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} lines read, {} cues written, {} lines skipped",
            self.lines_read, self.cues_written, self.lines_skipped
        )
    }
}

/// Main application controller for subtitle conversion
#[derive(Debug, Clone)]
pub struct Controller {
    // @field: Terminator for every emitted line
    line_ending: LineEnding,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(LineEnding::default())
    }
}

impl Controller {
    // @method: Create a controller writing the given line terminator
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            line_ending: line_ending.resolve(),
        }
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: &Config) -> Self {
        Self::new(config.line_ending)
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Convert an MPL2 byte stream into SRT, one line at a time.
    ///
    /// Lines that are not dialog lines are skipped without consuming a
    /// sequence number. Output written before a fatal error stays written.
    pub fn convert<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<ConversionStats, ConversionError> {
        let mut stats = ConversionStats::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            stats.lines_read += 1;

            let raw = strip_line_terminator(&line);
            let Some(record) = parse_dialog_line(raw) else {
                debug!("Skipping non-dialog line {}", stats.lines_read);
                stats.lines_skipped += 1;
                continue;
            };

            let cue = SrtCue::new(stats.cues_written + 1, &record).map_err(|source| ConversionError::Format {
                line: stats.lines_read,
                source,
            })?;
            cue.write_to(&mut output, self.line_ending)?;
            stats.cues_written += 1;

            trace!("Wrote cue {} ({} --> {})", cue.index, cue.start, cue.stop);
        }

        output.flush()?;
        info!("Conversion finished: {}", stats);

        Ok(stats)
    }

    /// Convert an in-memory MPL2 document
    pub fn convert_bytes(&self, input: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let mut output = Vec::with_capacity(input.len() * 2);
        self.convert(input, &mut output)?;
        Ok(output)
    }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
