use std::borrow::Cow;
use std::io::Write;

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::app_config::LineEnding;
use crate::errors::FormatError;
use crate::timecodes;

// @module: MPL2 dialog matching and SRT cue emission

// @const: MPL2 dialog line regex, byte-oriented so any text encoding passes through
static DIALOG_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s-u)^\[(?P<start>[0-9]+)\]\[(?P<stop>[0-9]+)\](?P<text>.*)$").unwrap()
});

const CUE_ARROW: &[u8] = b" --> ";
const ITALIC_OPEN: &[u8] = b"<i>";
const ITALIC_CLOSE: &[u8] = b"</i>";
const SEGMENT_SEPARATOR: u8 = b'|';
const ITALIC_MARKER: u8 = b'/';

/// One byte chunk of an SRT cue
pub type CueToken<'a> = Cow<'a, [u8]>;

// @struct: Matched MPL2 dialog line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRecord<'a> {
    // @field: Start marker digits (tenths of a second)
    pub start: &'a [u8],

    // @field: Stop marker digits (tenths of a second)
    pub stop: &'a [u8],

    // @field: Raw dialog payload, untrimmed
    pub text: &'a [u8],
}

/// Match one raw line (without its terminator) against `[START][STOP]TEXT`.
///
/// Returns `None` for anything else; callers skip those lines.
pub fn parse_dialog_line(line: &[u8]) -> Option<DialogRecord<'_>> {
    let caps = DIALOG_LINE_REGEX.captures(line)?;

    Some(DialogRecord {
        start: caps.name("start")?.as_bytes(),
        stop: caps.name("stop")?.as_bytes(),
        text: caps.name("text").map_or(&[][..], |m| m.as_bytes()),
    })
}

/// Styling of a single `|`-separated dialog segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle<'a> {
    Plain(&'a [u8]),
    Italic(&'a [u8]),
}

impl<'a> SegmentStyle<'a> {
    /// Trim the segment and detect a leading `/` italic marker.
    ///
    /// Only one marker is consumed; the rest of the segment is kept as-is.
    pub fn classify(segment: &'a [u8]) -> Self {
        let trimmed = trim_whitespace(segment);
        match trimmed.split_first() {
            Some((&ITALIC_MARKER, rest)) => Self::Italic(rest),
            _ => Self::Plain(trimmed),
        }
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| !is_whitespace(*b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_whitespace(*b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

// @struct: Fully formatted SRT cue ready for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrtCue<'a> {
    // @field: 1-based sequence number
    pub index: usize,

    // @field: Formatted start timestamp
    pub start: String,

    // @field: Formatted stop timestamp
    pub stop: String,

    // @field: Raw dialog payload
    pub text: &'a [u8],
}

impl<'a> SrtCue<'a> {
    /// Build a cue, formatting both timestamps up front so a bad marker
    /// fails before anything is written.
    pub fn new(index: usize, record: &DialogRecord<'a>) -> Result<Self, FormatError> {
        Ok(SrtCue {
            index,
            start: timecodes::format_timestamp(record.start)?,
            stop: timecodes::format_timestamp(record.stop)?,
            text: record.text,
        })
    }

    /// Text segments of the cue with their styling
    pub fn segments(&self) -> impl Iterator<Item = SegmentStyle<'a>> + 'a {
        self.text
            .split(|b| *b == SEGMENT_SEPARATOR)
            .map(SegmentStyle::classify)
    }

    /// Ordered byte tokens of this cue
    pub fn tokens(&self, line_ending: LineEnding) -> Vec<CueToken<'_>> {
        let eol = line_ending.as_bytes();
        let mut tokens: Vec<CueToken<'_>> = vec![
            Cow::Owned(self.index.to_string().into_bytes()),
            Cow::Borrowed(eol),
            Cow::Borrowed(self.start.as_bytes()),
            Cow::Borrowed(CUE_ARROW),
            Cow::Borrowed(self.stop.as_bytes()),
            Cow::Borrowed(eol),
        ];

        for segment in self.segments() {
            match segment {
                SegmentStyle::Plain(text) => tokens.push(Cow::Borrowed(text)),
                SegmentStyle::Italic(text) => {
                    tokens.push(Cow::Borrowed(ITALIC_OPEN));
                    tokens.push(Cow::Borrowed(text));
                    tokens.push(Cow::Borrowed(ITALIC_CLOSE));
                }
            }
            tokens.push(Cow::Borrowed(eol));
        }

        tokens.push(Cow::Borrowed(eol));
        tokens
    }

    /// Write the cue tokens in order
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W, line_ending: LineEnding) -> std::io::Result<()> {
        for token in self.tokens(line_ending) {
            writer.write_all(&token)?;
        }
        Ok(())
    }

    /// Concatenated cue bytes
    pub fn to_bytes(&self, line_ending: LineEnding) -> Vec<u8> {
        self.tokens(line_ending).concat()
    }
}
