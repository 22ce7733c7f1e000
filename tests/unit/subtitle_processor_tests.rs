/*!
 * Tests for dialog line matching and SRT cue emission
 */

use mpl2srt::app_config::LineEnding;
use mpl2srt::subtitle_processor::{DialogRecord, SegmentStyle, SrtCue, parse_dialog_line};

/// Test that dialog lines keep their raw fields
#[test]
fn test_parse_dialog_line_withValidLine_shouldKeepRawFields() {
    let record = parse_dialog_line(b"[0][10]Hello world").unwrap();
    assert_eq!(
        record,
        DialogRecord { start: b"0", stop: b"10", text: b"Hello world" }
    );
}

/// Brackets inside the text are part of the payload
#[test]
fn test_parse_dialog_line_withBracketsInText_shouldCaptureRemainder() {
    let record = parse_dialog_line(b"[1][2][3]x").unwrap();
    assert_eq!(record.text, b"[3]x");
}

/// Non-UTF-8 payloads still match
#[test]
fn test_parse_dialog_line_withLatin2Bytes_shouldMatch() {
    // "Zażółć" in ISO-8859-2
    let line = b"[10][20]Za\xbf\xf3\xb3\xe6";
    let record = parse_dialog_line(line).unwrap();
    assert_eq!(record.text, b"Za\xbf\xf3\xb3\xe6");
}

#[test]
fn test_parse_dialog_line_withMicroDvdLine_shouldNotMatch() {
    assert!(parse_dialog_line(b"{10}{20}Hello").is_none());
    assert!(parse_dialog_line(b"00:00:01:Hello").is_none());
}

/// Test segment styling
#[test]
fn test_segment_style_withItalicMarker_shouldStripOneSlash() {
    assert_eq!(SegmentStyle::classify(b"/Hello"), SegmentStyle::Italic(b"Hello"));
    assert_eq!(SegmentStyle::classify(b"Hello"), SegmentStyle::Plain(b"Hello"));
    assert_eq!(SegmentStyle::classify(b"Hel/lo"), SegmentStyle::Plain(b"Hel/lo"));
    assert_eq!(SegmentStyle::classify(b""), SegmentStyle::Plain(b""));
}

/// Test the tokens of a cue in order
#[test]
fn test_srt_cue_tokens_withTwoSegments_shouldEmitInOrder() {
    let record = parse_dialog_line(b"[0][10]Line one|/Line two").unwrap();
    let cue = SrtCue::new(3, &record).unwrap();
    let tokens = cue.tokens(LineEnding::Lf);
    let tokens: Vec<&[u8]> = tokens.iter().map(|t| t.as_ref()).collect();

    let expected: [&[u8]; 13] = [
        b"3", b"\n",
        b"00:00:00.000", b" --> ", b"00:00:01.000", b"\n",
        b"Line one", b"\n",
        b"<i>", b"Line two", b"</i>", b"\n",
        b"\n",
    ];
    assert_eq!(tokens, expected);
}

/// An empty payload still produces one (empty) text line
#[test]
fn test_srt_cue_withEmptyText_shouldEmitEmptyLine() {
    let record = parse_dialog_line(b"[5][6]").unwrap();
    let cue = SrtCue::new(1, &record).unwrap();
    assert_eq!(cue.to_bytes(LineEnding::Lf), b"1\n00:00:00.500 --> 00:00:00.600\n\n\n".to_vec());
}

/// Stripping tags and re-adding slashes gives back the trimmed segments
#[test]
fn test_srt_cue_segments_withMixedStyles_shouldRoundTrip() {
    let text: &[u8] = b" first |/second|  / third  |fourth/ ";
    let record = DialogRecord { start: b"0", stop: b"1", text };
    let cue = SrtCue::new(1, &record).unwrap();
    let output = cue.to_bytes(LineEnding::Lf);

    let text_lines: Vec<&[u8]> = output.split(|b| *b == b'\n').skip(2).take(4).collect();
    let rebuilt: Vec<Vec<u8>> = text_lines
        .iter()
        .map(|line| match line.strip_prefix(b"<i>").and_then(|l| l.strip_suffix(b"</i>")) {
            Some(inner) => [&b"/"[..], inner].concat(),
            None => line.to_vec(),
        })
        .collect();

    let expected: Vec<Vec<u8>> = vec![
        b"first".to_vec(),
        b"/second".to_vec(),
        b"/ third".to_vec(),
        b"fourth/".to_vec(),
    ];
    assert_eq!(rebuilt, expected);
}

#[test]
fn test_srt_cue_write_to_shouldMatchToBytes() {
    let record = parse_dialog_line(b"[100][200]/A|B").unwrap();
    let cue = SrtCue::new(12, &record).unwrap();
    let mut written = Vec::new();
    cue.write_to(&mut written, LineEnding::CrLf).unwrap();
    assert_eq!(written, cue.to_bytes(LineEnding::CrLf));
    assert!(written.starts_with(b"12\r\n00:00:10.000 --> 00:00:20.000\r\n<i>A</i>\r\nB\r\n"));
}
