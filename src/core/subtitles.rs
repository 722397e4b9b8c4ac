//! SubRip (`.srt`) reader for external caption files.
//!
//! WebVTT files with plain cues read too: the `WEBVTT` header block is skipped
//! and `.` is accepted as the millisecond separator.

use std::fs;
use std::path::Path;

use crate::core::captions::CaptionCue;
use crate::error::{EditorError, Result};

/// Parse SRT text into cues in file order.
///
/// Malformed blocks are skipped with a warning; the rest of the file still loads.
pub fn parse_srt(source: &str) -> Vec<CaptionCue> {
    let source = source.trim_start_matches('\u{feff}').replace("\r\n", "\n");
    let mut cues = Vec::new();
    let mut line_number = 1;

    for block in source.split("\n\n") {
        let block_line = line_number;
        line_number += block.lines().count() + 1;
        if block.trim().is_empty() || block.trim_start().starts_with("WEBVTT") {
            continue;
        }
        match parse_block(block, block_line, cues.len() + 1) {
            Ok(cue) => cues.push(cue),
            Err(err) => tracing::warn!(%err, "skipping subtitle block"),
        }
    }

    tracing::debug!(cues = cues.len(), "parsed subtitles");
    cues
}

/// Read and parse a subtitle file.
pub fn load_srt(path: &Path) -> Result<Vec<CaptionCue>> {
    let source = fs::read_to_string(path)
        .map_err(|err| EditorError::io("failed to read subtitles", path, err))?;
    Ok(parse_srt(&source))
}

fn parse_block(block: &str, line: usize, fallback_index: usize) -> Result<CaptionCue> {
    let mut lines = block.lines().map(str::trim).skip_while(|l| l.is_empty());
    let first = lines.next().unwrap_or_default();

    let (index, timing) = if first.contains("-->") {
        (fallback_index, first)
    } else {
        let index = first.parse().unwrap_or(fallback_index);
        (index, lines.next().unwrap_or_default())
    };

    let (start, end) = timing.split_once("-->").ok_or_else(|| EditorError::Subtitle {
        line,
        reason: format!("expected a timing line, found {timing:?}"),
    })?;
    let start_seconds = parse_timestamp(start).ok_or_else(|| bad_timestamp(line, start))?;
    // VTT cue settings follow the end time.
    let end = end.split_whitespace().next().unwrap_or_default();
    let end_seconds = parse_timestamp(end).ok_or_else(|| bad_timestamp(line, end))?;
    if end_seconds < start_seconds {
        return Err(EditorError::Subtitle {
            line,
            reason: "cue ends before it starts".to_string(),
        });
    }

    let text = lines.collect::<Vec<_>>().join("\n");
    Ok(CaptionCue {
        index,
        start_seconds,
        end_seconds,
        text,
    })
}

fn bad_timestamp(line: usize, value: &str) -> EditorError {
    EditorError::Subtitle {
        line,
        reason: format!("invalid timestamp {:?}", value.trim()),
    }
}

/// `HH:MM:SS,mmm`, `MM:SS.mmm` or `SS,mmm`.
fn parse_timestamp(value: &str) -> Option<f64> {
    let value = value.trim();
    let (clock, millis) = match value.rsplit_once(|c: char| c == ',' || c == '.') {
        Some((clock, millis)) => (clock, millis),
        None => (value, "0"),
    };
    if millis.is_empty() || !millis.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let fraction: f64 = format!("0.{millis}").parse().ok()?;

    let mut seconds = 0.0;
    let parts: Vec<&str> = clock.split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }
    for part in parts {
        let unit: u32 = part.parse().ok()?;
        seconds = seconds * 60.0 + f64::from(unit);
    }
    Some(seconds + fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1\r\n00:00:00,000 --> 00:00:02,500\r\nHello there\r\n\r\n2\r\n00:00:02,500 --> 00:00:05,000\r\nSecond line\r\nwraps\r\n";

    #[test]
    fn parses_srt_blocks() {
        let cues = parse_srt(SAMPLE);
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].index, 1);
        assert_eq!(cues[0].end_seconds, 2.5);
        assert_eq!(cues[1].start_seconds, 2.5);
        assert_eq!(cues[1].text, "Second line\nwraps");
    }

    #[test]
    fn skips_malformed_blocks() {
        let source = "1\nnot a timing\nbroken\n\n2\n00:00:03,000 --> 00:00:01,000\nbackwards\n\n3\n00:01:00,000 --> 00:01:02,000\nkept";
        let cues = parse_srt(source);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].index, 3);
        assert_eq!(cues[0].start_seconds, 60.0);
    }

    #[test]
    fn reads_webvtt_cues() {
        let source = "WEBVTT\n\n00:01.000 --> 00:03.250 align:start\nShort form\n";
        let cues = parse_srt(source);
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].index, 1);
        assert_eq!(cues[0].start_seconds, 1.0);
        assert_eq!(cues[0].end_seconds, 3.25);
    }

    #[test]
    fn timestamp_formats() {
        assert!((parse_timestamp("01:02:03,004").unwrap() - 3723.004).abs() < 1e-9);
        assert_eq!(parse_timestamp("12"), Some(12.0));
        assert_eq!(parse_timestamp("aa:00,000"), None);
        assert_eq!(parse_timestamp("00:00:01,"), None);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!("storyreel-{}.srt", uuid::Uuid::new_v4()));
        assert!(matches!(load_srt(&path), Err(EditorError::Io { .. })));
    }
}
