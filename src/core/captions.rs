//! Caption cue derivation.
//!
//! Cues come from the first source that has anything to offer:
//! 1. externally parsed subtitle cues,
//! 2. the first scene's script, when it splits into several segments, spread evenly
//!    over the project,
//! 3. one cue per scene, timed by the scene's own frames, with the script's
//!    segments reused cyclically as text.
//!
//! No derived cue is ever given the whole project when the source has more than
//! one segment or scene.

use serde::{Deserialize, Serialize};

use crate::core::frame_math::frames_to_seconds;
use crate::state::Project;

/// A caption entry with a bounded time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionCue {
    pub index: usize,
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub text: String,
}

impl CaptionCue {
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }

    pub fn contains(&self, seconds: f64) -> bool {
        self.start_seconds <= seconds && seconds < self.end_seconds
    }
}

/// Which source produced a cue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueSource {
    External,
    Script,
    Scenes,
}

impl CueSource {
    pub fn label(self) -> &'static str {
        match self {
            CueSource::External => "Subtitles",
            CueSource::Script => "Script",
            CueSource::Scenes => "Scenes",
        }
    }
}

/// The source `derive_cues` will use for this project.
pub fn cue_source(project: &Project, external: &[CaptionCue]) -> CueSource {
    if !external.is_empty() {
        CueSource::External
    } else if script_segments(project).len() > 1 {
        CueSource::Script
    } else {
        CueSource::Scenes
    }
}

/// Derive the caption cues to display for `project`.
///
/// `min_cue_seconds` is the shortest cue that may be produced; zero-length cues
/// are never returned.
pub fn derive_cues(project: &Project, external: &[CaptionCue], min_cue_seconds: f64) -> Vec<CaptionCue> {
    let total_seconds = project.total_seconds();
    let min_cue = min_cue_seconds.max(f64::EPSILON).min(total_seconds);

    match cue_source(project, external) {
        CueSource::External => clamp_external(external, total_seconds, min_cue),
        CueSource::Script => {
            distribute_segments(&script_segments(project), total_seconds)
        }
        CueSource::Scenes => scene_cues(project, total_seconds, min_cue),
    }
}

/// The cue shown at `seconds`, if any.
pub fn active_cue(cues: &[CaptionCue], seconds: f64) -> Option<&CaptionCue> {
    cues.iter().rev().find(|cue| cue.contains(seconds))
}

fn first_scene_text(project: &Project) -> Option<&str> {
    project
        .scenes
        .first()
        .map(|scene| scene.text.trim())
        .filter(|text| !text.is_empty())
}

/// Segments of the first scene's text; a lone segment is not spread over the project.
fn script_segments(project: &Project) -> Vec<String> {
    first_scene_text(project).map(segment_script).unwrap_or_default()
}

fn clamp_external(external: &[CaptionCue], total_seconds: f64, min_cue: f64) -> Vec<CaptionCue> {
    let latest_start = (total_seconds - min_cue).max(0.0);
    let mut cues: Vec<CaptionCue> = external
        .iter()
        .map(|cue| {
            let start = finite_or(cue.start_seconds, 0.0).clamp(0.0, latest_start);
            let earliest_end = (start + min_cue).min(total_seconds);
            let end = finite_or(cue.end_seconds, earliest_end).clamp(earliest_end, total_seconds);
            CaptionCue {
                index: cue.index,
                start_seconds: start,
                end_seconds: end,
                text: cue.text.clone(),
            }
        })
        .collect();
    cues.sort_by(|a, b| a.start_seconds.total_cmp(&b.start_seconds));
    cues
}

fn distribute_segments(segments: &[String], total_seconds: f64) -> Vec<CaptionCue> {
    if segments.is_empty() {
        return Vec::new();
    }
    let seconds_per_segment = total_seconds / segments.len() as f64;
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(i, text)| CaptionCue {
            index: i + 1,
            start_seconds: i as f64 * seconds_per_segment,
            end_seconds: if i == last {
                total_seconds
            } else {
                (i + 1) as f64 * seconds_per_segment
            },
            text: text.clone(),
        })
        .collect()
}

fn scene_cues(project: &Project, total_seconds: f64, min_cue: f64) -> Vec<CaptionCue> {
    let fps = project.fps();
    let total_frames = project.total_frames();
    let segments = script_segments(project);

    let mut cues: Vec<CaptionCue> = project
        .scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| {
            let start_frame = scene.start_frame.clamp(0, total_frames);
            let end_frame = scene.end_frame().clamp(start_frame, total_frames);
            let mut start = frames_to_seconds(start_frame, fps);
            let mut end = frames_to_seconds(end_frame, fps);
            if end - start < min_cue {
                start = start.min((total_seconds - min_cue).max(0.0));
                end = start + min_cue;
            }
            let text = if segments.is_empty() {
                let own = scene.text.trim();
                if own.is_empty() {
                    format!("Scene {}", i + 1)
                } else {
                    own.to_string()
                }
            } else {
                segments[i % segments.len()].clone()
            };
            CaptionCue {
                index: i + 1,
                start_seconds: start,
                end_seconds: end,
                text,
            }
        })
        .collect();
    cues.sort_by(|a, b| a.start_seconds.total_cmp(&b.start_seconds));
    cues
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

// =============================================================================
// Script segmentation
// =============================================================================

/// Split script text into caption segments.
///
/// Tries paragraph breaks, then line breaks, then sentence-ending punctuation,
/// and uses the first splitter that yields more than one segment. Otherwise the
/// whole trimmed text is one segment (none for blank text).
pub fn segment_script(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    for split in [split_paragraphs, split_lines, split_sentences] {
        let segments = split(text);
        if segments.len() > 1 {
            return segments;
        }
    }
    vec![text.to_string()]
}

fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }
    paragraphs
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if !is_sentence_end(c) {
            continue;
        }
        match chars.peek() {
            Some(next) if is_sentence_end(*next) => continue,
            Some(next) if !next.is_whitespace() => continue,
            _ => {}
        }
        let sentence = current.trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        current.clear();
    }
    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
