//! SubRip (`.srt`) caption tracks.
//!
//! A track is parsed once when the composition is defined; lookups during frame
//! evaluation are a linear scan, which is fine at karaoke-track sizes.

use crate::foundation::error::{ReelError, ReelResult};

/// One caption, visible over `[start, end)` seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Subtitle {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Subtitle {
    pub fn is_active_at(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// Parsed caption list in source order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SubtitleTrack {
    subtitles: Vec<Subtitle>,
}

impl SubtitleTrack {
    pub fn new(subtitles: Vec<Subtitle>) -> Self {
        Self { subtitles }
    }

    pub fn parse(srt: &str) -> ReelResult<Self> {
        parse_srt(srt).map(Self::new)
    }

    pub fn as_slice(&self) -> &[Subtitle] {
        &self.subtitles
    }

    pub fn len(&self) -> usize {
        self.subtitles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtitles.is_empty()
    }

    pub fn text_at(&self, t: f64) -> Option<&str> {
        subtitle_at(&self.subtitles, t)
    }
}

/// First caption in list order whose `[start, end)` window contains `t`.
pub fn subtitle_at(subtitles: &[Subtitle], t: f64) -> Option<&str> {
    subtitles
        .iter()
        .find(|s| s.is_active_at(t))
        .map(|s| s.text.as_str())
}

/// Parse SRT text into captions.
///
/// Blocks without a `-->` timing line or with blank text are skipped; a timing
/// line whose timestamps are malformed fails the whole parse.
pub fn parse_srt(srt: &str) -> ReelResult<Vec<Subtitle>> {
    let mut out = Vec::new();
    let mut block: Vec<(usize, &str)> = Vec::new();

    for (line_no, raw) in srt.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            flush_block(&block, &mut out)?;
            block.clear();
        } else {
            block.push((line_no + 1, line));
        }
    }
    flush_block(&block, &mut out)?;

    Ok(out)
}

fn flush_block(block: &[(usize, &str)], out: &mut Vec<Subtitle>) -> ReelResult<()> {
    if block.is_empty() {
        return Ok(());
    }
    // Line 0 is the cue index; its content is not interpreted.
    let Some(&(line_no, timing)) = block.get(1) else {
        tracing::debug!(line = block[0].0, "srt block without timing line skipped");
        return Ok(());
    };
    if !timing.contains("-->") {
        tracing::debug!(line = line_no, "srt block without '-->' skipped");
        return Ok(());
    }

    let (start_s, end_s) = timing
        .split_once("-->")
        .ok_or_else(|| ReelError::subtitle(format!("line {line_no}: missing '-->'")))?;
    let start = parse_timestamp(start_s.trim())
        .map_err(|e| ReelError::subtitle(format!("line {line_no}: {e}")))?;
    let end = parse_timestamp(end_s.trim())
        .map_err(|e| ReelError::subtitle(format!("line {line_no}: {e}")))?;

    let text = block[2..]
        .iter()
        .map(|(_, l)| *l)
        .collect::<Vec<_>>()
        .join(" ");
    let text = text.trim();
    if text.is_empty() {
        tracing::debug!(line = line_no, "srt block with empty text dropped");
        return Ok(());
    }
    if end <= start {
        tracing::debug!(line = line_no, start, end, "srt block with end <= start dropped");
        return Ok(());
    }

    out.push(Subtitle {
        start,
        end,
        text: text.to_string(),
    });
    Ok(())
}

/// Parse a fixed-width `HH:MM:SS,mmm` timestamp into seconds.
pub fn parse_timestamp(ts: &str) -> Result<f64, String> {
    let b = ts.as_bytes();
    if b.len() != 12 || b[2] != b':' || b[5] != b':' || b[8] != b',' {
        return Err(format!("malformed timestamp '{ts}' (expected HH:MM:SS,mmm)"));
    }

    let field = |range: std::ops::Range<usize>| -> Result<u32, String> {
        let s = &ts[range];
        if !s.bytes().all(|c| c.is_ascii_digit()) {
            return Err(format!("malformed timestamp '{ts}': '{s}' is not numeric"));
        }
        s.parse::<u32>()
            .map_err(|e| format!("malformed timestamp '{ts}': {e}"))
    };

    let h = field(0..2)?;
    let m = field(3..5)?;
    let s = field(6..8)?;
    let ms = field(9..12)?;
    if m >= 60 || s >= 60 {
        return Err(format!("malformed timestamp '{ts}': minutes/seconds out of range"));
    }

    Ok(f64::from(h) * 3600.0 + f64::from(m) * 60.0 + f64::from(s) + f64::from(ms) / 1000.0)
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/srt.rs"]
mod tests;
