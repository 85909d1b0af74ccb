//! Staff showcase animation styles.
//!
//! Every style is a pure function of content-local time and the roster; the
//! [`AnimationStyle`] tag picks which one runs.

use crate::animation::beat::BeatTrack;
use crate::composition::roster::StaffMember;
use crate::config::timeline::TimelineConfig;
use crate::foundation::core::{Fps, FrameIndex, Rect};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::layer::{Layer, TextStyle};

pub mod grid;
pub mod kenburns;
pub mod polaroid;
pub mod scroll;

/// Style tag selecting the content-phase animation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    /// Side-by-side pairs scrolling right to left.
    #[default]
    Scroll,
    /// One photo at a time with slow zoom/pan and cross-fades.
    KenBurns,
    /// Tilted instant-photo cards piling up, bobbing on the beat.
    Polaroid,
    /// Paged 7x4 grid with spring pop-in.
    Grid,
}

impl AnimationStyle {
    pub const ALL: [Self; 4] = [Self::Scroll, Self::KenBurns, Self::Polaroid, Self::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::KenBurns => "kenburns",
            Self::Polaroid => "polaroid",
            Self::Grid => "grid",
        }
    }
}

impl std::fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnimationStyle {
    type Err = ReelError;

    fn from_str(s: &str) -> ReelResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ReelError::validation(format!("unknown animation style '{s}'")))
    }
}

/// Inputs shared by every style engine for one frame.
#[derive(Clone, Copy, Debug)]
pub struct StyleCtx<'a> {
    /// Seconds since the start of the content phase.
    pub t: f64,
    /// Frames since the start of the content phase.
    pub local_frame: FrameIndex,
    pub roster: &'a [StaffMember],
    pub timeline: &'a TimelineConfig,
    /// Pacing window: the whole roster is shown once over this many seconds.
    pub duration_secs: f64,
    /// Beats relative to the content phase start.
    pub beats: &'a BeatTrack,
}

impl StyleCtx<'_> {
    pub fn fps(&self) -> Fps {
        self.timeline.fps()
    }

    /// Local time clamped to the pacing window's lower bound.
    pub(crate) fn time(&self) -> f64 {
        if self.t.is_finite() { self.t.max(0.0) } else { 0.0 }
    }

    /// Seconds allotted to each roster entry; `None` when nothing can be paced.
    pub(crate) fn per_photo_secs(&self) -> Option<f64> {
        if self.roster.is_empty() || !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return None;
        }
        Some(self.duration_secs / self.roster.len() as f64)
    }

    /// Size of the photo area below the caption bar.
    pub(crate) fn area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.timeline.width, self.timeline.bg_height())
    }
}

/// Layers for the active style, in photo-area coordinates.
pub fn render_style(style: AnimationStyle, ctx: &StyleCtx<'_>) -> Vec<Layer> {
    match style {
        AnimationStyle::Scroll => scroll::render(ctx),
        AnimationStyle::KenBurns => kenburns::render(ctx),
        AnimationStyle::Polaroid => polaroid::render(ctx),
        AnimationStyle::Grid => grid::render(ctx),
    }
}

pub(crate) const LABEL_FONT_PX: f64 = 24.0;
pub(crate) const LABEL_PAD_Y: f64 = 6.0;
pub(crate) const LABEL_HEIGHT: f64 = LABEL_FONT_PX + 2.0 * LABEL_PAD_Y;
const LABEL_BAND_RGBA: [u8; 4] = [0, 0, 0, 153];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Rough advance width used to size pill-shaped labels before the host measures text.
pub(crate) fn estimate_text_width(text: &str, size_px: f64) -> f64 {
    text.chars().count() as f64 * size_px * 0.55
}

/// Translucent name band: bold white name centered on a 60% black strip.
pub(crate) fn name_label(id: &str, rect: Rect, name: &str, corner_radius: f64) -> Layer {
    let local = Rect::from_origin_size((0.0, 0.0), rect.size());
    Layer::group(
        id,
        rect,
        vec![
            Layer::solid(format!("{id}/band"), local, LABEL_BAND_RGBA)
                .with_corner_radius(corner_radius),
            Layer::text(
                format!("{id}/text"),
                local,
                name,
                TextStyle::new(LABEL_FONT_PX, WHITE)
                    .bold()
                    .family("Arial, sans-serif"),
            ),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/styles/mod.rs"]
mod tests;
