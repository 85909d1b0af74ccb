use std::path::Path;

use anyhow::Context;

use crate::{
    animation::beat::BeatTrack,
    composition::model::{
        AudioCue, Composition, CreditsConfig, default_credits_source, default_logo_source,
    },
    composition::roster::{RosterOrder, StaffMember, assemble_roster},
    config::timeline::TimelineConfig,
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
    styles::AnimationStyle,
    subtitle::srt::SubtitleTrack,
    timeline::phase::PhaseLayout,
};

/// Total length of a definition, in seconds or frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationDef {
    Secs(f64),
    Frames(u64),
}

impl DurationDef {
    fn to_frames(self, timeline: &TimelineConfig) -> ReelResult<FrameIndex> {
        match self {
            Self::Frames(f) => Ok(FrameIndex(f)),
            Self::Secs(s) if s.is_finite() && s > 0.0 => {
                Ok(FrameIndex(timeline.seconds_to_frames(s)))
            }
            Self::Secs(s) => Err(ReelError::validation(format!(
                "duration secs must be finite and > 0, got {s}"
            ))),
        }
    }
}

/// Authoring shape of a credits video, as written by hand or generated by tooling.
///
/// Unlike [`Composition`], captions are raw SRT text, beats are a flat list in any
/// order, and the roster is given as two groups that are merged on conversion.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionDef {
    pub id: String,
    pub duration: DurationDef,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub layout: PhaseLayout,
    #[serde(default)]
    pub instructors: Vec<StaffMember>,
    /// TAs, UTAs and LAs, listed after the instructors.
    #[serde(default)]
    pub assistants: Vec<StaffMember>,
    #[serde(default)]
    pub roster_order: RosterOrder,
    /// SubRip caption track, inline.
    #[serde(default)]
    pub subtitles_srt: String,
    /// Beat timestamps in seconds.
    #[serde(default)]
    pub beats: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioCue>,
    #[serde(default)]
    pub animation_style: AnimationStyle,
    #[serde(default = "default_logo_source")]
    pub logo_source: String,
    #[serde(default = "default_credits_source")]
    pub credits_source: String,
}

impl CompositionDef {
    pub fn from_json_str(json: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read composition definition '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Parse the caption track, sort the beats, merge the roster and validate.
    pub fn into_composition(self) -> ReelResult<Composition> {
        self.timeline.validate()?;
        let duration = self.duration.to_frames(&self.timeline)?;
        let subtitles = SubtitleTrack::parse(&self.subtitles_srt)?;
        let beats = BeatTrack::new(self.beats)?;
        let roster = assemble_roster(self.instructors, self.assistants, self.roster_order);

        let comp = Composition {
            id: self.id,
            fps: self.timeline.fps(),
            canvas: self.timeline.canvas(),
            duration,
            timeline: self.timeline,
            layout: self.layout,
            config: CreditsConfig {
                roster,
                subtitles,
                beats,
                audio: self.audio,
                animation_style: self.animation_style,
                logo_source: self.logo_source,
                credits_source: self.credits_source,
            },
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/def.rs"]
mod tests;
