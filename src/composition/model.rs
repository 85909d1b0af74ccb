use std::path::Path;

use anyhow::Context;

use crate::{
    animation::beat::BeatTrack,
    composition::roster::StaffMember,
    config::timeline::TimelineConfig,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{ReelError, ReelResult},
    styles::AnimationStyle,
    subtitle::srt::SubtitleTrack,
    timeline::phase::{PhaseLayout, PhasePlan},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Soundtrack reference handed through to the host.
pub struct AudioCue {
    /// Relative asset path of the audio file.
    pub source: String,
    /// Seconds into the video at which the audio starts.
    #[serde(default)]
    pub offset_secs: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-video content: who is on screen, what is sung, and how it moves.
pub struct CreditsConfig {
    /// Ordered staff roster; index is identity.
    pub roster: Vec<StaffMember>,
    /// Parsed caption track, absolute seconds.
    #[serde(default)]
    pub subtitles: SubtitleTrack,
    /// Beat timestamps, absolute seconds.
    #[serde(default)]
    pub beats: BeatTrack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioCue>,
    #[serde(default)]
    pub animation_style: AnimationStyle,
    /// Course logo, relative asset path.
    #[serde(default = "default_logo_source")]
    pub logo_source: String,
    /// Closing credits still, used by [`PhaseLayout::CreditsStill`].
    #[serde(default = "default_credits_source")]
    pub credits_source: String,
}

pub(crate) fn default_logo_source() -> String {
    "logo.png".to_string()
}

pub(crate) fn default_credits_source() -> String {
    "credits.png".to_string()
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete credits video.
///
/// Pure data: build it with [`crate::CompositionBuilder`], load it from JSON, or
/// convert a [`crate::CompositionDef`]. Frames are produced by [`crate::Evaluator`].
pub struct Composition {
    /// Host-facing composition id.
    pub id: String,
    /// Frame rate; must agree with `timeline.fps`.
    pub fps: Fps,
    /// Output size; must agree with the timeline dimensions.
    pub canvas: Canvas,
    /// Total duration in frames.
    pub duration: FrameIndex,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub layout: PhaseLayout,
    pub config: CreditsConfig,
}

impl Composition {
    /// Validate timing, asset references and track data.
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }

        self.timeline.validate()?;
        if self.fps != self.timeline.fps() {
            return Err(ReelError::validation(format!(
                "fps {}/{} does not match timeline fps {}",
                self.fps.num, self.fps.den, self.timeline.fps
            )));
        }
        if self.canvas != self.timeline.canvas() {
            return Err(ReelError::validation(
                "canvas does not match timeline width/height",
            ));
        }

        if let PhaseLayout::CreditsStill { credits_start_secs } = self.layout {
            let total_secs = self.fps.frames_to_secs(self.duration.0);
            let dynamic_start = self.timeline.dynamic_start_secs();
            if !credits_start_secs.is_finite()
                || credits_start_secs <= dynamic_start
                || credits_start_secs >= total_secs
            {
                return Err(ReelError::validation(format!(
                    "credits_start_secs must lie in ({dynamic_start}, {total_secs})"
                )));
            }
            validate_rel_source(&self.config.credits_source, "credits_source")?;
        }

        validate_rel_source(&self.config.logo_source, "logo_source")?;
        for (i, member) in self.config.roster.iter().enumerate() {
            validate_rel_source(&member.image, &format!("roster[{i}].image"))?;
        }
        if let Some(audio) = &self.config.audio {
            validate_rel_source(&audio.source, "audio source")?;
            if !audio.offset_secs.is_finite() || audio.offset_secs < 0.0 {
                return Err(ReelError::validation(
                    "audio offset_secs must be finite and >= 0",
                ));
            }
        }

        let beats = self.config.beats.as_slice();
        if beats.iter().any(|b| !b.is_finite() || *b < 0.0) {
            return Err(ReelError::validation("beats must be finite and >= 0"));
        }
        if beats.windows(2).any(|w| w[0] > w[1]) {
            return Err(ReelError::validation("beats must be in ascending order"));
        }

        for (i, sub) in self.config.subtitles.as_slice().iter().enumerate() {
            if !(sub.start.is_finite() && sub.end.is_finite() && sub.start < sub.end) {
                return Err(ReelError::validation(format!(
                    "subtitle {i} must have finite start < end"
                )));
            }
        }

        tracing::debug!(
            id = %self.id,
            frames = self.duration.0,
            roster = self.config.roster.len(),
            style = %self.config.animation_style,
            "composition validated"
        );
        Ok(())
    }

    /// Phase layout of this composition over `[0, duration)`.
    pub fn plan(&self) -> ReelResult<PhasePlan> {
        PhasePlan::new(&self.timeline, self.duration, self.layout)
    }

    pub fn from_json_str(json: &str) -> ReelResult<Self> {
        let comp: Self = serde_json::from_str(json)?;
        comp.validate()?;
        Ok(comp)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read composition '{}'", path.display()))?;
        Self::from_json_str(&json)
    }
}

pub(crate) fn validate_rel_source(source: &str, field: &str) -> ReelResult<()> {
    if source.trim().is_empty() {
        return Err(ReelError::validation(format!("{field} must be non-empty")));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ReelError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    if s.split('/').any(|part| part == "..") {
        return Err(ReelError::validation(format!(
            "{field} must not contain '..'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
