use crate::{
    animation::beat::BeatTrack,
    composition::model::{
        AudioCue, Composition, CreditsConfig, default_credits_source, default_logo_source,
    },
    composition::roster::StaffMember,
    config::timeline::TimelineConfig,
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
    styles::AnimationStyle,
    subtitle::srt::SubtitleTrack,
    timeline::phase::PhaseLayout,
};

/// Fluent builder for a [`Composition`]; `build` validates the result.
pub struct CompositionBuilder {
    id: String,
    timeline: TimelineConfig,
    layout: PhaseLayout,
    duration: FrameIndex,
    roster: Vec<StaffMember>,
    subtitles: SubtitleTrack,
    beats: BeatTrack,
    audio: Option<AudioCue>,
    style: AnimationStyle,
    logo_source: String,
    credits_source: String,
}

impl CompositionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timeline: TimelineConfig::default(),
            layout: PhaseLayout::default(),
            duration: FrameIndex(0),
            roster: Vec::new(),
            subtitles: SubtitleTrack::default(),
            beats: BeatTrack::default(),
            audio: None,
            style: AnimationStyle::default(),
            logo_source: default_logo_source(),
            credits_source: default_credits_source(),
        }
    }

    pub fn timeline(mut self, timeline: TimelineConfig) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn layout(mut self, layout: PhaseLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn roster(mut self, roster: Vec<StaffMember>) -> Self {
        self.roster = roster;
        self
    }

    pub fn staff(mut self, image: impl Into<String>, name: impl Into<String>) -> Self {
        self.roster.push(StaffMember::new(image, name));
        self
    }

    pub fn subtitles(mut self, subtitles: SubtitleTrack) -> Self {
        self.subtitles = subtitles;
        self
    }

    pub fn subtitles_srt(mut self, srt: &str) -> ReelResult<Self> {
        self.subtitles = SubtitleTrack::parse(srt)?;
        Ok(self)
    }

    pub fn beats(mut self, beats: Vec<f64>) -> ReelResult<Self> {
        self.beats = BeatTrack::new(beats)?;
        Ok(self)
    }

    pub fn style(mut self, style: AnimationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn audio(mut self, source: impl Into<String>, offset_secs: f64) -> Self {
        self.audio = Some(AudioCue {
            source: source.into(),
            offset_secs,
        });
        self
    }

    pub fn logo_source(mut self, source: impl Into<String>) -> Self {
        self.logo_source = source.into();
        self
    }

    pub fn credits_source(mut self, source: impl Into<String>) -> Self {
        self.credits_source = source.into();
        self
    }

    /// Total length in seconds, rounded to the nearest frame at the timeline rate.
    ///
    /// Uses the timeline set so far; call [`Self::timeline`] first when overriding it.
    pub fn duration_secs(mut self, secs: f64) -> ReelResult<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ReelError::validation(format!(
                "duration secs must be finite and > 0, got {secs}"
            )));
        }
        self.duration = FrameIndex(self.timeline.seconds_to_frames(secs));
        Ok(self)
    }

    pub fn duration_frames(mut self, frames: u64) -> Self {
        self.duration = FrameIndex(frames);
        self
    }

    pub fn build(self) -> ReelResult<Composition> {
        let comp = Composition {
            id: self.id,
            fps: self.timeline.fps(),
            canvas: self.timeline.canvas(),
            duration: self.duration,
            timeline: self.timeline,
            layout: self.layout,
            config: CreditsConfig {
                roster: self.roster,
                subtitles: self.subtitles,
                beats: self.beats,
                audio: self.audio,
                animation_style: self.style,
                logo_source: self.logo_source,
                credits_source: self.credits_source,
            },
        };
        comp.validate()?;
        Ok(comp)
    }
}

/// One composition per animation style, ids suffixed with the style tag.
pub fn compositions_per_style(base: &Composition) -> Vec<Composition> {
    AnimationStyle::ALL
        .into_iter()
        .map(|style| {
            let mut comp = base.clone();
            comp.id = format!("{}-{style}", base.id);
            comp.config.animation_style = style;
            comp
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
