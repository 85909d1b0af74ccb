use crate::config::timeline::TimelineConfig;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};

/// Named phase of the credits reel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Logo,
    Transition,
    Content,
    Credits,
}

/// Whether a trailing credits still is carved out of the content phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseLayout {
    /// Staff photos run until the end of the video.
    #[default]
    Continuous,
    /// Four-phase layout: a credits still from `credits_start_secs` to the end.
    CreditsStill { credits_start_secs: f64 },
}

/// One phase placed on the global timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PhaseSpan {
    pub kind: PhaseKind,
    pub range: FrameRange,
}

/// Phase owning a global frame, plus the frame offset inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActivePhase {
    pub kind: PhaseKind,
    pub range: FrameRange,
    pub local: FrameIndex,
}

/// Contiguous, non-overlapping phases covering `[0, total)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PhasePlan {
    spans: Vec<PhaseSpan>,
    total: FrameIndex,
    fps: crate::foundation::core::Fps,
}

impl PhasePlan {
    pub fn new(
        timeline: &TimelineConfig,
        total: FrameIndex,
        layout: PhaseLayout,
    ) -> ReelResult<Self> {
        let logo_end = timeline.static_frames().min(total.0);
        let content_start = timeline.dynamic_start_frame().max(logo_end).min(total.0);
        let content_end = match layout {
            PhaseLayout::Continuous => total.0,
            PhaseLayout::CreditsStill { credits_start_secs } => {
                if !credits_start_secs.is_finite() || credits_start_secs < 0.0 {
                    return Err(ReelError::validation(
                        "credits_start_secs must be finite and >= 0",
                    ));
                }
                timeline
                    .seconds_to_frames(credits_start_secs)
                    .clamp(content_start, total.0)
            }
        };

        let bounds = [
            (PhaseKind::Logo, 0, logo_end),
            (PhaseKind::Transition, logo_end, content_start),
            (PhaseKind::Content, content_start, content_end),
            (PhaseKind::Credits, content_end, total.0),
        ];
        let mut spans = Vec::with_capacity(bounds.len());
        for (kind, start, end) in bounds {
            if end > start {
                spans.push(PhaseSpan {
                    kind,
                    range: FrameRange::new(FrameIndex(start), FrameIndex(end))?,
                });
            }
        }

        Ok(Self {
            spans,
            total,
            fps: timeline.fps(),
        })
    }

    pub fn spans(&self) -> &[PhaseSpan] {
        &self.spans
    }

    pub fn total(&self) -> FrameIndex {
        self.total
    }

    pub fn span(&self, kind: PhaseKind) -> Option<PhaseSpan> {
        self.spans.iter().copied().find(|s| s.kind == kind)
    }

    /// Phase owning `frame`; `None` outside `[0, total)`.
    pub fn resolve(&self, frame: FrameIndex) -> Option<ActivePhase> {
        let span = self.spans.iter().find(|s| s.range.contains(frame))?;
        let local = span.range.local(frame)?;
        tracing::trace!(frame = frame.0, phase = ?span.kind, local = local.0, "phase resolved");
        Some(ActivePhase {
            kind: span.kind,
            range: span.range,
            local,
        })
    }

    /// Global start of `kind` in seconds (the end of the timeline if it was omitted).
    pub fn start_secs(&self, kind: PhaseKind) -> f64 {
        let start = self.span(kind).map_or(self.total.0, |s| s.range.start.0);
        self.fps.frames_to_secs(start)
    }

    /// Length of the content phase in seconds; the pacing window for style engines.
    pub fn content_duration_secs(&self) -> f64 {
        self.span(PhaseKind::Content)
            .map_or(0.0, |s| self.fps.frames_to_secs(s.range.len_frames()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phase.rs"]
mod tests;
