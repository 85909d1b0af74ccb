//! Per-phase frame compositions.
//!
//! Each phase turns a phase-local frame into the full layer list for the frame; the
//! evaluator picks the phase and supplies the local frame.

use crate::composition::model::CreditsConfig;
use crate::config::timeline::TimelineConfig;
use crate::foundation::core::{FrameIndex, Rect};
use crate::scene::layer::Layer;
use crate::timeline::phase::{PhaseKind, PhasePlan};

pub mod bar;
pub mod content;
pub mod credits;
pub mod logo;
pub mod transition;

/// Everything a phase needs to lay out one frame.
#[derive(Clone, Copy, Debug)]
pub struct PhaseInput<'a> {
    pub timeline: &'a TimelineConfig,
    pub config: &'a CreditsConfig,
    pub plan: &'a PhasePlan,
    /// Frames since the phase started.
    pub local: FrameIndex,
}

impl PhaseInput<'_> {
    /// Seconds since the phase started.
    pub fn local_secs(&self) -> f64 {
        self.timeline.frames_to_seconds(self.local)
    }

    /// Absolute video time of this frame, given the phase it belongs to.
    pub fn absolute_secs(&self, kind: PhaseKind) -> f64 {
        self.plan.start_secs(kind) + self.local_secs()
    }
}

pub fn render_phase(kind: PhaseKind, input: &PhaseInput<'_>) -> Vec<Layer> {
    match kind {
        PhaseKind::Logo => logo::render(input),
        PhaseKind::Transition => transition::render(input),
        PhaseKind::Content => content::render(input),
        PhaseKind::Credits => credits::render(input),
    }
}

const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Opaque black backdrop covering the whole frame.
pub(crate) fn backdrop(id: &str, timeline: &TimelineConfig) -> Layer {
    Layer::solid(id, full_frame(timeline), BLACK)
}

pub(crate) fn full_frame(timeline: &TimelineConfig) -> Rect {
    Rect::new(0.0, 0.0, timeline.width, timeline.height)
}

/// Photo area below the caption bar, in frame coordinates.
pub(crate) fn photo_area(timeline: &TimelineConfig) -> Rect {
    Rect::new(0.0, timeline.bar_height, timeline.width, timeline.height)
}

#[cfg(test)]
#[path = "../../tests/unit/phases/mod.rs"]
mod tests;
