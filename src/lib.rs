//! credits-reel turns a course credits video description into per-frame layer graphs.
//!
//! A [`Composition`] (roster, caption track, beat track, animation style) is evaluated
//! one frame at a time into a [`FrameGraph`]: a tree of solid, gradient, image and text
//! layers that a host compositor paints. No pixels are produced here.
//!
//! # Pipeline overview
//!
//! 1. **Define**: build a [`Composition`] with [`CompositionBuilder`], load one from JSON,
//!    or convert a [`CompositionDef`] (inline SRT, raw beat list, grouped roster).
//! 2. **Plan**: the timeline is split into logo, transition, content and optional credits
//!    phases ([`PhasePlan`]).
//! 3. **Evaluate**: [`Evaluator::eval_frame`] resolves the phase for a global frame and
//!    lays out that phase, including the active [`AnimationStyle`] during the showcase.
//! 4. **Fingerprint** (optional): [`fingerprint_frame`] lets a host skip duplicate frames.
//!
//! Evaluation is pure: frames can be requested in any order, repeatedly, and always
//! yield the same graph. All layout randomness comes from seeded hashing.
#![forbid(unsafe_code)]

pub mod animation;
pub mod compile;
pub mod composition;
pub mod config;
pub mod eval;
pub mod foundation;
pub mod layout;
pub mod phases;
pub mod scene;
pub mod styles;
pub mod subtitle;
pub mod timeline;

pub use animation::beat::{BOB_DURATION_SECS, BOB_MAX_DEG, BeatTrack, bob_direction};
pub use animation::spring::{SpringConfig, spring};
pub use compile::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use composition::def::{CompositionDef, DurationDef};
pub use composition::dsl::{CompositionBuilder, compositions_per_style};
pub use composition::model::{AudioCue, Composition, CreditsConfig};
pub use composition::roster::{RosterOrder, StaffMember, assemble_roster};
pub use config::timeline::TimelineConfig;
pub use eval::evaluator::Evaluator;
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Size, Transform2D, Vec2,
};
pub use foundation::error::{ReelError, ReelResult};
pub use layout::scatter::{Placement, ScatterArea, seed_random, seed_triplet};
pub use scene::layer::{
    FontWeight, FrameGraph, ImageFit, Layer, LayerContent, ResolvedLayer, TextStyle,
};
pub use styles::{AnimationStyle, StyleCtx, render_style};
pub use subtitle::srt::{Subtitle, SubtitleTrack, parse_srt, parse_timestamp, subtitle_at};
pub use timeline::phase::{ActivePhase, PhaseKind, PhaseLayout, PhasePlan, PhaseSpan};
