//! One full-bleed photo at a time, slowly zooming and panning, cross-fading into the next.

use super::{LABEL_FONT_PX, LABEL_HEIGHT, StyleCtx, estimate_text_width, name_label};
use crate::composition::roster::StaffMember;
use crate::foundation::core::{Rect, Transform2D, Vec2};
use crate::foundation::math::{clamp_index, interpolate_clamped};
use crate::layout::scatter::seed_random;
use crate::scene::layer::{ImageFit, Layer};

/// Cross-fade length at the start of each slot, in seconds.
pub const CROSSFADE_SECS: f64 = 0.5;
/// Zoom gained over one slot.
pub const ZOOM_GAIN: f64 = 0.15;
/// Full horizontal/vertical pan travel in pixels.
pub const PAN_RANGE: Vec2 = Vec2::new(60.0, 40.0);

const LABEL_MIN_WIDTH: f64 = 200.0;
const LABEL_BOTTOM: f64 = 20.0;
const LABEL_RADIUS: f64 = 6.0;

/// Which photos are on screen and how opaque each one is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossfade {
    pub current: usize,
    pub current_opacity: f64,
    pub previous: Option<usize>,
    pub previous_opacity: f64,
}

/// Slot selection for local time `t` with `per` seconds per photo.
pub fn crossfade(t: f64, per: f64, len: usize) -> Crossfade {
    let current = clamp_index(t / per, len);
    let elapsed = t - current as f64 * per;
    let previous = current.checked_sub(1);
    Crossfade {
        current,
        current_opacity: interpolate_clamped(elapsed, [0.0, CROSSFADE_SECS], [0.0, 1.0]),
        previous,
        previous_opacity: if previous.is_some() {
            interpolate_clamped(elapsed, [0.0, CROSSFADE_SECS], [1.0, 0.0])
        } else {
            0.0
        },
    }
}

/// Zoom and pan of photo `index` at local time `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub scale: f64,
    pub pan: Vec2,
}

impl Motion {
    pub const REST: Self = Self {
        scale: 1.0,
        pan: Vec2::ZERO,
    };

    pub fn at(index: usize, t: f64, per: f64) -> Self {
        let progress = ((t - index as f64 * per) / per).clamp(0.0, 1.0);
        let dir = Vec2::new(
            seed_random(index as i64) - 0.5,
            seed_random(index as i64 + 100) - 0.5,
        );
        Self {
            scale: 1.0 + ZOOM_GAIN * progress,
            pan: Vec2::new(dir.x * PAN_RANGE.x, dir.y * PAN_RANGE.y) * progress,
        }
    }

    /// Scale about the center, then pan in the scaled space.
    fn transform(self, area: Rect) -> Transform2D {
        Transform2D::centered(area.size())
            .with_uniform_scale(self.scale)
            .with_translate(self.pan * self.scale)
    }
}

pub fn render(ctx: &StyleCtx<'_>) -> Vec<Layer> {
    let Some(per) = ctx.per_photo_secs() else {
        return Vec::new();
    };
    let t = ctx.time();
    let fade = crossfade(t, per, ctx.roster.len());
    let area = ctx.area();

    let mut layers = Vec::with_capacity(2);
    if let Some(prev) = fade.previous {
        layers.push(
            photo_layer(
                &format!("kenburns/{prev}"),
                &ctx.roster[prev],
                area,
                Motion::at(prev, t, per),
            )
            .with_opacity(fade.previous_opacity),
        );
    }
    layers.push(
        photo_layer(
            &format!("kenburns/{}", fade.current),
            &ctx.roster[fade.current],
            area,
            Motion::at(fade.current, t, per),
        )
        .with_opacity(fade.current_opacity)
        .with_z(1),
    );
    layers
}

/// Clipped full-bleed cell: black backing, cover-fitted photo, centered name pill.
pub(crate) fn photo_layer(id: &str, member: &StaffMember, area: Rect, motion: Motion) -> Layer {
    let label_w =
        (estimate_text_width(&member.name, LABEL_FONT_PX) + 32.0).max(LABEL_MIN_WIDTH);
    let label_x = (area.width() - label_w) / 2.0;
    let label_y = area.height() - LABEL_BOTTOM - LABEL_HEIGHT;
    let local = Rect::from_origin_size((0.0, 0.0), area.size());

    Layer::group(
        id,
        area,
        vec![
            Layer::solid(format!("{id}/bg"), local, [0, 0, 0, 255]),
            Layer::image(format!("{id}/photo"), local, member.image.as_str(), ImageFit::Cover)
                .with_transform(motion.transform(local)),
            name_label(
                &format!("{id}/label"),
                Rect::new(label_x, label_y, label_x + label_w, label_y + LABEL_HEIGHT),
                &member.name,
                LABEL_RADIUS,
            )
            .with_z(1),
        ],
    )
    .clipped()
}

#[cfg(test)]
#[path = "../../tests/unit/styles/kenburns.rs"]
mod tests;
