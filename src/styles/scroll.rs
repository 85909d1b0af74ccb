//! Continuous right-to-left scroll of side-by-side staff pairs.

use super::{LABEL_HEIGHT, StyleCtx, name_label};
use crate::composition::roster::StaffMember;
use crate::foundation::core::Rect;
use crate::foundation::math::wrap;
use crate::scene::layer::{ImageFit, Layer};

const CELL_BG: [u8; 4] = [0, 0, 0, 255];

/// Left/right pair shown across one frame width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Composite<'a> {
    pub left: &'a StaffMember,
    pub right: &'a StaffMember,
}

/// Pair the roster up; an odd last entry is its own partner.
pub fn composites(roster: &[StaffMember]) -> Vec<Composite<'_>> {
    roster
        .chunks(2)
        .map(|pair| Composite {
            left: &pair[0],
            right: pair.get(1).unwrap_or(&pair[0]),
        })
        .collect()
}

/// Length of one full pass over every composite, in pixels.
pub fn cycle_length(roster_len: usize, width: f64) -> f64 {
    roster_len.div_ceil(2) as f64 * width
}

/// Strip offset at `t`: one full cycle per `duration_secs`, repeating.
pub fn scroll_position(t: f64, roster_len: usize, width: f64, duration_secs: f64) -> f64 {
    let cycle = cycle_length(roster_len, width);
    if cycle <= 0.0 || !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0.0;
    }
    let speed = cycle / duration_secs;
    wrap(speed * t, cycle)
}

pub fn render(ctx: &StyleCtx<'_>) -> Vec<Layer> {
    let pairs = composites(ctx.roster);
    if pairs.is_empty() {
        return Vec::new();
    }

    let width = ctx.timeline.width;
    let pos = scroll_position(ctx.time(), ctx.roster.len(), width, ctx.duration_secs);
    let current = (pos / width).floor() as usize % pairs.len();
    let offset = wrap(pos, width);
    let next = (current + 1) % pairs.len();

    vec![
        composite_layer(ctx, "scroll/current", current, pairs[current], -offset),
        composite_layer(ctx, "scroll/next", next, pairs[next], width - offset),
    ]
}

fn composite_layer(
    ctx: &StyleCtx<'_>,
    slot: &str,
    index: usize,
    pair: Composite<'_>,
    x: f64,
) -> Layer {
    let half = ctx.timeline.half_width();
    let height = ctx.timeline.bg_height();
    let id = format!("{slot}/{index}");
    Layer::group(
        id.as_str(),
        Rect::new(x, 0.0, x + ctx.timeline.width, height),
        vec![
            photo_cell(&format!("{id}/left"), Rect::new(0.0, 0.0, half, height), pair.left),
            photo_cell(
                &format!("{id}/right"),
                Rect::new(half, 0.0, 2.0 * half, height),
                pair.right,
            ),
        ],
    )
}

fn photo_cell(id: &str, rect: Rect, member: &StaffMember) -> Layer {
    let w = rect.width();
    let h = rect.height();
    Layer::group(
        id,
        rect,
        vec![
            Layer::solid(format!("{id}/bg"), Rect::new(0.0, 0.0, w, h), CELL_BG),
            Layer::image(
                format!("{id}/photo"),
                Rect::new(0.0, 0.0, w, h),
                member.image.as_str(),
                ImageFit::Contain,
            ),
            name_label(
                &format!("{id}/label"),
                Rect::new(0.0, h - LABEL_HEIGHT, w, h),
                &member.name,
                0.0,
            ),
        ],
    )
    .clipped()
}

#[cfg(test)]
#[path = "../../tests/unit/styles/scroll.rs"]
mod tests;
