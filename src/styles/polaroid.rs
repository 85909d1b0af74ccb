//! Instant-photo cards dropped one by one onto a pile, tilting on every beat.

use super::StyleCtx;
use crate::composition::roster::StaffMember;
use crate::foundation::core::{Point, Rect, Size, Transform2D};
use crate::foundation::math::{clamp_index, wrap};
use crate::layout::scatter::ScatterArea;
use crate::scene::layer::{ImageFit, Layer, TextStyle};

/// Cards kept on the pile before the oldest ones are dropped.
pub const MAX_VISIBLE: usize = 15;
/// Scale-up time after a card appears.
pub const APPEAR_SECS: f64 = 0.3;
pub const PHOTO: Size = Size::new(220.0, 260.0);
/// Photo plus a 12 px white border and room for the name.
pub const CARD: Size = Size::new(PHOTO.width + 24.0, PHOTO.height + 60.0);

const BORDER: f64 = 12.0;
const NAME_GAP: f64 = 8.0;
const NAME_PX: f64 = 18.0;
const NAME_RGBA: [u8; 4] = [0x22, 0x22, 0x22, 0xFF];

/// Where cards land inside a `bounds`-sized photo area.
pub fn card_scatter(bounds: Size) -> ScatterArea {
    ScatterArea {
        bounds,
        item: CARD,
        margin: Point::new(40.0, 20.0),
        inset: Size::new(80.0, 40.0),
        rotation_span_deg: 24.0,
        seed_base: 0,
    }
}

/// Visibility of one card at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardState {
    pub index: usize,
    pub opacity: f64,
    pub scale: f64,
}

/// Number of cards that have been dealt by time `t`.
pub fn appeared_count(t: f64, per: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    clamp_index(t / per, len) + 1
}

/// Cards on the pile at `t`, oldest first.
///
/// Once more than [`MAX_VISIBLE`] have appeared, only the newest fifteen are kept and
/// the oldest of those fades with the phase inside the current slot.
pub fn visible_cards(t: f64, per: f64, len: usize) -> Vec<CardState> {
    let appeared = appeared_count(t, per, len);
    let overflow = appeared > MAX_VISIBLE;
    let first_kept = appeared.saturating_sub(MAX_VISIBLE);

    (first_kept..appeared)
        .filter_map(|index| {
            let age = t - index as f64 * per;
            if age < 0.0 {
                return None;
            }
            let opacity = if overflow && index == first_kept {
                1.0 - wrap(t, per) / per
            } else {
                1.0
            };
            Some(CardState {
                index,
                opacity,
                scale: (age / APPEAR_SECS).min(1.0),
            })
        })
        .collect()
}

pub fn render(ctx: &StyleCtx<'_>) -> Vec<Layer> {
    let Some(per) = ctx.per_photo_secs() else {
        return Vec::new();
    };
    let t = ctx.time();
    let scatter = card_scatter(ctx.area().size());

    visible_cards(t, per, ctx.roster.len())
        .into_iter()
        .map(|card| {
            let placement = scatter.place(card.index);
            let rotation = placement.rotation_deg + ctx.beats.bob(t, card.index);
            card_layer(
                &format!("polaroid/{}", card.index),
                &ctx.roster[card.index],
                placement.origin,
            )
            .with_transform(
                Transform2D::centered(CARD)
                    .with_rotation_deg(rotation)
                    .with_uniform_scale(card.scale),
            )
            .with_opacity(card.opacity)
            .with_z(card.index as i32)
        })
        .collect()
}

/// White-bordered card with the photo on top and the name underneath.
fn card_layer(id: &str, member: &StaffMember, origin: Point) -> Layer {
    let photo = Rect::from_origin_size((BORDER, BORDER), PHOTO);
    let name_top = photo.y1 + NAME_GAP;
    Layer::group(
        id,
        Rect::from_origin_size(origin, CARD),
        vec![
            Layer::solid(
                format!("{id}/card"),
                Rect::from_origin_size(Point::ORIGIN, CARD),
                [255, 255, 255, 255],
            )
            .with_corner_radius(4.0),
            Layer::image(format!("{id}/photo"), photo, member.image.as_str(), ImageFit::Cover)
                .with_corner_radius(2.0),
            Layer::text(
                format!("{id}/name"),
                Rect::new(photo.x0, name_top, photo.x1, name_top + NAME_PX + 6.0),
                member.name.as_str(),
                TextStyle::new(NAME_PX, NAME_RGBA)
                    .bold()
                    .family("Arial, sans-serif")
                    .ellipsize(),
            ),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/styles/polaroid.rs"]
mod tests;
