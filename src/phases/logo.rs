//! Opening logo: a fade-in still, or a scatter of tilted logo cards for the polaroid style.

use super::{PhaseInput, backdrop, full_frame, photo_area};
use crate::animation::beat::BeatTrack;
use crate::config::timeline::TimelineConfig;
use crate::foundation::core::{Point, Rect, Size, Transform2D};
use crate::foundation::math::interpolate_clamped;
use crate::layout::scatter::ScatterArea;
use crate::phases::bar::{Caption, gradient_bar};
use crate::scene::layer::{ImageFit, Layer};
use crate::styles::AnimationStyle;
use crate::timeline::phase::PhaseKind;

pub const LOGO_CARD_COUNT: usize = 20;
pub const LOGO_CARD_PX: f64 = 140.0;

pub fn logo_scatter(bounds: Size) -> ScatterArea {
    ScatterArea {
        bounds,
        item: Size::new(LOGO_CARD_PX, LOGO_CARD_PX),
        margin: Point::new(10.0, 5.0),
        inset: Size::new(20.0, 10.0),
        rotation_span_deg: 30.0,
        seed_base: 500,
    }
}

pub fn render(input: &PhaseInput<'_>) -> Vec<Layer> {
    let timeline = input.timeline;
    let config = input.config;

    let visual = if config.animation_style == AnimationStyle::Polaroid {
        logo_cards(
            "logo/cards",
            timeline,
            &config.logo_source,
            &config.beats,
            input.absolute_secs(PhaseKind::Logo),
        )
    } else {
        let fade_frames = timeline.logo_fade_in_secs * timeline.fps().as_f64();
        Layer::image(
            "logo/image",
            full_frame(timeline),
            config.logo_source.as_str(),
            ImageFit::Cover,
        )
        .with_opacity(interpolate_clamped(
            input.local.0 as f64,
            [0.0, fade_frames],
            [0.0, 1.0],
        ))
    };

    vec![
        backdrop("logo/bg", timeline),
        visual.with_z(1),
        gradient_bar(timeline, &[Caption::new(&timeline.welcome_text)]),
    ]
}

/// Clipped photo-area group of bobbing logo cards; `t_abs` is absolute video time.
pub(crate) fn logo_cards(
    id: &str,
    timeline: &TimelineConfig,
    logo_source: &str,
    beats: &BeatTrack,
    t_abs: f64,
) -> Layer {
    let area = photo_area(timeline);
    let scatter = logo_scatter(area.size());
    let size = Size::new(LOGO_CARD_PX, LOGO_CARD_PX);
    let cards = (0..LOGO_CARD_COUNT)
        .map(|i| {
            let placement = scatter.place(i);
            Layer::image(
                format!("{id}/{i}"),
                Rect::from_origin_size(placement.origin, size),
                logo_source,
                ImageFit::Contain,
            )
            .with_transform(
                Transform2D::centered(size)
                    .with_rotation_deg(placement.rotation_deg + beats.bob(t_abs, i)),
            )
            .with_z(i as i32)
        })
        .collect();
    Layer::group(id, area, cards).clipped()
}

#[cfg(test)]
#[path = "../../tests/unit/phases/logo.rs"]
mod tests;
