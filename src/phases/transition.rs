//! Cross-fade from the logo to the first frame of the staff showcase.

use super::{PhaseInput, backdrop, full_frame, photo_area};
use crate::composition::roster::StaffMember;
use crate::foundation::core::{Rect, Size};
use crate::foundation::math::interpolate_clamped;
use crate::phases::bar::{Caption, gradient_bar};
use crate::phases::logo::logo_cards;
use crate::scene::layer::{ImageFit, Layer};
use crate::styles::{AnimationStyle, grid, kenburns};
use crate::timeline::phase::PhaseKind;

/// Cross-fade progress: 0 is all logo, 1 is all showcase.
pub fn blend_factor(input: &PhaseInput<'_>) -> f64 {
    let frames = input.timeline.transition_secs * input.timeline.fps().as_f64();
    interpolate_clamped(input.local.0 as f64, [0.0, frames], [0.0, 1.0])
}

pub fn render(input: &PhaseInput<'_>) -> Vec<Layer> {
    let timeline = input.timeline;
    let config = input.config;
    let blend = blend_factor(input);
    let now = input.absolute_secs(PhaseKind::Transition);

    let logo = if config.animation_style == AnimationStyle::Polaroid {
        logo_cards(
            "transition/logo",
            timeline,
            &config.logo_source,
            &config.beats,
            now,
        )
    } else {
        Layer::image(
            "transition/logo",
            full_frame(timeline),
            config.logo_source.as_str(),
            ImageFit::Cover,
        )
    };

    let area = photo_area(timeline);
    let preview = Layer::group(
        "transition/preview",
        area,
        preview_layers(config.animation_style, &config.roster, area.size()),
    )
    .clipped();

    let mut captions = vec![Caption::new(&timeline.welcome_text).with_opacity(1.0 - blend)];
    if let Some(text) = config.subtitles.text_at(now) {
        captions.push(Caption::new(text).with_opacity(blend));
    }

    vec![
        backdrop("transition/bg", timeline),
        logo.with_opacity(1.0 - blend).with_z(1),
        preview.with_opacity(blend).with_z(2),
        gradient_bar(timeline, &captions),
    ]
}

/// Style-matched still of how the showcase opens, in photo-area coordinates.
fn preview_layers(
    style: AnimationStyle,
    roster: &[StaffMember],
    size: Size,
) -> Vec<Layer> {
    let Some(first) = roster.first() else {
        return Vec::new();
    };
    let local = Rect::from_origin_size((0.0, 0.0), size);
    match style {
        AnimationStyle::Scroll | AnimationStyle::Polaroid => {
            let second = roster.get(1).unwrap_or(first);
            let half = size.width / 2.0;
            vec![
                half_cell(
                    "transition/preview/left",
                    Rect::new(0.0, 0.0, half, size.height),
                    first,
                ),
                half_cell(
                    "transition/preview/right",
                    Rect::new(half, 0.0, size.width, size.height),
                    second,
                ),
            ]
        }
        AnimationStyle::KenBurns => vec![kenburns::photo_layer(
            "transition/preview/kenburns",
            first,
            local,
            kenburns::Motion::REST,
        )],
        AnimationStyle::Grid => vec![grid::cell_layer(
            "transition/preview/grid",
            first,
            &grid::CellMetrics::for_area(size),
            0,
        )],
    }
}

fn half_cell(id: &str, rect: Rect, member: &StaffMember) -> Layer {
    let local = Rect::from_origin_size((0.0, 0.0), rect.size());
    Layer::group(
        id,
        rect,
        vec![
            Layer::solid(format!("{id}/bg"), local, [0, 0, 0, 255]),
            Layer::image(
                format!("{id}/photo"),
                local,
                member.image.as_str(),
                ImageFit::Contain,
            ),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/phases/transition.rs"]
mod tests;
