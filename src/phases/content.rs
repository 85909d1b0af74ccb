use super::{PhaseInput, backdrop, photo_area};
use crate::phases::bar::{Caption, gradient_bar};
use crate::scene::layer::Layer;
use crate::styles::{StyleCtx, render_style};
use crate::timeline::phase::PhaseKind;

/// Staff showcase in the photo area with the live subtitle in the bar.
pub fn render(input: &PhaseInput<'_>) -> Vec<Layer> {
    let timeline = input.timeline;
    let config = input.config;
    let start = input.plan.start_secs(PhaseKind::Content);
    let beats = config.beats.relative_to(start);

    let ctx = StyleCtx {
        t: input.local_secs(),
        local_frame: input.local,
        roster: &config.roster,
        timeline,
        duration_secs: input.plan.content_duration_secs(),
        beats: &beats,
    };
    let area = Layer::group(
        "content/area",
        photo_area(timeline),
        render_style(config.animation_style, &ctx),
    )
    .clipped()
    .with_z(1);

    let now = start + ctx.t;
    let captions: Vec<Caption<'_>> = config
        .subtitles
        .text_at(now)
        .map(Caption::new)
        .into_iter()
        .collect();

    vec![
        backdrop("content/bg", timeline),
        area,
        gradient_bar(timeline, &captions),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/phases/content.rs"]
mod tests;
