use super::{PhaseInput, backdrop, full_frame};
use crate::phases::bar::gradient_bar;
use crate::scene::layer::{ImageFit, Layer};

/// Closing credits still under an empty bar.
pub fn render(input: &PhaseInput<'_>) -> Vec<Layer> {
    let timeline = input.timeline;
    vec![
        backdrop("credits/bg", timeline),
        Layer::image(
            "credits/image",
            full_frame(timeline),
            input.config.credits_source.as_str(),
            ImageFit::Cover,
        )
        .with_z(1),
        gradient_bar(timeline, &[]),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/phases/credits.rs"]
mod tests;
