use crate::config::timeline::TimelineConfig;
use crate::foundation::core::Rect;
use crate::scene::layer::{Layer, TextStyle};

/// Draw order of the bar above the photo area.
pub const BAR_Z: i32 = 10;

/// One caption line centered in the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Caption<'a> {
    pub text: &'a str,
    pub opacity: f64,
}

impl<'a> Caption<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, opacity: 1.0 }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Full-width gradient strip across the top of the frame with stacked captions.
pub fn gradient_bar(timeline: &TimelineConfig, captions: &[Caption<'_>]) -> Layer {
    let rect = Rect::new(0.0, 0.0, timeline.width, timeline.bar_height);
    let mut children = Vec::with_capacity(captions.len() + 1);
    children.push(Layer::gradient("bar/gradient", rect, timeline.gradient.to_vec()));
    for (i, caption) in captions.iter().enumerate() {
        children.push(
            Layer::text(
                format!("bar/caption{i}"),
                rect,
                caption.text,
                TextStyle::new(timeline.font_size, [255, 255, 255, 255]),
            )
            .with_opacity(caption.opacity)
            .with_z(1),
        );
    }
    Layer::group("bar", rect, children).with_z(BAR_Z)
}

#[cfg(test)]
#[path = "../../tests/unit/phases/bar.rs"]
mod tests;
