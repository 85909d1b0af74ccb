use super::*;
use crate::config::timeline::TimelineConfig;
use crate::foundation::core::{FrameIndex, Rect};
use crate::phases::tests::{config, plan};
use crate::styles::AnimationStyle;
use crate::timeline::phase::PhaseLayout;

#[test]
fn credits_still_fills_the_frame_under_an_empty_bar() {
    let tl = TimelineConfig::default();
    let p = plan(
        &tl,
        90.0,
        PhaseLayout::CreditsStill {
            credits_start_secs: 86.0,
        },
    );
    let cfg = config(AnimationStyle::Scroll, 2);
    let layers = render(&PhaseInput {
        timeline: &tl,
        config: &cfg,
        plan: &p,
        local: FrameIndex(12),
    });
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[1].id, "credits/image");
    assert_eq!(layers[1].rect, Rect::new(0.0, 0.0, 1280.0, 720.0));
    assert_eq!(layers[2].children().len(), 1);
}
