use super::*;
use crate::composition::model::CreditsConfig;
use crate::config::timeline::TimelineConfig;
use crate::foundation::core::FrameIndex;
use crate::phases::tests::{config, plan};
use crate::timeline::phase::{PhaseLayout, PhasePlan};

struct Fixture {
    tl: TimelineConfig,
    plan: PhasePlan,
    cfg: CreditsConfig,
}

impl Fixture {
    fn new(style: AnimationStyle, staff: usize) -> Self {
        let tl = TimelineConfig::default();
        let plan = plan(&tl, 90.0, PhaseLayout::Continuous);
        Self {
            tl,
            plan,
            cfg: config(style, staff),
        }
    }

    fn input(&self, local: u64) -> PhaseInput<'_> {
        PhaseInput {
            timeline: &self.tl,
            config: &self.cfg,
            plan: &self.plan,
            local: FrameIndex(local),
        }
    }
}

#[test]
fn blend_runs_over_the_transition() {
    let fx = Fixture::new(AnimationStyle::Scroll, 2);
    assert_eq!(blend_factor(&fx.input(0)), 0.0);
    assert!((blend_factor(&fx.input(105)) - 0.5).abs() < 1e-9);
    assert_eq!(blend_factor(&fx.input(210)), 1.0);
    assert_eq!(blend_factor(&fx.input(400)), 1.0);
}

#[test]
fn logo_and_preview_cross_fade() {
    let fx = Fixture::new(AnimationStyle::Scroll, 2);
    let layers = render(&fx.input(105));
    let logo = layers.iter().find(|l| l.id == "transition/logo").unwrap();
    let preview = layers.iter().find(|l| l.id == "transition/preview").unwrap();
    assert!((logo.opacity - 0.5).abs() < 1e-9);
    assert!((preview.opacity - 0.5).abs() < 1e-9);
    assert_eq!(preview.rect.y0, 80.0);
    assert!(preview.find("transition/preview/left/photo").is_some());
}

#[test]
fn single_member_fills_both_halves() {
    let fx = Fixture::new(AnimationStyle::Polaroid, 1);
    let layers = render(&fx.input(0));
    let preview = layers.iter().find(|l| l.id == "transition/preview").unwrap();
    let left = preview.find("transition/preview/left/photo").unwrap();
    let right = preview.find("transition/preview/right/photo").unwrap();
    assert_eq!(left.content, right.content);
}

#[test]
fn empty_roster_previews_nothing() {
    let fx = Fixture::new(AnimationStyle::Scroll, 0);
    let layers = render(&fx.input(50));
    let preview = layers.iter().find(|l| l.id == "transition/preview").unwrap();
    assert!(preview.children().is_empty());
}

#[test]
fn preview_matches_style() {
    let kb = Fixture::new(AnimationStyle::KenBurns, 3);
    let layers = render(&kb.input(0));
    assert!(
        layers
            .iter()
            .any(|l| l.find("transition/preview/kenburns/label").is_some())
    );

    let grid = Fixture::new(AnimationStyle::Grid, 3);
    let layers = render(&grid.input(0));
    let preview = layers.iter().find(|l| l.id == "transition/preview").unwrap();
    assert_eq!(preview.children().len(), 1);
    assert_eq!(preview.children()[0].id, "transition/preview/grid");
}

#[test]
fn bar_swaps_welcome_for_subtitle() {
    let fx = Fixture::new(AnimationStyle::Scroll, 2);
    // 6.5 s: subtitle starts at 7.0 s, so only the welcome line.
    let early = render(&fx.input(0));
    let bar = early.last().unwrap();
    assert_eq!(bar.find("bar/caption0").unwrap().opacity, 1.0);
    assert!(bar.find("bar/caption1").is_none());

    // 7.5 s.
    let later = render(&fx.input(60));
    let bar = later.last().unwrap();
    let welcome = bar.find("bar/caption0").unwrap();
    let sub = bar.find("bar/caption1").unwrap();
    assert!((welcome.opacity + sub.opacity - 1.0).abs() < 1e-9);
    assert!((sub.opacity - 60.0 / 210.0).abs() < 1e-9);
}
