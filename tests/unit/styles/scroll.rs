use super::*;
use crate::animation::beat::BeatTrack;
use crate::config::timeline::TimelineConfig;
use crate::styles::tests::{ctx, roster};

#[test]
fn cycle_covers_every_pair_once() {
    assert_eq!(cycle_length(5, 1280.0), 3.0 * 1280.0);
    assert_eq!(cycle_length(6, 1280.0), 3.0 * 1280.0);
    assert_eq!(cycle_length(0, 1280.0), 0.0);
}

#[test]
fn position_repeats_every_duration() {
    let d = 80.0;
    for t in [0.0, 3.3, 17.25, 41.0, 79.0] {
        let a = scroll_position(t, 7, 1280.0, d);
        let b = scroll_position(t + d, 7, 1280.0, d);
        let cycle = cycle_length(7, 1280.0);
        let diff = (a - b).abs();
        assert!(diff < 1e-6 || (cycle - diff).abs() < 1e-6, "t={t}: {a} vs {b}");
    }
    assert_eq!(scroll_position(10.0, 7, 1280.0, 0.0), 0.0);
}

#[test]
fn odd_roster_pairs_last_entry_with_itself() {
    let staff = roster(3);
    let pairs = composites(&staff);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].left.name, "Staff 0");
    assert_eq!(pairs[0].right.name, "Staff 1");
    assert_eq!(pairs[1].left, pairs[1].right);
}

#[test]
fn renders_exactly_two_adjacent_composites() {
    let tl = TimelineConfig::default();
    let beats = BeatTrack::default();
    let staff = roster(6);
    // Speed = 3 * 1280 / 60 = 64 px/s; at t=25 pos = 1600 -> pair 1, offset 320.
    let layers = render(&ctx(25.0, &staff, &tl, &beats, 60.0));
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].id, "scroll/current/1");
    assert_eq!(layers[1].id, "scroll/next/2");
    assert!((layers[0].rect.x0 + 320.0).abs() < 1e-9);
    assert!((layers[1].rect.x0 - 960.0).abs() < 1e-9);
    assert!(layers[0].find("scroll/current/1/right/label/text").is_some());
}

#[test]
fn next_wraps_to_first_pair() {
    let tl = TimelineConfig::default();
    let beats = BeatTrack::default();
    let staff = roster(4);
    // Speed = 2 * 1280 / 20 = 128 px/s; t=15 -> pos = 1920 -> last pair.
    let layers = render(&ctx(15.0, &staff, &tl, &beats, 20.0));
    assert_eq!(layers[0].id, "scroll/current/1");
    assert_eq!(layers[1].id, "scroll/next/0");
}
