use super::*;
use crate::animation::beat::BeatTrack;
use crate::config::timeline::TimelineConfig;
use crate::styles::tests::{ctx, roster};

#[test]
fn first_slot_has_no_outgoing_photo() {
    let f = crossfade(0.0, 4.0, 5);
    assert_eq!(f.current, 0);
    assert_eq!(f.previous, None);
    assert_eq!(f.current_opacity, 0.0);
    assert_eq!(f.previous_opacity, 0.0);
}

#[test]
fn slot_boundary_and_after_window() {
    let at_boundary = crossfade(8.0, 4.0, 5);
    assert_eq!(at_boundary.current, 2);
    assert_eq!(at_boundary.previous, Some(1));
    assert_eq!(at_boundary.previous_opacity, 1.0);
    assert_eq!(at_boundary.current_opacity, 0.0);

    let mid = crossfade(8.25, 4.0, 5);
    assert!((mid.previous_opacity - 0.5).abs() < 1e-9);
    assert!((mid.current_opacity - 0.5).abs() < 1e-9);

    let after = crossfade(9.0, 4.0, 5);
    assert_eq!(after.previous_opacity, 0.0);
    assert_eq!(after.current_opacity, 1.0);
}

#[test]
fn index_clamps_past_the_end() {
    let f = crossfade(100.0, 4.0, 5);
    assert_eq!(f.current, 4);
    assert_eq!(f.previous, Some(3));
    assert!((0.0..=1.0).contains(&f.current_opacity));
    assert!((0.0..=1.0).contains(&f.previous_opacity));
}

#[test]
fn motion_grows_across_the_slot() {
    let start = Motion::at(2, 8.0, 4.0);
    assert_eq!(start, Motion::REST);

    let end = Motion::at(2, 12.0, 4.0);
    assert!((end.scale - 1.15).abs() < 1e-12);
    assert!(end.pan.x.abs() <= 30.0);
    assert!(end.pan.y.abs() <= 20.0);

    // Clamped past the slot and deterministic.
    assert_eq!(Motion::at(2, 50.0, 4.0), end);
}

#[test]
fn renders_outgoing_and_incoming_layers() {
    let tl = TimelineConfig::default();
    let beats = BeatTrack::default();
    let staff = roster(4);
    let layers = render(&ctx(20.1, &staff, &tl, &beats, 80.0));
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].id, "kenburns/0");
    assert_eq!(layers[1].id, "kenburns/1");
    assert!((layers[0].opacity - 0.8).abs() < 1e-6);
    assert!((layers[1].opacity - 0.2).abs() < 1e-6);
    assert!(layers[1].clip);

    let photo = layers[1].find("kenburns/1/photo").unwrap();
    assert!(photo.transform.scale.x > 1.0);

    let label = layers[1].find("kenburns/1/label").unwrap();
    assert!(label.rect.width() >= 200.0);
    assert!((label.rect.y1 - (640.0 - 20.0)).abs() < 1e-9);
    assert!((label.rect.center().x - 640.0).abs() < 1e-9);
}
