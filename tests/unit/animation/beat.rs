use super::*;

fn track(beats: &[f64]) -> BeatTrack {
    BeatTrack::new(beats.to_vec()).unwrap()
}

#[test]
fn no_preceding_beat_means_no_bob() {
    let beats = track(&[1.0, 2.0]);
    assert_eq!(beats.bob(0.5, 0), 0.0);
    assert_eq!(BeatTrack::default().bob(3.0, 0), 0.0);
}

#[test]
fn bob_is_zero_after_decay_window() {
    let beats = track(&[1.0, 2.0]);
    assert_eq!(beats.bob(1.0 + BOB_DURATION_SECS + 1e-6, 0), 0.0);
    assert_eq!(beats.bob(1.9, 4), 0.0);
}

#[test]
fn bob_is_zero_on_the_beat_and_peaks_inside_window() {
    let beats = track(&[1.0]);
    assert_eq!(beats.bob(1.0, 2), 0.0);
    let mid = beats.bob(1.0 + BOB_DURATION_SECS * 0.3, 2);
    assert!(mid > 0.0 && mid <= BOB_MAX_DEG);
}

#[test]
fn bob_magnitude_follows_envelope() {
    let beats = track(&[0.0]);
    let t = 0.225;
    let progress: f64 = 0.5;
    let expected = (progress * std::f64::consts::PI).sin() * (1.0 - progress * progress) * 6.0;
    assert!((beats.bob(t, 2) - expected).abs() < 1e-9);
    assert!((beats.bob(t, 0) + expected).abs() < 1e-9);
}

#[test]
fn direction_pattern() {
    assert_eq!(bob_direction(0), -1.0);
    assert_eq!(bob_direction(1), -1.0); // 1 mod 3 == 1, odd
    assert_eq!(bob_direction(2), 1.0);
    assert_eq!(bob_direction(3), -1.0);
    assert_eq!(bob_direction(4), 1.0); // 4 mod 3 == 1, even
    assert_eq!(bob_direction(5), 1.0);
}

#[test]
fn latest_beat_uses_greatest_lower_bound() {
    let beats = track(&[3.0, 1.0, 2.0]);
    assert_eq!(beats.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(beats.last_beat_at_or_before(0.99), None);
    assert_eq!(beats.last_beat_at_or_before(2.0), Some(2.0));
    assert_eq!(beats.last_beat_at_or_before(2.5), Some(2.0));
    assert_eq!(beats.last_beat_at_or_before(10.0), Some(3.0));
}

#[test]
fn relative_track_drops_earlier_beats() {
    let beats = track(&[4.0, 10.0, 10.5, 12.0]);
    let rel = beats.relative_to(10.0);
    assert_eq!(rel.as_slice(), &[0.0, 0.5, 2.0]);
    // Absolute bob at 10.6 equals relative bob at 0.6.
    assert!((beats.bob(10.6, 7) - rel.bob(0.6, 7)).abs() < 1e-9);
    assert_ne!(rel.bob(0.6, 7), 0.0);
}

#[test]
fn non_finite_beats_are_rejected() {
    assert!(BeatTrack::new(vec![1.0, f64::NAN]).is_err());
}
