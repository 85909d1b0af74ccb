use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.local(FrameIndex(4)), Some(FrameIndex(2)));
    assert_eq!(r.local(FrameIndex(5)), None);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
}

#[test]
fn fps_rounding_matches_phase_boundaries() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(6.5), 390);
    assert_eq!(fps.secs_to_frames_round(3.5), 210);
    assert_eq!(fps.secs_to_frames_round(10.0), 600);
    assert_eq!(fps.frames_to_secs(90), 1.5);
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), kurbo::Affine::IDENTITY);
    assert!(t.is_identity());

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(
        t.to_affine(),
        kurbo::Affine::translate(Vec2::new(10.0, -2.5))
    );
}

#[test]
fn centered_scale_keeps_center_fixed() {
    let t = Transform2D::centered(Size::new(100.0, 50.0)).with_uniform_scale(2.0);
    let p = t.to_affine() * Point::new(50.0, 25.0);
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 25.0).abs() < 1e-9);
}
