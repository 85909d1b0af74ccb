use super::*;

#[test]
fn seed_random_is_bounded_and_deterministic() {
    for seed in -500i64..2000 {
        let a = seed_random(seed);
        assert!((0.0..1.0).contains(&a), "seed {seed} -> {a}");
        assert_eq!(a.to_bits(), seed_random(seed).to_bits());
    }
}

#[test]
fn seed_random_matches_formula() {
    let x = (311.7f64).sin() * 43758.5453;
    assert_eq!(seed_random(0), x - x.floor());
}

#[test]
fn neighbouring_seeds_differ() {
    let draws: Vec<f64> = (0..16).map(seed_random).collect();
    for w in draws.windows(2) {
        assert_ne!(w[0], w[1]);
    }
}

#[test]
fn triplet_uses_offset_seeds() {
    let [a, b, c] = seed_triplet(4, 500);
    assert_eq!(a, seed_random(512));
    assert_eq!(b, seed_random(513));
    assert_eq!(c, seed_random(514));
}

#[test]
fn placement_stays_inside_travel_range() {
    let area = ScatterArea {
        bounds: Size::new(1280.0, 640.0),
        item: Size::new(244.0, 320.0),
        margin: Point::new(40.0, 20.0),
        inset: Size::new(80.0, 40.0),
        rotation_span_deg: 24.0,
        seed_base: 0,
    };
    for i in 0..200 {
        let p = area.place(i);
        assert!(p.origin.x >= 40.0 && p.origin.x <= 40.0 + 1280.0 - 244.0 - 80.0);
        assert!(p.origin.y >= 20.0 && p.origin.y <= 20.0 + 640.0 - 320.0 - 40.0);
        assert!(p.rotation_deg.abs() <= 12.0);
        assert_eq!(p, area.place(i));
    }
}
