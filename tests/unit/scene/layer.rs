use super::*;
use crate::foundation::core::Vec2;

fn graph(layers: Vec<Layer>) -> FrameGraph {
    FrameGraph {
        frame: FrameIndex(0),
        phase: PhaseKind::Content,
        local_frame: FrameIndex(0),
        layers,
    }
}

#[test]
fn flatten_orders_siblings_by_z_stably() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    let g = graph(vec![
        Layer::solid("a", r, [0, 0, 0, 255]).with_z(5),
        Layer::solid("b", r, [0, 0, 0, 255]),
        Layer::solid("c", r, [0, 0, 0, 255]),
        Layer::solid("d", r, [0, 0, 0, 255]).with_z(-1),
    ]);
    let ids: Vec<_> = g.flatten().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["d", "b", "c", "a"]);
}

#[test]
fn flatten_composes_offsets_and_opacity() {
    let child = Layer::solid("child", Rect::new(5.0, 6.0, 15.0, 16.0), [255; 4]).with_opacity(0.5);
    let g = graph(vec![
        Layer::group("parent", Rect::new(100.0, 80.0, 200.0, 180.0), vec![child]).with_opacity(0.5),
    ]);
    let flat = g.flatten();
    assert_eq!(flat.len(), 1);
    let p = flat[0].world * Point::ORIGIN;
    assert!((p.x - 105.0).abs() < 1e-9);
    assert!((p.y - 86.0).abs() < 1e-9);
    assert!((flat[0].opacity - 0.25).abs() < 1e-12);
    assert_eq!(flat[0].clip, None);
}

#[test]
fn clip_is_inherited_and_intersected() {
    let inner = Layer::solid("inner", Rect::new(-50.0, 0.0, 50.0, 10.0), [255; 4]).clipped();
    let g = graph(vec![
        Layer::group("area", Rect::new(0.0, 80.0, 1280.0, 720.0), vec![inner]).clipped(),
    ]);
    let flat = g.flatten();
    let clip = flat[0].clip.unwrap();
    assert_eq!(clip, Rect::new(0.0, 80.0, 50.0, 90.0));
}

#[test]
fn centered_rotation_pivots_about_box_center() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let l = Layer::solid("r", rect, [255; 4])
        .with_transform(Transform2D::centered(rect.size()).with_rotation_deg(90.0));
    let flat = graph(vec![l]).flatten();
    let c = flat[0].world * Point::new(50.0, 50.0);
    assert!((c.x - 50.0).abs() < 1e-9 && (c.y - 50.0).abs() < 1e-9);
}

#[test]
fn find_searches_nested_groups() {
    let leaf = Layer::text(
        "label",
        Rect::new(0.0, 0.0, 10.0, 10.0),
        "Ada",
        TextStyle::new(24.0, [255; 4]).bold(),
    );
    let g = graph(vec![Layer::group(
        "outer",
        Rect::ZERO,
        vec![Layer::group("inner", Rect::ZERO, vec![leaf])],
    )]);
    assert!(g.find("label").is_some());
    assert!(g.find("missing").is_none());
    assert_eq!(g.find("outer").unwrap().children().len(), 1);
}

#[test]
fn builders_clamp_and_style() {
    let l = Layer::image("img", Rect::ZERO, "staff/a.png", ImageFit::Cover)
        .with_opacity(1.7)
        .with_corner_radius(6.0)
        .with_transform(Transform2D::default().with_translate(Vec2::new(1.0, 2.0)));
    assert_eq!(l.opacity, 1.0);
    assert!(matches!(
        l.content,
        LayerContent::Image {
            corner_radius,
            ..
        } if corner_radius == 6.0
    ));
}
