use super::*;
use crate::composition::dsl::CompositionBuilder;

fn base() -> Composition {
    CompositionBuilder::new("credits")
        .staff("staff/instructor/element_0.png", "Ada")
        .staff("staff/ta/element_0.png", "Grace")
        .beats(vec![0.5, 1.0])
        .unwrap()
        .duration_secs(90.0)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn builder_output_validates_and_plans() {
    let comp = base();
    assert_eq!(comp.duration, FrameIndex(5400));
    assert_eq!(comp.fps, Fps { num: 60, den: 1 });
    let plan = comp.plan().unwrap();
    assert_eq!(plan.total(), FrameIndex(5400));
}

#[test]
fn rejects_mismatched_fps_and_canvas() {
    let mut comp = base();
    comp.fps = Fps { num: 30, den: 1 };
    assert!(comp.validate().is_err());

    let mut comp = base();
    comp.canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    assert!(comp.validate().is_err());
}

#[test]
fn rejects_escaping_or_absolute_asset_paths() {
    for bad in ["", "/etc/logo.png", "../logo.png", "staff\\..\\x.png"] {
        let mut comp = base();
        comp.config.roster[0].image = bad.to_string();
        assert!(comp.validate().is_err(), "{bad:?}");
    }
    let mut comp = base();
    comp.config.audio = Some(AudioCue {
        source: "../song.mp3".to_string(),
        offset_secs: 0.0,
    });
    assert!(comp.validate().is_err());
}

#[test]
fn rejects_unsorted_or_negative_beats() {
    let mut comp = base();
    comp.config.beats = serde_json::from_str("[2.0, 1.0]").unwrap();
    assert!(comp.validate().is_err());

    let mut comp = base();
    comp.config.beats = serde_json::from_str("[-1.0, 1.0]").unwrap();
    assert!(comp.validate().is_err());
}

#[test]
fn credits_start_must_fall_inside_the_showcase() {
    let mut comp = base();
    comp.layout = PhaseLayout::CreditsStill {
        credits_start_secs: 86.0,
    };
    comp.validate().unwrap();

    for bad in [5.0, 10.0, 90.0, 120.0, f64::NAN] {
        comp.layout = PhaseLayout::CreditsStill {
            credits_start_secs: bad,
        };
        assert!(comp.validate().is_err(), "{bad}");
    }
}

#[test]
fn json_round_trip_through_model() {
    let comp = base();
    let json = serde_json::to_string(&comp).unwrap();
    let back = Composition::from_json_str(&json).unwrap();
    assert_eq!(back.config, comp.config);
    assert_eq!(back.duration, comp.duration);
}

#[test]
fn from_path_reports_missing_files() {
    let err = Composition::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ReelError::Other(_)));
    assert!(err.to_string().contains("does/not/exist.json"));
}
