use super::*;

#[test]
fn target_rect_rejects_non_positive_sides() {
    assert!(TargetRect::new(0, 0, 200, 200).is_ok());
    for (w, h) in [(0, 10), (10, 0), (-5, 10), (10, -1)] {
        let err = TargetRect::new(3, 4, w, h).unwrap_err();
        assert!(matches!(err, ChernoffError::InvalidDimensions(_)));
    }
}

#[test]
fn target_rect_rejects_oversized_sides() {
    assert!(TargetRect::sized(TargetRect::MAX_SIDE, TargetRect::MAX_SIDE).is_ok());
    for (w, h) in [(TargetRect::MAX_SIDE + 1, 10), (10, i32::MAX)] {
        let err = TargetRect::sized(w, h).unwrap_err();
        assert!(matches!(err, ChernoffError::InvalidDimensions(_)));
    }
}

#[test]
fn target_rect_rejects_edges_past_i32() {
    assert!(TargetRect::new(i32::MAX - 200, 0, 200, 200).is_ok());
    assert!(TargetRect::new(i32::MIN, i32::MIN, 200, 200).is_ok());
    for (x, y) in [(i32::MAX - 50, 0), (0, i32::MAX - 1)] {
        let err = TargetRect::new(x, y, 200, 200).unwrap_err();
        assert!(matches!(err, ChernoffError::InvalidDimensions(_)));
    }
}

#[test]
fn fps_frame_delay_uses_integer_division() {
    assert_eq!(Fps::default().get(), 10);
    assert_eq!(Fps::default().frame_delay_ms(), 100);
    assert_eq!(Fps::new(30).unwrap().frame_delay_ms(), 33);
    assert_eq!(Fps::new(1000).unwrap().frame_delay(), Duration::from_millis(1));
}

#[test]
fn fps_rejects_zero_and_sub_millisecond_rates() {
    assert!(matches!(
        Fps::new(0).unwrap_err(),
        ChernoffError::InvalidTiming(_)
    ));
    assert!(matches!(
        Fps::new(1001).unwrap_err(),
        ChernoffError::InvalidTiming(_)
    ));
}

#[test]
fn fps_deserialize_validates() {
    let ok: Fps = serde_json::from_str("24").unwrap();
    assert_eq!(ok.get(), 24);
    assert!(serde_json::from_str::<Fps>("0").is_err());
}

#[test]
fn rgba_premultiply_opaque_is_identity() {
    assert_eq!(Rgba8::opaque(10, 20, 30).premultiplied(), [10, 20, 30, 255]);
    let half = Rgba8 {
        r: 255,
        g: 0,
        b: 0,
        a: 128,
    };
    assert_eq!(half.premultiplied(), [128, 0, 0, 128]);
}
