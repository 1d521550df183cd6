use super::*;
use crate::{FaceDescriptor, FacePainter, TargetRect};

fn is_dark(px: [u8; 4]) -> bool {
    px[0] < 128 && px[1] < 128 && px[2] < 128
}

fn neutral_frame(size: u32) -> FrameRGBA {
    let mut surface = PixmapSurface::new(size, size, &FaceStyle::default()).unwrap();
    FacePainter::default()
        .draw(
            &mut surface,
            &FaceDescriptor::neutral(),
            TargetRect::sized(size as i32, size as i32).unwrap(),
        )
        .unwrap();
    surface.finish()
}

#[test]
fn frame_has_requested_size_and_opaque_pixels() {
    let frame = neutral_frame(200);
    assert_eq!((frame.width, frame.height), (200, 200));
    assert_eq!(frame.data.len(), 200 * 200 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn background_stays_clear_and_pupils_are_inked() {
    let frame = neutral_frame(200);
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(199, 199), Some([255, 255, 255, 255]));
    // Left pupil occupies the 4x4 box at (78, 78).
    assert!(is_dark(frame.pixel(80, 80).unwrap()));
    // Inside the nose triangle.
    assert!(!is_dark(frame.pixel(100, 100).unwrap()));
    assert_eq!(frame.pixel(200, 0), None);
}

#[test]
fn rejects_zero_and_oversized_surfaces() {
    let style = FaceStyle::default();
    assert!(matches!(
        PixmapSurface::new(0, 10, &style).err().unwrap(),
        ChernoffError::InvalidDimensions(_)
    ));
    assert!(PixmapSurface::new(10, 70_000, &style).is_err());
}

#[test]
fn rejects_non_positive_stroke_width() {
    let style = FaceStyle {
        stroke_width: 0.0,
        ..FaceStyle::default()
    };
    assert!(matches!(
        PixmapSurface::new(10, 10, &style).err().unwrap(),
        ChernoffError::Config(_)
    ));
}

#[test]
fn rejects_translucent_background() {
    let style = FaceStyle {
        background: Rgba8 {
            a: 128,
            ..Rgba8::WHITE
        },
        ..FaceStyle::default()
    };
    assert!(matches!(
        style.validate().unwrap_err(),
        ChernoffError::Config(_)
    ));
    assert!(PixmapSurface::new(10, 10, &style).is_err());

    // Translucent ink over the opaque background still yields opaque pixels.
    let style = FaceStyle {
        ink: Rgba8 {
            a: 100,
            ..Rgba8::BLACK
        },
        ..FaceStyle::default()
    };
    let mut surface = PixmapSurface::new(20, 20, &style).unwrap();
    surface.fill_oval(5, 5, 10, 10);
    let frame = surface.finish();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}
