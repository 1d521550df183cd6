use super::*;
use crate::foundation::core::TargetRect;
use crate::render::command::{DrawCommand, DrawList};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn solves_known_parabola() {
    let p = Parabola::through(
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, -1.0),
    )
    .unwrap();
    assert!(close(p.a, 1.0));
    assert!(close(p.b, -2.0));
    assert!(close(p.c, 0.0));
}

#[test]
fn curve_passes_through_all_three_points() {
    let pts = [
        Point::new(35.0, 65.0),
        Point::new(65.0, 65.0),
        Point::new(50.0, 70.0),
    ];
    let p = Parabola::through(pts[0], pts[1], pts[2]).unwrap();
    for pt in pts {
        assert!(close(p.eval(pt.x), pt.y), "{pt:?}");
    }
}

#[test]
fn flat_lip_is_a_line() {
    let p = Parabola::through(
        Point::new(40.0, 65.0),
        Point::new(60.0, 65.0),
        Point::new(50.0, 65.0),
    )
    .unwrap();
    assert!(close(p.a, 0.0));
    assert!(close(p.b, 0.0));
    assert!(close(p.c, 65.0));
}

#[test]
fn repeated_x_has_no_solution() {
    assert!(
        Parabola::through(
            Point::new(1.0, 0.0),
            Point::new(1.0, 5.0),
            Point::new(2.0, 1.0)
        )
        .is_none()
    );
}

#[test]
fn segment_count_tracks_device_width() {
    let p = Parabola::through(
        Point::new(40.0, 65.0),
        Point::new(60.0, 65.0),
        Point::new(50.0, 70.0),
    )
    .unwrap();

    for (width, expected) in [(100, 21), (200, 41), (50, 11)] {
        let ctx = RenderContext::new(TargetRect::sized(width, width).unwrap());
        let mut list = DrawList::new();
        stroke_parabola(&mut list, &ctx, &p, Point::new(40.0, 65.0), 60.0);
        assert_eq!(list.len(), expected, "width {width}");
        assert!(
            list.commands()
                .all(|cmd| matches!(cmd, DrawCommand::Line { .. }))
        );
    }
}

#[test]
fn segments_are_connected() {
    let p = Parabola::through(
        Point::new(40.0, 65.0),
        Point::new(60.0, 65.0),
        Point::new(50.0, 60.0),
    )
    .unwrap();
    let ctx = RenderContext::new(TargetRect::sized(100, 100).unwrap());
    let mut list = DrawList::new();
    stroke_parabola(&mut list, &ctx, &p, Point::new(40.0, 65.0), 60.0);

    let lines: Vec<_> = list
        .commands()
        .map(|cmd| match cmd {
            DrawCommand::Line { x1, y1, x2, y2 } => (x1, y1, x2, y2),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    for pair in lines.windows(2) {
        assert_eq!((pair[0].2, pair[0].3), (pair[1].0, pair[1].1));
    }
    assert_eq!(lines.last().unwrap().2, 60);
}
