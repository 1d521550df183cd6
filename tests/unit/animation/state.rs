use super::*;
use crate::render::command::{DrawList, FaceFeature};

#[test]
fn scalar_and_vector_interpolation() {
    assert_eq!(<f64 as AnimationState>::interpolate(&2.0, &4.0, 0.5), 3.0);
    let v = <Vec2 as AnimationState>::interpolate(
        &Vec2::new(0.0, 10.0),
        &Vec2::new(10.0, 0.0),
        0.25,
    );
    assert_eq!(v, Vec2::new(2.5, 7.5));
}

#[test]
fn closures_are_animators() {
    let mut seen = Vec::new();
    {
        let mut record = |s: &f64| -> ChernoffResult<()> {
            seen.push(*s);
            Ok(())
        };
        record.animate(&1.0).unwrap();
        record.animate(&2.0).unwrap();
    }
    assert_eq!(seen, vec![1.0, 2.0]);
}

#[test]
fn face_animator_draws_every_frame() {
    let rect = TargetRect::sized(100, 100).unwrap();
    let mut animator = FaceAnimator::new(FacePainter::default(), rect, DrawList::new()).unwrap();
    animator.animate(&FaceDescriptor::neutral()).unwrap();
    animator.animate(&FaceDescriptor::neutral()).unwrap();
    assert_eq!(animator.frames(), 2);

    let list = animator.into_surface();
    assert_eq!(list.feature_commands(FaceFeature::Head).len(), 2);
}

#[test]
fn face_animator_rejects_bad_rect() {
    let rect = TargetRect {
        x: 0,
        y: 0,
        width: 10,
        height: -1,
    };
    assert!(FaceAnimator::new(FacePainter::default(), rect, DrawList::new()).is_err());
}
