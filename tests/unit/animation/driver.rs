use super::*;
use crate::{
    animation::state::FaceAnimator,
    face::descriptor::FaceDescriptor,
    foundation::core::{Fps, TargetRect},
    render::{
        command::{DrawList, FaceFeature},
        painter::FacePainter,
    },
};

fn settings(fps: u32, pacing: Pacing) -> AnimationSettings {
    AnimationSettings {
        fps: Fps::new(fps).unwrap(),
        pacing,
    }
}

fn recorder() -> impl FnMut(&f64) -> ChernoffResult<()> + Send + 'static {
    let seen = Arc::new(Mutex::new(Vec::new()));
    move |t: &f64| {
        seen.lock().unwrap().push(*t);
        Ok(())
    }
}

#[test]
fn sync_run_delivers_every_frame_in_order() {
    let seen = Arc::new(Mutex::new(Vec::<f64>::new()));
    let sink = Arc::clone(&seen);
    let driver = AnimationDriver::with_settings(
        move |v: &f64| -> ChernoffResult<()> {
            sink.lock().unwrap().push(*v);
            Ok(())
        },
        settings(100, Pacing::Deadline),
    );

    let report = driver
        .run_sync(&0.0_f64, &10.0_f64, Duration::from_millis(100))
        .unwrap();
    assert_eq!(report.frames, 10);
    assert!(!report.cancelled);
    assert!(report.elapsed >= Duration::from_millis(100));
    assert!(driver.is_complete());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 10);
    for (i, v) in seen.iter().enumerate() {
        assert!((v - i as f64).abs() < 1e-9, "frame {i} got {v}");
    }
}

#[test]
fn fixed_delay_waits_after_each_frame() {
    let driver = AnimationDriver::with_settings(recorder(), settings(100, Pacing::FixedDelay));
    let report = driver
        .run_sync(&0.0_f64, &1.0_f64, Duration::from_millis(50))
        .unwrap();
    assert_eq!(report.frames, 5);
    assert!(report.elapsed >= Duration::from_millis(50));
}

#[test]
fn descriptors_are_interpolated_between_endpoints() {
    let a = FaceDescriptor::from_array([0.0; 10]).unwrap();
    let b = FaceDescriptor::from_array([1.0; 10]).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let driver = AnimationDriver::with_settings(
        move |face: &FaceDescriptor| -> ChernoffResult<()> {
            sink.lock().unwrap().push(*face);
            Ok(())
        },
        settings(100, Pacing::Deadline),
    );
    driver.run_sync(&a, &b, Duration::from_millis(40)).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], a);
    assert!((seen[2].head_eccentricity() - 0.5).abs() < 1e-12);
    assert!(seen.iter().all(|f| f.distance(&b) > 0.0));
}

#[test]
fn invalid_duration_fails_before_any_frame() {
    let driver = AnimationDriver::new(|_: &f64| -> ChernoffResult<()> {
        panic!("animator must not be called")
    });
    let err = driver
        .run_sync(&0.0_f64, &1.0_f64, Duration::ZERO)
        .unwrap_err();
    assert!(matches!(err, ChernoffError::InvalidTiming(_)));
    assert!(driver.is_complete());
}

#[test]
fn animator_error_aborts_run() {
    let mut calls = 0;
    let driver = AnimationDriver::with_settings(
        move |_: &f64| -> ChernoffResult<()> {
            calls += 1;
            if calls == 3 {
                return Err(ChernoffError::animation("surface lost"));
            }
            Ok(())
        },
        settings(1000, Pacing::Deadline),
    );
    let err = driver
        .run_sync(&0.0_f64, &1.0_f64, Duration::from_millis(10))
        .unwrap_err();
    assert_eq!(err.to_string(), "animation error: surface lost");
    assert!(driver.is_complete());
}

#[test]
fn async_completion_flips_once() {
    let driver = AnimationDriver::with_settings(recorder(), settings(100, Pacing::Deadline));
    assert!(driver.is_complete());

    let handle = driver
        .run_async(0.0_f64, 1.0_f64, Duration::from_millis(100))
        .unwrap();
    assert!(!driver.is_complete());
    assert!(!handle.is_complete());

    let report = handle.wait().unwrap();
    assert_eq!(report.frames, 10);
    assert!(driver.is_complete());

    // Stays complete afterwards.
    std::thread::sleep(Duration::from_millis(20));
    assert!(driver.is_complete());
}

#[test]
fn polling_observes_completion_without_wait() {
    let driver = AnimationDriver::with_settings(recorder(), settings(100, Pacing::Deadline));
    let _handle = driver
        .run_async(0.0_f64, 1.0_f64, Duration::from_millis(30))
        .unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while !driver.is_complete() {
        assert!(Instant::now() < deadline, "animation never completed");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn second_run_while_busy_is_rejected() {
    let driver = AnimationDriver::with_settings(recorder(), settings(100, Pacing::Deadline));
    let handle = driver
        .run_async(0.0_f64, 1.0_f64, Duration::from_millis(200))
        .unwrap();

    let err = driver
        .run_sync(&0.0_f64, &1.0_f64, Duration::from_millis(10))
        .unwrap_err();
    assert!(matches!(err, ChernoffError::Animation(_)));
    assert!(
        driver
            .run_async(0.0_f64, 1.0_f64, Duration::from_millis(10))
            .is_err()
    );

    handle.wait().unwrap();
    driver
        .run_sync(&0.0_f64, &1.0_f64, Duration::from_millis(10))
        .unwrap();
}

#[test]
fn cancel_stops_between_frames() {
    let driver = AnimationDriver::with_settings(recorder(), settings(100, Pacing::Deadline));
    let handle = driver
        .run_async(0.0_f64, 1.0_f64, Duration::from_secs(10))
        .unwrap();
    std::thread::sleep(Duration::from_millis(35));
    handle.cancel();

    let report = handle.wait().unwrap();
    assert!(report.cancelled);
    assert!(report.frames >= 1);
    assert!(report.frames < 1000);
    assert!(driver.is_complete());
}

#[test]
fn pre_cancelled_sync_run_delivers_nothing() {
    let driver = AnimationDriver::new(|_: &f64| -> ChernoffResult<()> {
        panic!("animator must not be called")
    });
    let token = CancelToken::new();
    token.cancel();
    let report = driver
        .run_sync_until(&0.0_f64, &1.0_f64, Duration::from_secs(1), &token)
        .unwrap();
    assert_eq!(report.frames, 0);
    assert!(report.cancelled);
}

#[test]
fn face_animator_is_reachable_between_runs() {
    let animator = FaceAnimator::new(
        FacePainter::default(),
        TargetRect::sized(50, 50).unwrap(),
        DrawList::new(),
    )
    .unwrap();
    let driver = AnimationDriver::with_settings(animator, settings(1000, Pacing::Deadline));
    let a = FaceDescriptor::neutral();
    driver.run_sync(&a, &a, Duration::from_millis(5)).unwrap();

    let shared = driver.animator();
    let animator = shared.lock().unwrap();
    assert_eq!(animator.frames(), 5);
    assert_eq!(
        animator.surface().feature_commands(FaceFeature::Head).len(),
        5
    );
}
