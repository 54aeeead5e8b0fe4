//! Assertion helpers for bounds observer tests.

use crate::recorder::BoundsRecorder;
use crate::service::RecordingGeometryService;
use bounds_observer_graphics::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the recorder received exactly `expected`, in order.
pub fn assert_calls(recorder: &BoundsRecorder, expected: &[Rect], msg: &str) {
    let calls = recorder.calls();
    assert_eq!(
        calls.len(),
        expected.len(),
        "{}: expected {} callback(s), got {:?}",
        msg,
        expected.len(),
        calls
    );
    for (index, (actual, expected)) in calls.iter().zip(expected).enumerate() {
        assert_rect_approx_eq(*actual, *expected, 0.0, &format!("{} - call {}", msg, index));
    }
}

/// Assert that the recorder was never invoked.
pub fn assert_no_calls(recorder: &BoundsRecorder, msg: &str) {
    assert_calls(recorder, &[], msg);
}

/// Assert the service never saw two live observers, a redundant disconnect,
/// or an observer dropped while still observing.
pub fn assert_no_leaks(service: &RecordingGeometryService, msg: &str) {
    assert!(
        service.max_live_observers() <= 1,
        "{}: {} observers were live at once",
        msg,
        service.max_live_observers()
    );
    assert_eq!(
        service.redundant_disconnects(),
        0,
        "{}: observer disconnected while not observing",
        msg
    );
    assert_eq!(
        service.dropped_while_observing(),
        0,
        "{}: observer dropped while observing",
        msg
    );
}
