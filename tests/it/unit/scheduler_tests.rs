//! Unit tests for frame scheduling.

use gridlink::scheduler::FrameHandle;
use gridlink::{ManualFrameHost, UpdateScheduler};

fn scheduler() -> (UpdateScheduler, ManualFrameHost) {
    let host = ManualFrameHost::new();
    (UpdateScheduler::new(Box::new(host.clone())), host)
}

#[test]
fn test_at_most_one_pending_frame() {
    let (mut scheduler, host) = scheduler();
    for _ in 0..5 {
        scheduler.request();
    }
    assert_eq!(host.queued(), 1);

    host.take_frame();
    assert!(scheduler.begin_frame());
    assert!(scheduler.request());
    assert_eq!(host.request_count(), 2);
}

#[test]
fn test_stray_frame_after_dispose_is_ignored() {
    let (mut scheduler, host) = scheduler();
    scheduler.request();
    let handle = host.take_frame();

    scheduler.dispose();
    assert_eq!(handle, Some(FrameHandle(0)));
    assert!(!scheduler.begin_frame());
    assert!(!scheduler.request());
}

#[test]
fn test_dispose_cancels_pending() {
    let (mut scheduler, host) = scheduler();
    scheduler.request();
    scheduler.dispose();

    assert_eq!(host.queued(), 0);
    assert_eq!(host.cancelled(), vec![FrameHandle(0)]);
    assert!(scheduler.is_disposed());
    assert!(!scheduler.is_pending());
}
