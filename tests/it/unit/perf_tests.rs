//! Unit tests for perf module.

use gridlink::perf::{FRAME_BUDGET_MS, FrameMonitor, SpanTimer, measure};

#[test]
fn test_frame_monitor_basic() {
    let mut monitor = FrameMonitor::new();

    monitor.begin_frame();
    let sample = monitor.end_frame();

    assert!(sample.is_some_and(|s| s.total_ms >= 0.0 && s.slowest_stage.is_none()));
    assert_eq!(monitor.total_frames(), 1);
}

#[test]
fn test_end_without_begin_records_nothing() {
    let mut monitor = FrameMonitor::new();
    assert_eq!(monitor.end_frame(), None);
    assert_eq!(monitor.total_frames(), 0);
    assert!(monitor.last_frame().is_none());
}

#[test]
fn test_recorded_frames_feed_statistics() {
    let mut monitor = FrameMonitor::new();
    monitor.record_frame(4.0);
    monitor.record_frame(8.0);
    monitor.record_frame(FRAME_BUDGET_MS * 3.0);

    assert_eq!(monitor.total_frames(), 3);
    assert_eq!(monitor.over_budget_frames(), 1);
    assert_eq!(monitor.worst_ms(), FRAME_BUDGET_MS * 3.0);
    assert!((monitor.average_ms() - (12.0 + FRAME_BUDGET_MS * 3.0) / 3.0).abs() < 1e-9);

    monitor.reset();
    assert_eq!(monitor.total_frames(), 0);
    assert_eq!(monitor.average_ms(), 0.0);
}

#[test]
fn test_stage_totals_accumulate_across_frames() {
    let mut monitor = FrameMonitor::new();
    monitor.begin_frame();
    monitor.record_stage("zoom", 0.25);
    monitor.end_frame();
    monitor.begin_frame();
    monitor.record_stage("zoom", 0.5);
    monitor.end_frame();

    assert_eq!(monitor.stage_total("zoom"), Some(0.75));
    assert_eq!(monitor.stage_total("purge"), None);
    assert_eq!(
        monitor.last_frame().and_then(|s| s.slowest_stage),
        Some(("zoom", 0.5))
    );
}

#[test]
fn test_custom_budget() {
    let mut monitor = FrameMonitor::with_budget(100.0);
    monitor.record_frame(150.0);
    assert_eq!(monitor.over_budget_frames(), 0);
    monitor.record_frame(250.0);
    assert_eq!(monitor.over_budget_frames(), 1);
}

#[test]
fn test_span_timer_creation() {
    // High threshold: dropping must not log
    let timer = SpanTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_value() {
    let (value, ms) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(ms >= 0.0);
}
