//! Frame timing and profiling instrumentation.
//!
//! `FrameMonitor` attributes the wall time of every executed frame to the
//! frame stages that ran in it and keeps a short window of recent frames. A
//! frame far over budget is logged together with the stage that dominated it.
//!
//! The `profile_scope!` macro times a block when the `profiling` feature is
//! enabled and compiles to nothing otherwise:
//!
//! ```ignore
//! fn route(..) -> LinkPath {
//!     profile_scope!("route");
//!     // ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{debug, warn};

/// Budget of one frame at 60 FPS
pub const FRAME_BUDGET_MS: f64 = 16.67;

/// Frames kept for windowed statistics
const WINDOW: usize = 120;

/// A frame is reported once it takes this many budgets
const OVER_BUDGET_FACTOR: f64 = 2.0;

/// Time a scope under the given name. Compiles away without `profiling`.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _span_timer = $crate::perf::SpanTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _span_timer = $crate::perf::SpanTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Frame Monitor
// ============================================================================

/// Timing of one finished frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSample {
    pub total_ms: f64,
    /// Stage that took longest, with its time
    pub slowest_stage: Option<(&'static str, f64)>,
}

#[derive(Debug)]
pub struct FrameMonitor {
    budget_ms: f64,
    started: Option<Instant>,
    /// Stages recorded since `begin_frame`
    current: Vec<(&'static str, f64)>,
    window: VecDeque<FrameSample>,
    stage_totals: HashMap<&'static str, f64>,
    frames: u64,
    over_budget: u64,
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self::with_budget(FRAME_BUDGET_MS)
    }

    pub fn with_budget(budget_ms: f64) -> Self {
        Self {
            budget_ms,
            started: None,
            current: Vec::new(),
            window: VecDeque::with_capacity(WINDOW),
            stage_totals: HashMap::new(),
            frames: 0,
            over_budget: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.started = Some(Instant::now());
        self.current.clear();
    }

    /// Attribute `ms` to `stage` in the current frame
    pub fn record_stage(&mut self, stage: &'static str, ms: f64) {
        self.current.push((stage, ms));
        *self.stage_totals.entry(stage).or_default() += ms;
    }

    /// Close the frame opened by `begin_frame`
    pub fn end_frame(&mut self) -> Option<FrameSample> {
        let started = self.started.take()?;
        Some(self.record_frame(started.elapsed().as_secs_f64() * 1000.0))
    }

    /// Close the current frame with a duration measured elsewhere
    pub fn record_frame(&mut self, total_ms: f64) -> FrameSample {
        let slowest_stage = self
            .current
            .drain(..)
            .max_by(|a, b| a.1.total_cmp(&b.1));
        let sample = FrameSample {
            total_ms,
            slowest_stage,
        };

        self.frames += 1;
        if total_ms > self.budget_ms * OVER_BUDGET_FACTOR {
            self.over_budget += 1;
            let (stage, stage_ms) = slowest_stage.unwrap_or(("unknown", 0.0));
            warn!(
                frame_ms = format!("{:.2}", total_ms),
                budget_ms = format!("{:.2}", self.budget_ms),
                stage,
                stage_ms = format!("{:.2}", stage_ms),
                "Frame over budget"
            );
        }

        if self.window.len() == WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(sample.clone());
        sample
    }

    pub fn total_frames(&self) -> u64 {
        self.frames
    }

    pub fn over_budget_frames(&self) -> u64 {
        self.over_budget
    }

    /// Cumulative time spent in `stage` across all frames
    pub fn stage_total(&self, stage: &str) -> Option<f64> {
        self.stage_totals.get(stage).copied()
    }

    pub fn last_frame(&self) -> Option<&FrameSample> {
        self.window.back()
    }

    /// Mean frame time over the window, 0 when empty
    pub fn average_ms(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().map(|s| s.total_ms).sum::<f64>() / self.window.len() as f64
    }

    /// Slowest frame in the window
    pub fn worst_ms(&self) -> f64 {
        self.window.iter().map(|s| s.total_ms).fold(0.0, f64::max)
    }

    pub fn reset(&mut self) {
        debug!(frames = self.frames, "Resetting frame statistics");
        *self = Self::with_budget(self.budget_ms);
    }
}

// ============================================================================
// Span Timer
// ============================================================================

/// Logs the lifetime of a scope when it exceeds a threshold.
pub struct SpanTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl SpanTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Low threshold for profiling builds
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.5)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for SpanTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            debug!(
                span = self.name,
                elapsed_ms = format!("{:.3}", elapsed_ms),
                threshold_ms = self.threshold_ms,
                "Slow span"
            );
        }
    }
}

/// Run `f`, returning its result and the elapsed milliseconds.
#[inline]
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
