//! Frame scheduling.
//!
//! Host events never run editor logic themselves; they ask for a frame. The
//! scheduler keeps at most one frame request outstanding, so any number of
//! events arriving before the host fires it collapse into a single run. After a
//! frame, a new one is requested only while some input is still held.

use parking_lot::Mutex;
use std::sync::Arc;

/// Host-issued identifier of a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's frame-synchronized callback primitive.
///
/// When a requested frame fires, the host calls `Editor::run_frame`.
pub trait FrameHost {
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

pub struct UpdateScheduler {
    host: Box<dyn FrameHost>,
    pending: Option<FrameHandle>,
    disposed: bool,
}

impl UpdateScheduler {
    pub fn new(host: Box<dyn FrameHost>) -> Self {
        Self {
            host,
            pending: None,
            disposed: false,
        }
    }

    /// Request a frame unless one is already pending. Returns true if a new
    /// request went to the host.
    pub fn request(&mut self) -> bool {
        if self.disposed || self.pending.is_some() {
            return false;
        }
        let handle = self.host.request_frame();
        tracing::trace!(handle = handle.0, "Frame requested");
        self.pending = Some(handle);
        true
    }

    /// Called when a frame fires. Returns false if the frame must not run.
    pub fn begin_frame(&mut self) -> bool {
        if self.disposed {
            tracing::trace!("Ignoring frame after dispose");
            return false;
        }
        self.pending = None;
        true
    }

    /// Re-arm while inputs are held so continuous gestures keep updating
    pub fn finish_frame(&mut self, any_held: bool) {
        if any_held {
            self.request();
        }
    }

    /// Cancel the pending frame and go permanently inert. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(handle) = self.pending.take() {
            tracing::debug!(handle = handle.0, "Cancelling pending frame");
            self.host.cancel_frame(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

// ============================================================================
// ManualFrameHost
// ============================================================================

#[derive(Debug, Default)]
struct ManualFrameState {
    next_id: u64,
    queued: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    requests: usize,
}

/// Headless frame host: requests queue up until the owner fires them.
///
/// Clones share the same queue, so tests keep one to drive frames after
/// handing another to the editor.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameHost {
    state: Arc<Mutex<ManualFrameState>>,
}

impl ManualFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest queued frame, if any
    pub fn take_frame(&self) -> Option<FrameHandle> {
        let mut state = self.state.lock();
        if state.queued.is_empty() {
            None
        } else {
            Some(state.queued.remove(0))
        }
    }

    pub fn queued(&self) -> usize {
        self.state.lock().queued.len()
    }

    /// Total number of frames ever requested
    pub fn request_count(&self) -> usize {
        self.state.lock().requests
    }

    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.state.lock().cancelled.clone()
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> FrameHandle {
        let mut state = self.state.lock();
        let handle = FrameHandle(state.next_id);
        state.next_id += 1;
        state.requests += 1;
        state.queued.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.lock();
        state.queued.retain(|&h| h != handle);
        state.cancelled.push(handle);
    }
}
