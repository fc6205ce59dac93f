//! Per-frame coalescing of tracker evaluations.
//!
//! # Invariants
//! - At most one evaluation is pending at any time.
//! - A request made while one is pending is dropped, never queued.

/// Repaint-cycle hook supplied by the render target.
pub trait FrameScheduler {
    /// Asks for one callback before the next repaint.
    ///
    /// Returns `false` when the host could not queue the callback.
    fn request_frame(&self) -> bool;
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &S {
    fn request_frame(&self) -> bool {
        (**self).request_frame()
    }
}

/// Result of asking the gate for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// No evaluation was pending; caller must schedule a frame.
    Scheduled,
    /// An evaluation is already pending for the next frame.
    AlreadyPending,
    /// The scheduler refused the request; nothing is pending.
    Failed,
}

/// Single-slot pending flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> FrameRequest {
        if self.pending {
            return FrameRequest::AlreadyPending;
        }
        self.pending = true;
        FrameRequest::Scheduled
    }

    /// Consumes the pending slot. Returns `false` for a frame nobody asked for.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
