//! Frame Scheduling
//!
//! Explicit seam between the engine and the host's display timing. Each
//! rendered frame requests exactly the next one, forming the unbounded
//! chain a real compositor would drive; `ManualScheduler` lets tests and
//! simulations step that chain deterministically.

/// Host-provided frame pacing
pub trait FrameScheduler {
    /// Ask for one more frame callback
    fn request_frame(&mut self);
}

/// Deterministic scheduler for tests and simulations
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: u32,
    requested_total: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested and not yet taken
    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Total frames ever requested
    pub fn requested_total(&self) -> u64 {
        self.requested_total
    }

    /// Consume one pending request; the caller then runs the frame
    pub fn take_pending(&mut self) -> bool {
        if self.pending > 0 {
            self.pending -= 1;
            true
        } else {
            false
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.requested_total += 1;
    }
}
