// SPDX-License-Identifier: MPL-2.0
//! Once-per-frame coalescing of bursty events.
//!
//! Scroll events arrive far more often than frames are drawn. The coalescer
//! keeps only the latest submitted value; the owner flushes it when the next
//! frame fires, so at most one recomputation runs per frame. Values submitted
//! and replaced within the same frame are dropped, not queued.

/// Holds the most recent value submitted since the last frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    torn_down: bool,
    dropped: u64,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            torn_down: false,
            dropped: 0,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for the next frame, replacing any pending one.
    ///
    /// Returns `true` when a frame callback needs to be requested, i.e. when
    /// nothing was pending before. Submissions after [`teardown`] are ignored.
    ///
    /// [`teardown`]: FrameCoalescer::teardown
    pub fn submit(&mut self, value: T) -> bool {
        if self.torn_down {
            return false;
        }
        let replaced = self.pending.replace(value);
        if replaced.is_some() {
            self.dropped += 1;
        }
        replaced.is_none()
    }

    /// Takes the pending value; call once per frame.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Discards the pending value without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Cancels any pending value and refuses further submissions.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.torn_down = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of values replaced before they were flushed.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_within_a_frame_flushes_only_the_latest() {
        let mut coalescer = FrameCoalescer::new();
        assert!(coalescer.submit(10.0));
        assert!(!coalescer.submit(20.0));
        assert!(!coalescer.submit(30.0));

        assert_eq!(coalescer.flush(), Some(30.0));
        assert_eq!(coalescer.flush(), None);
        assert_eq!(coalescer.dropped(), 2);
    }

    #[test]
    fn next_submission_after_flush_requests_a_new_frame() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.submit(1);
        coalescer.flush();
        assert!(coalescer.submit(2));
        assert!(coalescer.is_pending());
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.submit("stale");
        assert_eq!(coalescer.cancel(), Some("stale"));
        assert!(!coalescer.is_pending());
        assert_eq!(coalescer.flush(), None);
    }

    #[test]
    fn teardown_rejects_later_submissions() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.submit(1);
        coalescer.teardown();

        assert!(coalescer.is_torn_down());
        assert_eq!(coalescer.flush(), None);
        assert!(!coalescer.submit(2));
        assert_eq!(coalescer.flush(), None);
    }
}
