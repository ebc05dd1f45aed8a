//! Consumer-side handles for draining event queues.
//!
//! Provides a blocking iterator interface plus non-blocking and
//! timeout-bounded variants, so applications can process events without
//! touching the dispatch internals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel::Receiver;

/// Consumer handle for one event queue.
///
/// Blocks on `next()` until an event is available. Use
/// [`try_recv`](EventQueueReader::try_recv) or
/// [`try_iter`](EventQueueReader::try_iter) for non-blocking access.
pub struct EventQueueReader<T> {
    rx: Receiver<T>,
    dropped: Arc<AtomicU64>,
}

impl<T> EventQueueReader<T> {
    pub(crate) fn new(rx: Receiver<T>, dropped: Arc<AtomicU64>) -> Self {
        Self { rx, dropped }
    }

    /// Block until an event is available.
    ///
    /// Returns `None` once the producing dispatcher is gone.
    pub fn recv(&self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Take an event if one is ready, without blocking.
    pub fn try_recv(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Block until an event arrives or the timeout expires.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Non-blocking iterator over the events currently queued.
    pub fn try_iter(&self) -> TryIterator<'_, T> {
        TryIterator { inner: self }
    }

    /// Iterator that waits up to `timeout` for each event.
    pub fn timeout_iter(&self, timeout: Duration) -> TimeoutIterator<'_, T> {
        TimeoutIterator {
            inner: self,
            timeout,
        }
    }

    /// Events lost to queue overflow since the dispatcher was created.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<T> Iterator for EventQueueReader<T> {
    type Item = T;

    /// Block until the next event is available.
    fn next(&mut self) -> Option<T> {
        self.recv()
    }
}

impl<T> Clone for EventQueueReader<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
            dropped: Arc::clone(&self.dropped),
        }
    }
}

/// Non-blocking iterator over currently queued events.
pub struct TryIterator<'a, T> {
    inner: &'a EventQueueReader<T>,
}

impl<'a, T> Iterator for TryIterator<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.try_recv()
    }
}

/// Blocking iterator with a per-event timeout.
pub struct TimeoutIterator<'a, T> {
    inner: &'a EventQueueReader<T>,
    timeout: Duration,
}

impl<'a, T> Iterator for TimeoutIterator<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.recv_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::EventQueue;

    #[test]
    fn try_recv_on_empty_queue_returns_none() {
        let queue: EventQueue<u8> = EventQueue::bounded("test", 4);
        let reader = queue.reader();
        assert!(reader.try_recv().is_none());
    }

    #[test]
    fn recv_timeout_expires_on_empty_queue() {
        let queue: EventQueue<u8> = EventQueue::bounded("test", 4);
        let reader = queue.reader();
        let started = std::time::Instant::now();
        assert!(reader.recv_timeout(Duration::from_millis(50)).is_none());
        assert!(started.elapsed() >= Duration::from_millis(45));
    }

    #[test]
    fn cloned_readers_share_the_queue() {
        let queue = EventQueue::bounded("test", 4);
        let first = queue.reader();
        let second = first.clone();
        queue.push(7u8);
        // Whichever reader asks first gets the event; the other sees empty.
        let taken = first.try_recv().or_else(|| second.try_recv());
        assert_eq!(taken, Some(7));
        assert!(first.try_recv().is_none());
        assert!(second.try_recv().is_none());
    }

    #[test]
    fn timeout_iter_yields_queued_events_then_stops() {
        let queue = EventQueue::bounded("test", 4);
        queue.push(1u8);
        queue.push(2u8);
        let reader = queue.reader();
        let events: Vec<u8> = reader.timeout_iter(Duration::from_millis(20)).collect();
        assert_eq!(events, vec![1, 2]);
    }
}
