//! Bounded single-category event queue with a drop-oldest overflow policy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam::channel::{bounded, Receiver, Sender, TrySendError};

use crate::iter::EventQueueReader;

/// A bounded queue from the driver callback thread to one consumer.
///
/// The producer side never blocks: when the queue is full, the oldest
/// entry is stolen to make room for the new one. Drops are counted and
/// observable through [`EventQueue::dropped`] and the reader's
/// `dropped()`.
pub struct EventQueue<T> {
    name: &'static str,
    tx: Sender<T>,
    rx: Receiver<T>,
    dropped: Arc<AtomicU64>,
}

impl<T> EventQueue<T> {
    /// Create a queue holding at most `capacity` entries.
    pub fn bounded(name: &'static str, capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self {
            name,
            tx,
            rx,
            dropped: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Enqueue an event without ever blocking the caller.
    ///
    /// On overflow the oldest queued entry is discarded; if another
    /// producer refills the slot first, the new entry is discarded
    /// instead. Either way exactly one event is lost per overflow and the
    /// drop counter records it.
    pub fn push(&self, event: T) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                let _ = self.rx.try_recv();
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(queue = self.name, "queue full, dropped oldest event");
                if self.tx.try_send(event).is_err() {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                // All readers are gone; nothing is listening for this event.
            }
        }
    }

    /// A consumer handle onto this queue.
    pub fn reader(&self) -> EventQueueReader<T> {
        EventQueueReader::new(self.rx.clone(), Arc::clone(&self.dropped))
    }

    /// Number of events lost to overflow since the queue was created.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Number of events currently waiting.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
