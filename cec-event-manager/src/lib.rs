//! # CEC Event Manager
//!
//! Delivers bus notifications from the adapter driver's callback thread to
//! consumer-facing queues, decoupling the driver's cadence from application
//! processing.
//!
//! ## Overview
//!
//! The driver invokes [`EventDispatcher`] (through the `EventSink` trait)
//! on a thread this crate does not control. Each of the five notification
//! categories (log messages, key presses, full commands, source
//! activations, menu-state changes) lands in its own bounded queue, and
//! the application drains those queues through blocking or non-blocking
//! [`EventQueueReader`] iterators.
//!
//! ## Backpressure
//!
//! Enqueueing never blocks the driver thread. When a queue is full the
//! oldest entry is dropped to make room, the drop is counted, and a warning
//! is logged. A slow consumer therefore sees the newest events and an
//! accurate drop count rather than a stalled bus.
//!
//! ## Usage
//!
//! ```
//! use cec_event_manager::EventDispatcher;
//!
//! let dispatcher = EventDispatcher::new()?;
//! let commands = dispatcher.commands();
//!
//! // Hand the dispatcher to the driver as its event sink, then consume:
//! for command in commands.try_iter() {
//!     println!("bus command: {command}");
//! }
//! # Ok::<(), cec_event_manager::DispatchError>(())
//! ```

mod config;
mod dispatcher;
mod error;
mod iter;
mod queue;

pub use config::DispatcherConfig;
pub use dispatcher::EventDispatcher;
pub use error::DispatchError;
pub use iter::{EventQueueReader, TimeoutIterator, TryIterator};
pub use queue::EventQueue;
