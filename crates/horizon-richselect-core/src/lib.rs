//! Core systems for Horizon RichSelect.
//!
//! This crate provides the foundational pieces the rich select widget is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Event Queues**: Deferred events for re-entrant callers
//! - **Errors**: The rich select error taxonomy
//! - **Logging**: `tracing` targets, span names, and perf spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_richselect_core::Signal;
//!
//! let selection_changed = Signal::<Option<i64>>::new();
//!
//! let conn_id = selection_changed.connect(|value| {
//!     println!("Selection changed to: {:?}", value);
//! });
//!
//! selection_changed.emit(Some(2));
//! selection_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod queue;
pub mod signal;

pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use queue::{EventQueue, EventSender};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
