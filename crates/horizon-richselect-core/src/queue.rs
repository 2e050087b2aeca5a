//! Deferred event queues.
//!
//! A widget processes one input event at a time. Code that runs as a side
//! effect of that processing (for example a slot connected to
//! `selection_changed`) must not start a second event in the middle of the
//! first. It posts the event through an [`EventSender`] instead, and the
//! widget drains the [`EventQueue`] once the current event is complete.
//!
//! ```
//! use horizon_richselect_core::EventQueue;
//!
//! let queue = EventQueue::<u32>::new();
//! let sender = queue.sender();
//! sender.post(1);
//! sender.post(2);
//!
//! assert_eq!(queue.try_next(), Some(1));
//! assert_eq!(queue.try_next(), Some(2));
//! assert_eq!(queue.try_next(), None);
//! ```

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::logging::targets;

/// FIFO queue of deferred events owned by a widget.
#[derive(Debug)]
pub struct EventQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Get a cloneable handle for posting events to this queue.
    pub fn sender(&self) -> EventSender<T> {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Take the oldest pending event, if any.
    pub fn try_next(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }
}

/// Handle for posting events to an [`EventQueue`].
#[derive(Debug)]
pub struct EventSender<T> {
    sender: Sender<T>,
}

impl<T> Clone for EventSender<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> EventSender<T> {
    /// Post an event to be processed after the current one.
    ///
    /// Returns `false` if the owning queue has been dropped.
    pub fn post(&self, event: T) -> bool {
        match self.sender.send(event) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(target: targets::QUEUE, "event posted to a dropped queue");
                false
            }
        }
    }
}

static_assertions::assert_impl_all!(EventSender<u32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        for i in 0..5 {
            assert!(sender.post(i));
        }

        let drained: Vec<_> = std::iter::from_fn(|| queue.try_next()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert_eq!(queue.try_next(), None);
    }

    #[test]
    fn test_post_after_queue_dropped() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.post(1));
    }
}
