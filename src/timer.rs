//! Scoped one-shot timers
//!
//! The reveal step schedules single-shot alarms tied to the lifetime of a
//! mounted component. A scheduled alarm is represented by a [`Timeout`]
//! guard; dropping the guard cancels the entry, so no alarm can fire after
//! its owner is torn down. The queue is single-threaded and driven by the
//! embedding event loop calling [`TimerQueue::poll`].

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use web_time::{Duration, Instant};

struct Entry<M> {
    token: u64,
    deadline: Instant,
    message: M,
}

struct Inner<M> {
    entries: Vec<Entry<M>>,
    next_token: u64,
}

impl<M> Inner<M> {
    fn cancel(&mut self, token: u64) {
        self.entries.retain(|entry| entry.token != token);
    }
}

/// A queue of pending single-shot alarms
///
/// Cloning the queue is cheap and shares the same pending entries.
pub struct TimerQueue<M> {
    inner: Rc<RefCell<Inner<M>>>,
}

impl<M> Clone for TimerQueue<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M> Default for TimerQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> TimerQueue<M> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: Vec::new(),
                next_token: 0,
            })),
        }
    }

    /// Schedules a message to fire once after a delay
    ///
    /// # Arguments
    ///
    /// * `message` - The message delivered when the alarm fires
    /// * `delay` - How long after `now` the alarm becomes due
    /// * `now` - The current time
    ///
    /// # Returns
    ///
    /// A [`Timeout`] guard; dropping it cancels the alarm.
    pub fn schedule(&self, message: M, delay: Duration, now: Instant) -> Timeout<M> {
        let mut inner = self.inner.borrow_mut();
        let token = inner.next_token;
        inner.next_token += 1;
        inner.entries.push(Entry {
            token,
            deadline: now + delay,
            message,
        });
        Timeout {
            token,
            queue: Rc::downgrade(&self.inner),
        }
    }

    /// Removes and returns all messages due at `now`, earliest first
    ///
    /// # Arguments
    ///
    /// * `now` - The current time
    pub fn poll(&self, now: Instant) -> Vec<M> {
        let mut inner = self.inner.borrow_mut();
        let mut due: Vec<Entry<M>> = Vec::new();
        let mut rest: Vec<Entry<M>> = Vec::new();
        for entry in inner.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        inner.entries = rest;
        due.sort_by_key(|entry| entry.deadline);
        due.into_iter().map(|entry| entry.message).collect()
    }

    /// Returns the number of pending alarms
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Checks whether no alarms are pending
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for a scheduled alarm
///
/// The alarm stays pending only while this guard is alive; both dropping
/// the guard and calling [`Timeout::cancel`] remove the entry. Firing is
/// one-shot: once polled, the guard becomes inert.
pub struct Timeout<M> {
    token: u64,
    queue: Weak<RefCell<Inner<M>>>,
}

impl<M> Timeout<M> {
    /// Cancels the alarm explicitly
    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl<M> Drop for Timeout<M> {
    fn drop(&mut self) {
        if let Some(inner) = self.queue.upgrade() {
            inner.borrow_mut().cancel(self.token);
        }
    }
}
