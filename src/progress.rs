//! Route-transition progress indicator
//!
//! An injected service with an explicit lifecycle rather than a
//! module-scope singleton: the application shell constructs one
//! [`ProgressBar`], feeds it routing-transition events, and tears it down
//! when the shell unmounts. Transitions may overlap, so activity is depth
//! counted and the bar reports busy until every started transition has
//! finished.

use serde::{Deserialize, Serialize};

/// Routing-transition events forwarded by the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteEvent {
    /// A route change started
    ChangeStart,
    /// A route change failed
    ChangeError,
    /// A route change completed
    ChangeComplete,
}

/// Depth-counted progress indicator for route transitions
#[derive(Debug, Default)]
pub struct ProgressBar {
    depth: u32,
}

impl ProgressBar {
    /// Creates an idle progress bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a transition
    pub fn start(&mut self) {
        self.depth += 1;
    }

    /// Marks the end of a transition (completed or failed)
    ///
    /// Unbalanced finishes are ignored rather than underflowing.
    pub fn finish(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Routes a transition event to `start` or `finish`
    ///
    /// # Arguments
    ///
    /// * `event` - The routing-transition event to apply
    pub fn handle(&mut self, event: RouteEvent) {
        match event {
            RouteEvent::ChangeStart => self.start(),
            RouteEvent::ChangeError | RouteEvent::ChangeComplete => self.finish(),
        }
    }

    /// Checks whether any transition is still in flight
    pub fn is_busy(&self) -> bool {
        self.depth > 0
    }

    /// Tears the service down, forcing the bar idle
    pub fn shutdown(&mut self) {
        self.depth = 0;
    }
}
