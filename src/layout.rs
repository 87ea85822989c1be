//! Responsive layout classification
//!
//! The reveal step renders the same data through one of two interaction
//! patterns picked by viewport width: an always-visible submissions panel
//! on desktop, a dismissible slide-up sheet on compact screens. The
//! classifier is recomputed on every resize with a trailing debounce so a
//! continuous drag does not thrash the layout.

use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use crate::constants;

/// The two presentation patterns of the reveal step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Wide viewport; the submissions panel is always visible once disclosed
    Desktop,
    /// Narrow viewport; submissions live in a dismissible slide-up sheet
    Compact,
}

impl Layout {
    /// Classifies a viewport width in logical pixels
    pub fn classify(width: u32) -> Self {
        if width >= constants::layout::DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else {
            Self::Compact
        }
    }
}

/// Pending classification awaiting the end of its debounce window
#[derive(Debug, Clone, Copy)]
struct Pending {
    layout: Layout,
    deadline: Instant,
}

/// Live viewport-width classifier with a trailing debounce
///
/// The initial value is computed synchronously from the viewport at
/// construction; it is never assumed compact. Resize events re-arm the
/// debounce window, and `poll` applies the latest classification once the
/// window has been quiet long enough.
#[derive(Debug)]
pub struct LayoutSelector {
    applied: Layout,
    pending: Option<Pending>,
    window: Duration,
}

impl LayoutSelector {
    /// Creates a selector classified synchronously from the current width
    ///
    /// # Arguments
    ///
    /// * `width` - The current viewport width in logical pixels
    pub fn new(width: u32) -> Self {
        Self {
            applied: Layout::classify(width),
            pending: None,
            window: Duration::from_millis(constants::layout::RESIZE_DEBOUNCE_MS),
        }
    }

    /// Records a resize event, re-arming the debounce window
    ///
    /// # Arguments
    ///
    /// * `width` - The new viewport width in logical pixels
    /// * `now` - The current time
    pub fn resize(&mut self, width: u32, now: Instant) {
        self.pending = Some(Pending {
            layout: Layout::classify(width),
            deadline: now + self.window,
        });
    }

    /// Applies a pending classification whose debounce window has elapsed
    ///
    /// # Arguments
    ///
    /// * `now` - The current time
    ///
    /// # Returns
    ///
    /// The newly applied layout if it changed, otherwise `None`
    pub fn poll(&mut self, now: Instant) -> Option<Layout> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        if pending.layout == self.applied {
            return None;
        }
        self.applied = pending.layout;
        Some(self.applied)
    }

    /// Returns the currently applied layout
    ///
    /// Pending classifications whose window has not elapsed are not
    /// reflected here.
    pub fn current(&self) -> Layout {
        self.applied
    }
}
