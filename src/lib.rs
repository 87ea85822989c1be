//! # Playroom Reveal Engine
//!
//! This library implements the client-side behavioral core of the reveal
//! step of a multiplayer party game: the timer-driven sequencer that
//! decides when to flash a celebratory sprite and when to disclose other
//! players' submissions, the responsive layout classifier that picks
//! between the desktop panel and the compact slide-up sheet, and the
//! read-only spectator projection. Data fetching, rendering, and the
//! backend game-state authority live outside this crate.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
use derive_where::derive_where;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub mod constants;

pub mod game_id;
pub mod layout;
pub mod progress;
pub mod session;
pub mod snapshot;
pub mod sprites;
pub mod step;
pub mod theme;
pub mod timer;

/// Alarm messages for timed events in game steps
///
/// These messages are scheduled with a delay when a step mounts and
/// delivered back to it by the embedding event loop when due.
#[derive(Debug, Clone, derive_more::From, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Reveal step alarms
    Reveal(step::reveal::AlarmMessage),
}

impl AlarmMessage {
    /// Converts the alarm message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// A truncated vector that maintains the exact count while limiting displayed items
///
/// Used by the submissions panel to cap how many rows are rendered while
/// still reporting how many submissions exist in total.
#[derive(Debug, Clone, Serialize)]
#[derive_where(Default)]
pub struct TruncatedVec<T> {
    /// The exact total count of items
    exact_count: usize,
    /// The truncated list of items (up to the limit)
    items: Vec<T>,
}

impl<T: Clone> TruncatedVec<T> {
    /// Creates a new truncated vector from an iterator
    ///
    /// # Arguments
    ///
    /// * `list` - An iterator over items to include
    /// * `limit` - Maximum number of items to keep
    /// * `exact_count` - The exact total count (may be larger than `limit`)
    pub fn new<I: Iterator<Item = T>>(list: I, limit: usize, exact_count: usize) -> Self {
        let items = list.take(limit).collect_vec();
        Self { exact_count, items }
    }

    /// Maps a function over the kept items, preserving the exact count
    pub fn map<F, U>(self, f: F) -> TruncatedVec<U>
    where
        F: Fn(T) -> U,
    {
        TruncatedVec {
            exact_count: self.exact_count,
            items: self.items.into_iter().map(f).collect_vec(),
        }
    }

    /// Returns the exact count of items
    pub fn exact_count(&self) -> usize {
        self.exact_count
    }

    /// Returns the kept items
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Checks whether items beyond the kept ones exist
    pub fn is_truncated(&self) -> bool {
        self.exact_count > self.items.len()
    }
}
