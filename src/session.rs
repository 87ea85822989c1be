//! Outbound session operations
//!
//! This module defines the trait seam between the reveal step and the
//! game-session service that owns the authoritative game state. The step
//! only ever issues one operation through it: advancing to the next step.
//! Implementations might call a remote procedure endpoint, post a message
//! to a worker, or record calls in tests.

use crate::game_id::GameId;

/// Trait for issuing the "advance to next step" operation
///
/// The call is fire-and-forget from the step's perspective: failures are
/// handled by the implementation's own error path, and the step merely
/// keeps its control disabled until told the call settled.
pub trait Advance {
    /// Requests advancing the session to its next step
    ///
    /// # Arguments
    ///
    /// * `game_id` - The session to advance
    fn advance(&self, game_id: GameId);
}
