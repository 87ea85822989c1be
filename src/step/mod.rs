//! Game step implementations
//!
//! This module contains the game steps the engine can present. Currently
//! only the reveal step (showing the correct answer and other players'
//! submissions after a round ends) and its read-only spectator variant
//! are implemented.

pub mod reveal;
pub mod spectator;
