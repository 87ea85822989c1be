//! Game-state snapshot consumed by the reveal step
//!
//! The snapshot is produced by the backend game-state authority and is
//! read-only to this crate. Beyond the non-null assumption on the correct
//! answer, no validation is performed here; a malformed snapshot is a
//! precondition violation of the upstream service.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay, skip_serializing_none};
use uuid::Uuid;

/// A unique identifier for players in a game session
///
/// Each player gets a unique ID that persists throughout the session.
/// The same ID space is used for the viewer of a mounted step.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random player ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    /// Creates a new random player ID (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Id {
    /// Formats the ID as a UUID string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Id {
    type Err = uuid::Error;

    /// Parses an ID from a UUID string
    ///
    /// # Errors
    ///
    /// Returns a `uuid::Error` if the string is not a valid UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A single answer entry of the current scene
///
/// Exactly one entry of a well-formed snapshot has `correct = true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SceneAnswer {
    /// Stable identifier of the answer entry
    pub id: String,
    /// Display text of the answer
    pub text: String,
    /// Whether this entry is the correct answer
    pub correct: bool,
}

/// A player's submitted answer for the current scene
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// ID of the player who submitted
    pub player_id: Id,
    /// Display name of the player who submitted
    pub player_name: String,
    /// The submitted content, verbatim
    pub content: String,
    /// Whether the submission matched the correct answer
    pub correct: bool,
}

/// A participant of the game session
///
/// The first element of the ordered player list is the turn owner, the
/// only participant allowed to advance the game to the next step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier of the player
    pub id: Id,
    /// Display name of the player
    pub name: String,
}

/// A finalized snapshot of the game state for one scene
///
/// The `question*` and `answer_type` fields are opaque display metadata;
/// the sequencer never interprets them.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    /// The question text of the scene
    pub question: String,
    /// Instruction text displayed above the question
    pub question_description: String,
    /// Opaque rendering hint for the question (e.g. "text", "image")
    pub question_type: String,
    /// Opaque rendering hint for the answers
    pub answer_type: String,
    /// Ordered answer entries of the scene
    pub scene_answers: Vec<SceneAnswer>,
    /// Ordered submissions received so far; may be empty
    pub submissions: Vec<Submission>,
}

impl GameStateSnapshot {
    /// Returns the correct answer entry of the scene
    ///
    /// # Panics
    ///
    /// Panics if no entry is marked correct. A well-formed snapshot always
    /// contains exactly one; this assumption is inherited from the caller.
    pub fn correct_answer(&self) -> &SceneAnswer {
        self.scene_answers
            .iter()
            .find(|answer| answer.correct)
            .expect("well-formed snapshot has a correct answer")
    }

    /// Looks up the submission of a specific player
    ///
    /// # Arguments
    ///
    /// * `player_id` - The ID of the player to look up
    ///
    /// # Returns
    ///
    /// The player's submission if one exists, otherwise `None`
    pub fn submission_for(&self, player_id: Id) -> Option<&Submission> {
        self.submissions
            .iter()
            .find(|submission| submission.player_id == player_id)
    }
}
