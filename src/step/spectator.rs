//! Read-only spectator variant of the reveal step
//!
//! Spectators are viewers who are not active participants. Their view is
//! a pure projection of the snapshot: submissions are disclosed
//! unconditionally, no timers run, no sprite is picked, and no advance
//! control is rendered since no turn-owner concept applies.

use crate::{
    snapshot::GameStateSnapshot,
    step::reveal::{StepView, answers_view, submissions_view},
};

/// Projects a snapshot into the spectator view
///
/// Stateless and side-effect free; call on every re-render.
///
/// # Arguments
///
/// * `snapshot` - The finalized game state to display
pub fn spectate(snapshot: &GameStateSnapshot) -> StepView {
    StepView {
        instruction: snapshot.question_description.clone(),
        question: snapshot.question.clone(),
        question_type: snapshot.question_type.clone(),
        answer_type: snapshot.answer_type.clone(),
        answers: answers_view(snapshot),
        sprite: None,
        submissions: Some(submissions_view(snapshot)),
        panel_affordance: false,
        next_button: None,
    }
}
