//! Reveal step implementation
//!
//! The reveal step displays the correct answer after a round ends, flashes
//! a celebratory sprite chosen by whether the viewer answered correctly,
//! and discloses the other players' submissions after a short delay. The
//! module handles timing, disclosure gating, the compact-layout sheet, and
//! the turn-owner-only control for advancing to the next step.

use garde::Validate;
use itertools::Itertools;
use thiserror::Error;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;
use web_time::Duration;

use crate::{
    TruncatedVec, constants,
    game_id::GameId,
    layout::Layout,
    session::Advance,
    snapshot::{GameStateSnapshot, Id, Player},
    sprites::{self, Sprite, Verdict},
};

type ValidationResult = garde::Result;

/// Validates that a step delay falls within the allowed bounds
fn validate_delay(field: &'static str, val: &Duration) -> ValidationResult {
    if (constants::step::MIN_DELAY..=constants::step::MAX_DELAY).contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "{field} is outside of the bounds [{},{}]",
            constants::step::MIN_DELAY,
            constants::step::MAX_DELAY,
        )))
    }
}

/// Identifies one mounted instance of the reveal step
///
/// Alarms carry the mount that scheduled them; an alarm whose mount no
/// longer matches is stale and must not mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountId(Uuid);

impl MountId {
    /// Creates a fresh mount identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MountId {
    /// Creates a fresh mount identifier (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}

/// Timing configuration of the reveal step
///
/// The defaults reproduce the shipped client: the sprite appears half a
/// second after mount and submissions are disclosed after two seconds.
#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StepConfig {
    /// Delay before the celebratory sprite is picked
    #[garde(custom(|v, _| validate_delay("first_reveal_delay", v)))]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    first_reveal_delay: Duration,
    /// Delay before submissions are disclosed
    #[garde(custom(|v, _| validate_delay("disclosure_delay", v)))]
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    disclosure_delay: Duration,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            first_reveal_delay: Duration::from_millis(constants::step::FIRST_REVEAL_DELAY_MS),
            disclosure_delay: Duration::from_millis(constants::step::DISCLOSURE_DELAY_MS),
        }
    }
}

impl StepConfig {
    /// Creates a fresh mounted state from this configuration
    ///
    /// # Arguments
    ///
    /// * `game_id` - The session the step belongs to
    /// * `snapshot` - The finalized game state to reveal
    /// * `players` - Ordered session players; the first is the turn owner
    /// * `viewer` - The player this mount renders for
    ///
    /// # Returns
    ///
    /// A new `State` with nothing revealed and the sheet armed to present
    /// itself once disclosure fires
    pub fn to_state(
        &self,
        game_id: GameId,
        snapshot: GameStateSnapshot,
        players: Vec<Player>,
        viewer: Id,
    ) -> State {
        State {
            config: self.clone(),
            game_id,
            snapshot,
            players,
            viewer,
            mount: MountId::new(),
            animation_pick: None,
            submissions_disclosed: false,
            panel_open: true,
            advance_in_flight: false,
        }
    }
}

/// Alarm messages for the reveal step's timed disclosures
///
/// Both alarms are independent and single-shot. They carry the mount that
/// scheduled them so alarms outliving their mount are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Pick the celebratory sprite for the viewer
    FirstReveal {
        /// Mount that scheduled this alarm
        mount: MountId,
    },
    /// Disclose the submissions panel if enough submissions exist
    Disclosure {
        /// Mount that scheduled this alarm
        mount: MountId,
    },
}

impl AlarmMessage {
    fn mount(self) -> MountId {
        match self {
            Self::FirstReveal { mount } | Self::Disclosure { mount } => mount,
        }
    }
}

/// Errors raised by the advance control
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requester is not the turn owner (or there are no players)
    #[error("only the turn owner may advance the game")]
    NotTurnOwner,
    /// A previous advance request has not settled yet
    #[error("an advance request is already in flight")]
    AdvanceInFlight,
}

/// Runtime state of one mounted reveal step
///
/// Owned exclusively by a single mount; created by [`StepConfig::to_state`]
/// and destroyed on unmount. Re-renders project it through [`State::view`]
/// without mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    /// The configuration this state was created from
    config: StepConfig,

    // Externally supplied, read-only
    /// The session the step belongs to
    game_id: GameId,
    /// The finalized game state being revealed
    snapshot: GameStateSnapshot,
    /// Ordered session players; the first is the turn owner
    players: Vec<Player>,
    /// The player this mount renders for
    viewer: Id,

    // Runtime state
    /// Identity of this mount, matched against incoming alarms
    mount: MountId,
    /// Sprite picked when the first-reveal alarm fired; set at most once
    animation_pick: Option<Sprite>,
    /// Whether submissions have been disclosed; never reverts automatically
    submissions_disclosed: bool,
    /// Whether the compact-layout sheet is open (user-toggleable)
    panel_open: bool,
    /// Whether an advance request is awaiting settlement
    advance_in_flight: bool,
}

impl State {
    /// Starts the step by scheduling its two disclosure alarms
    ///
    /// Call exactly once per mount. Re-renders must not call this again;
    /// alarm handling is idempotent regardless, but rescheduling would
    /// leak extra timers.
    ///
    /// # Arguments
    ///
    /// * `schedule_message` - Function to schedule delayed alarm messages
    ///
    /// # Type Parameters
    ///
    /// * `S` - Function type for scheduling alarm messages
    pub fn play<S: FnMut(crate::AlarmMessage, Duration)>(&self, mut schedule_message: S) {
        schedule_message(
            AlarmMessage::FirstReveal { mount: self.mount }.into(),
            self.config.first_reveal_delay,
        );
        schedule_message(
            AlarmMessage::Disclosure { mount: self.mount }.into(),
            self.config.disclosure_delay,
        );
    }

    /// Handles a fired alarm
    ///
    /// Stale alarms (scheduled by a different mount) and re-delivered
    /// alarms have no effect. The first reveal judges the viewer's
    /// submission and picks a sprite from the matching set; a viewer with
    /// no submission counts as wrong. Disclosure only happens when
    /// strictly more than one submission exists, to avoid revealing a
    /// near-empty list while others are still answering.
    ///
    /// # Arguments
    ///
    /// * `message` - The alarm message to process
    /// * `rng` - Random source for the sprite pick (seedable in tests)
    pub fn receive_alarm(&mut self, message: &crate::AlarmMessage, rng: &mut fastrand::Rng) {
        let crate::AlarmMessage::Reveal(message) = message;

        if message.mount() != self.mount {
            return;
        }

        match message {
            AlarmMessage::FirstReveal { .. } => {
                if self.animation_pick.is_none() {
                    let verdict = Verdict::of(self.snapshot.submission_for(self.viewer));
                    self.animation_pick = Some(sprites::pick(verdict, rng));
                }
            }
            AlarmMessage::Disclosure { .. } => {
                if self.snapshot.submissions.len() > constants::step::DISCLOSURE_THRESHOLD {
                    self.submissions_disclosed = true;
                }
            }
        }
    }

    /// Handles a tap on the answer area (compact layout)
    ///
    /// Opens the sheet immediately, independent of disclosure; the sheet
    /// still only becomes visible once disclosure has happened.
    pub fn tap_answer_area(&mut self) {
        self.panel_open = true;
    }

    /// Handles a tap on the sheet backdrop (compact layout)
    ///
    /// Closes the sheet without clearing disclosure, so reopening shows
    /// the submissions again without waiting.
    pub fn dismiss_panel(&mut self) {
        self.panel_open = false;
    }

    /// Requests advancing the session to the next step
    ///
    /// Only the turn owner may advance, and only while no other advance
    /// request is in flight; the control stays disabled until
    /// [`State::advance_settled`] is called. The outbound call itself is
    /// fire-and-forget and its failures are not handled here.
    ///
    /// # Arguments
    ///
    /// * `advancer` - The session operation seam to issue the call through
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTurnOwner`] if the viewer is not first in the
    /// player list, or [`Error::AdvanceInFlight`] while a previous request
    /// has not settled.
    ///
    /// # Type Parameters
    ///
    /// * `A` - Type implementing the Advance trait
    pub fn request_advance<A: Advance>(&mut self, advancer: &A) -> Result<(), Error> {
        let owner = self.turn_owner().ok_or(Error::NotTurnOwner)?;
        if owner.id != self.viewer {
            return Err(Error::NotTurnOwner);
        }
        if self.advance_in_flight {
            return Err(Error::AdvanceInFlight);
        }

        self.advance_in_flight = true;
        advancer.advance(self.game_id);
        Ok(())
    }

    /// Marks the outstanding advance request as settled
    ///
    /// Re-enables the advance control. Called by the embedding client when
    /// the outbound call resolves, successfully or not.
    pub fn advance_settled(&mut self) {
        self.advance_in_flight = false;
    }

    /// Returns the turn owner, the first player in session order
    pub fn turn_owner(&self) -> Option<&Player> {
        self.players.first()
    }

    /// Returns the sprite picked by the first reveal, if it fired yet
    pub fn animation_pick(&self) -> Option<Sprite> {
        self.animation_pick
    }

    /// Checks whether submissions have been disclosed
    pub fn submissions_disclosed(&self) -> bool {
        self.submissions_disclosed
    }

    /// Checks whether the compact-layout sheet is open
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Projects the current state into a renderable view
    ///
    /// Pure with respect to the state; call on every re-render. On
    /// desktop the submissions panel appears iff disclosed, with no
    /// open/close affordance. On compact it appears iff the sheet is open
    /// and disclosure has happened.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout classification to render for
    pub fn view(&self, layout: Layout) -> StepView {
        let panel_visible = match layout {
            Layout::Desktop => self.submissions_disclosed,
            Layout::Compact => self.panel_open && self.submissions_disclosed,
        };

        StepView {
            instruction: self.snapshot.question_description.clone(),
            question: self.snapshot.question.clone(),
            question_type: self.snapshot.question_type.clone(),
            answer_type: self.snapshot.answer_type.clone(),
            answers: answers_view(&self.snapshot),
            sprite: self.animation_pick,
            submissions: panel_visible.then(|| submissions_view(&self.snapshot)),
            panel_affordance: matches!(layout, Layout::Compact),
            next_button: self.turn_owner().map(|owner| {
                if owner.id == self.viewer {
                    NextButtonView {
                        label: "Next".to_owned(),
                        enabled: !self.advance_in_flight,
                    }
                } else {
                    NextButtonView {
                        label: format!("Waiting for {}", owner.name),
                        enabled: false,
                    }
                }
            }),
        }
    }
}

/// Builds the answer-area view of a snapshot
pub(crate) fn answers_view(snapshot: &GameStateSnapshot) -> Vec<AnswerView> {
    snapshot
        .scene_answers
        .iter()
        .map(|answer| AnswerView {
            id: answer.id.clone(),
            text: answer.text.clone(),
            correct: answer.correct,
        })
        .collect_vec()
}

/// Builds the submissions panel view of a snapshot
pub(crate) fn submissions_view(snapshot: &GameStateSnapshot) -> SubmissionsView {
    SubmissionsView {
        entries: TruncatedVec::new(
            snapshot.submissions.iter().map(|submission| SubmissionView {
                player_name: submission.player_name.clone(),
                content: submission.content.clone(),
                correct: submission.correct,
                stars: submission
                    .correct
                    .then_some(constants::step::STARS_SPRITE),
            }),
            constants::step::SUBMISSIONS_DISPLAY_LIMIT,
            snapshot.submissions.len(),
        ),
    }
}

/// Renderable projection of a mounted reveal step
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    /// Instruction text above the question
    pub instruction: String,
    /// The question text
    pub question: String,
    /// Opaque rendering hint for the question
    pub question_type: String,
    /// Opaque rendering hint for the answers
    pub answer_type: String,
    /// All scene answers with the correct one marked
    pub answers: Vec<AnswerView>,
    /// Celebratory sprite overlay, once picked
    pub sprite: Option<Sprite>,
    /// Submissions panel, present only while visible in this layout
    pub submissions: Option<SubmissionsView>,
    /// Whether tapping the answer area opens the sheet (compact only)
    pub panel_affordance: bool,
    /// The advance control, absent when the session has no players
    pub next_button: Option<NextButtonView>,
}

/// One answer entry of the answer area
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnswerView {
    /// Stable identifier of the answer entry
    pub id: String,
    /// Display text
    pub text: String,
    /// Whether this is the correct answer
    pub correct: bool,
}

/// The submissions panel contents
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionsView {
    /// Submissions shown, truncated with the exact total preserved
    pub entries: TruncatedVec<SubmissionView>,
}

/// One row of the submissions panel
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmissionView {
    /// Name of the submitting player
    pub player_name: String,
    /// The submitted content, verbatim
    pub content: String,
    /// Whether the submission was correct
    pub correct: bool,
    /// Stars sprite shown on correct rows
    pub stars: Option<&'static str>,
}

/// The advance control
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NextButtonView {
    /// Button label: "Next" for the owner, a waiting notice otherwise
    pub label: String,
    /// Whether the button accepts clicks
    pub enabled: bool,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::RefCell;

    use web_time::Instant;

    use super::*;
    use crate::{
        snapshot::{SceneAnswer, Submission},
        sprites::{CORRECT_SET, WRONG_SET},
        timer::TimerQueue,
    };

    fn test_snapshot(submissions: Vec<Submission>) -> GameStateSnapshot {
        GameStateSnapshot {
            question: "What sound does a fox make?".to_owned(),
            question_description: "Guess the answer".to_owned(),
            question_type: "text".to_owned(),
            answer_type: "text".to_owned(),
            scene_answers: vec![
                SceneAnswer {
                    id: "1".to_owned(),
                    text: "Moo".to_owned(),
                    correct: false,
                },
                SceneAnswer {
                    id: "2".to_owned(),
                    text: "Ring-ding-ding".to_owned(),
                    correct: true,
                },
            ],
            submissions,
        }
    }

    fn submission(player: &Player, correct: bool) -> Submission {
        Submission {
            player_id: player.id,
            player_name: player.name.clone(),
            content: if correct { "Ring-ding-ding" } else { "Moo" }.to_owned(),
            correct,
        }
    }

    fn test_players() -> Vec<Player> {
        vec![
            Player {
                id: Id::new(),
                name: "Lina".to_owned(),
            },
            Player {
                id: Id::new(),
                name: "Omar".to_owned(),
            },
            Player {
                id: Id::new(),
                name: "June".to_owned(),
            },
        ]
    }

    fn mounted(submissions: Vec<Submission>, players: Vec<Player>, viewer: Id) -> State {
        StepConfig::default().to_state(GameId::new(), test_snapshot(submissions), players, viewer)
    }

    /// Delivers every alarm the state scheduled, in schedule order.
    fn fire_all(state: &mut State, rng: &mut fastrand::Rng) {
        let scheduled = RefCell::new(Vec::new());
        state.play(|message, duration| scheduled.borrow_mut().push((message, duration)));
        for (message, _) in scheduled.into_inner() {
            state.receive_alarm(&message, rng);
        }
    }

    struct MockAdvance {
        calls: RefCell<Vec<GameId>>,
    }

    impl MockAdvance {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Advance for MockAdvance {
        fn advance(&self, game_id: GameId) {
            self.calls.borrow_mut().push(game_id);
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(StepConfig::default().validate().is_ok());

        let config = StepConfig {
            first_reveal_delay: Duration::from_secs(31),
            disclosure_delay: Duration::from_secs(2),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serializes_delays_as_milliseconds() {
        let json = serde_json::to_string(&StepConfig::default()).unwrap();
        assert!(json.contains("\"first_reveal_delay\":500"));
        assert!(json.contains("\"disclosure_delay\":2000"));
    }

    #[test]
    fn test_play_schedules_both_alarms_with_shipped_delays() {
        let players = test_players();
        let viewer = players[0].id;
        let state = mounted(Vec::new(), players, viewer);

        let mut scheduled = Vec::new();
        state.play(|message, duration| scheduled.push((message, duration)));

        assert_eq!(scheduled.len(), 2);
        assert_eq!(scheduled[0].1, Duration::from_millis(500));
        assert_eq!(scheduled[1].1, Duration::from_millis(2000));
        assert!(matches!(
            scheduled[0].0,
            crate::AlarmMessage::Reveal(AlarmMessage::FirstReveal { .. })
        ));
        assert!(matches!(
            scheduled[1].0,
            crate::AlarmMessage::Reveal(AlarmMessage::Disclosure { .. })
        ));
    }

    #[test]
    fn test_correct_viewer_gets_a_correct_sprite() {
        let players = test_players();
        let viewer = players[1].id;
        let submissions = vec![
            submission(&players[0], false),
            submission(&players[1], true),
            submission(&players[2], false),
        ];
        let mut state = mounted(submissions, players, viewer);

        let mut rng = fastrand::Rng::with_seed(5);
        fire_all(&mut state, &mut rng);

        assert!(CORRECT_SET.contains(&state.animation_pick().unwrap()));
        // 3 submissions > 1, so disclosure also fired.
        assert!(state.submissions_disclosed());
    }

    #[test]
    fn test_wrong_viewer_gets_a_wrong_sprite() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], false), submission(&players[1], true)];
        let mut state = mounted(submissions, players, viewer);

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        assert!(WRONG_SET.contains(&state.animation_pick().unwrap()));
    }

    #[test]
    fn test_missing_submission_counts_as_wrong() {
        let players = test_players();
        let viewer = players[2].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], true)];
        let mut state = mounted(submissions, players, viewer);

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        assert!(WRONG_SET.contains(&state.animation_pick().unwrap()));
    }

    #[test]
    fn test_sprite_pick_is_stable_under_redelivery() {
        let players = test_players();
        let viewer = players[0].id;
        let mut state = mounted(vec![submission(&players[0], true)], players, viewer);

        let message = crate::AlarmMessage::Reveal(AlarmMessage::FirstReveal { mount: state.mount });
        let mut rng = fastrand::Rng::with_seed(0);
        state.receive_alarm(&message, &mut rng);
        let first = state.animation_pick().unwrap();

        for _ in 0..10 {
            state.receive_alarm(&message, &mut rng);
            assert_eq!(state.animation_pick(), Some(first));
        }
    }

    #[test]
    fn test_single_submission_stays_undisclosed() {
        let players = test_players();
        let viewer = players[0].id;
        let mut state = mounted(vec![submission(&players[0], true)], players, viewer);

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        assert!(!state.submissions_disclosed());

        // Re-delivery changes nothing.
        let message = crate::AlarmMessage::Reveal(AlarmMessage::Disclosure { mount: state.mount });
        state.receive_alarm(&message, &mut fastrand::Rng::with_seed(5));
        assert!(!state.submissions_disclosed());
    }

    #[test]
    fn test_empty_submissions_stay_undisclosed() {
        let players = test_players();
        let viewer = players[0].id;
        let mut state = mounted(Vec::new(), players, viewer);

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        assert!(!state.submissions_disclosed());
        assert!(WRONG_SET.contains(&state.animation_pick().unwrap()));
    }

    #[test]
    fn test_stale_mount_alarm_is_ignored() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], false)];
        let mut state = mounted(submissions, players, viewer);

        let stale = MountId::new();
        let mut rng = fastrand::Rng::with_seed(5);
        state.receive_alarm(
            &crate::AlarmMessage::Reveal(AlarmMessage::FirstReveal { mount: stale }),
            &mut rng,
        );
        state.receive_alarm(
            &crate::AlarmMessage::Reveal(AlarmMessage::Disclosure { mount: stale }),
            &mut rng,
        );

        assert_eq!(state.animation_pick(), None);
        assert!(!state.submissions_disclosed());
    }

    #[test]
    fn test_unmount_cancels_pending_alarms() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], false)];
        let state = mounted(submissions, players, viewer);

        let queue: TimerQueue<crate::AlarmMessage> = TimerQueue::new();
        let start = Instant::now();
        let mut guards = Vec::new();
        state.play(|message, duration| guards.push(queue.schedule(message, duration, start)));

        // Unmount before either delay elapses.
        drop(guards);

        assert!(queue.poll(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_desktop_panel_tracks_disclosure_only() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], false)];
        let mut state = mounted(submissions, players, viewer);

        let view = state.view(Layout::Desktop);
        assert!(view.submissions.is_none());
        assert!(!view.panel_affordance);

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        let view = state.view(Layout::Desktop);
        assert!(view.submissions.is_some());
        assert!(!view.panel_affordance);

        // Dismissal only affects the compact sheet.
        state.dismiss_panel();
        assert!(state.view(Layout::Desktop).submissions.is_some());
    }

    #[test]
    fn test_compact_panel_needs_both_open_and_disclosed() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], false)];
        let mut state = mounted(submissions, players, viewer);

        // Open but not yet disclosed: not visible.
        state.tap_answer_area();
        assert!(state.panel_open());
        assert!(state.view(Layout::Compact).submissions.is_none());

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));
        assert!(state.view(Layout::Compact).submissions.is_some());

        // Backdrop tap hides the sheet without clearing disclosure.
        state.dismiss_panel();
        assert!(state.view(Layout::Compact).submissions.is_none());
        assert!(state.submissions_disclosed());

        state.tap_answer_area();
        assert!(state.view(Layout::Compact).submissions.is_some());
    }

    #[test]
    fn test_compact_view_offers_the_affordance() {
        let players = test_players();
        let viewer = players[0].id;
        let state = mounted(Vec::new(), players, viewer);

        assert!(state.view(Layout::Compact).panel_affordance);
    }

    #[test]
    fn test_turn_owner_advances_once() {
        let players = test_players();
        let owner = players[0].id;
        let mut state = mounted(Vec::new(), players, owner);
        let advancer = MockAdvance::new();

        assert!(state.request_advance(&advancer).is_ok());
        assert_eq!(advancer.calls.borrow().len(), 1);

        // Second request while in flight is rejected and issues no call.
        assert_eq!(
            state.request_advance(&advancer),
            Err(Error::AdvanceInFlight)
        );
        assert_eq!(advancer.calls.borrow().len(), 1);

        state.advance_settled();
        assert!(state.request_advance(&advancer).is_ok());
        assert_eq!(advancer.calls.borrow().len(), 2);
    }

    #[test]
    fn test_non_owner_cannot_advance() {
        let players = test_players();
        let viewer = players[1].id;
        let mut state = mounted(Vec::new(), players, viewer);
        let advancer = MockAdvance::new();

        assert_eq!(state.request_advance(&advancer), Err(Error::NotTurnOwner));
        assert!(advancer.calls.borrow().is_empty());
    }

    #[test]
    fn test_no_players_no_advance_and_no_button() {
        let mut state = mounted(Vec::new(), Vec::new(), Id::new());
        let advancer = MockAdvance::new();

        assert_eq!(state.request_advance(&advancer), Err(Error::NotTurnOwner));
        assert!(state.view(Layout::Desktop).next_button.is_none());
    }

    #[test]
    fn test_next_button_states() {
        let players = test_players();
        let owner = players[0].id;
        let other = players[1].id;

        let mut state = mounted(Vec::new(), players.clone(), owner);
        let button = state.view(Layout::Desktop).next_button.unwrap();
        assert_eq!(button.label, "Next");
        assert!(button.enabled);

        state.request_advance(&MockAdvance::new()).unwrap();
        let button = state.view(Layout::Desktop).next_button.unwrap();
        assert!(!button.enabled);

        let state = mounted(Vec::new(), players, other);
        let button = state.view(Layout::Desktop).next_button.unwrap();
        assert_eq!(button.label, "Waiting for Lina");
        assert!(!button.enabled);
    }

    #[test]
    fn test_submissions_view_marks_correct_rows() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], false)];
        let mut state = mounted(submissions, players, viewer);

        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        let view = state.view(Layout::Desktop).submissions.unwrap();
        let entries = view.entries.items().to_vec();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].stars, Some("blinkingStars2"));
        assert_eq!(entries[1].stars, None);
        assert_eq!(view.entries.exact_count(), 2);
    }

    #[test]
    fn test_view_carries_answers_and_sprite() {
        let players = test_players();
        let viewer = players[0].id;
        let submissions = vec![submission(&players[0], true), submission(&players[1], false)];
        let mut state = mounted(submissions, players, viewer);

        assert_eq!(state.view(Layout::Desktop).sprite, None);
        fire_all(&mut state, &mut fastrand::Rng::with_seed(5));

        let view = state.view(Layout::Desktop);
        assert!(view.sprite.is_some());
        assert_eq!(view.answers.len(), 2);
        assert!(view.answers.iter().filter(|a| a.correct).count() == 1);
        assert_eq!(view.question, "What sound does a fox make?");
    }
}
