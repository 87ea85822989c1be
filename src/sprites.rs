//! Celebratory sprite selection
//!
//! After a round ends, the reveal step flashes an animation sprite chosen
//! by whether the viewer answered correctly. The sprite identifiers must
//! match the client's asset catalog byte for byte, so they serialize in
//! their catalog spelling.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::snapshot::Submission;

/// An animation sprite from the client asset catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sprite {
    /// Two wine glasses clinking together
    WineGlassClinking,
    /// A green check mark
    CheckMark,
    /// A thumbs-up speech bubble
    BubbleLike,
    /// A red cross mark
    CrossMark,
    /// A crying emoji speech bubble
    BubbleCryEmoji,
}

impl Sprite {
    /// Returns the asset catalog identifier of the sprite
    pub fn name(self) -> &'static str {
        match self {
            Self::WineGlassClinking => "wineGlassClinking",
            Self::CheckMark => "checkMark",
            Self::BubbleLike => "bubbleLike",
            Self::CrossMark => "crossMark",
            Self::BubbleCryEmoji => "bubbleCryEmoji",
        }
    }
}

/// Whether the viewer's submission was judged correct
///
/// A missing submission counts as wrong; the backend only records
/// submissions that were actually made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
pub enum Verdict {
    /// The viewer submitted the correct answer
    Correct,
    /// The viewer submitted a wrong answer or did not submit
    Wrong,
}

impl Verdict {
    /// Judges a submission lookup result
    ///
    /// # Arguments
    ///
    /// * `submission` - The viewer's submission, if any was found
    pub fn of(submission: Option<&Submission>) -> Self {
        if submission.is_some_and(|s| s.correct) {
            Self::Correct
        } else {
            Self::Wrong
        }
    }
}

/// Sprites celebrating a correct answer
pub const CORRECT_SET: &[Sprite] = &[
    Sprite::WineGlassClinking,
    Sprite::CheckMark,
    Sprite::BubbleLike,
];

/// Sprites commiserating a wrong or missing answer
pub const WRONG_SET: &[Sprite] = &[Sprite::CrossMark, Sprite::BubbleCryEmoji];

/// Returns the sprite sets keyed by verdict
pub fn sets() -> EnumMap<Verdict, &'static [Sprite]> {
    enum_map! {
        Verdict::Correct => CORRECT_SET,
        Verdict::Wrong => WRONG_SET,
    }
}

/// Picks one sprite uniformly at random from the verdict's set
///
/// The random source is injected so callers can seed it for
/// reproducible behavior.
///
/// # Arguments
///
/// * `verdict` - Which set to pick from
/// * `rng` - The random source to pick with
pub fn pick(verdict: Verdict, rng: &mut fastrand::Rng) -> Sprite {
    let set = sets()[verdict];
    set[rng.usize(..set.len())]
}
