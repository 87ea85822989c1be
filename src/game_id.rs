//! Game session identifiers
//!
//! A game session is addressed by a short four-letter code that players
//! can read out loud or type from another device. The "advance to next
//! step" call is parameterized by this code; the crate itself treats it
//! as opaque beyond generation and parsing.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of letters in a game code
const CODE_LENGTH: usize = 4;
/// Number of distinct game codes
const POOL: u32 = 26u32.pow(CODE_LENGTH as u32);

/// A unique identifier for a game session
///
/// Displayed as four uppercase ASCII letters (AAAA through ZZZZ) so it is
/// easy to communicate verbally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(u32);

impl GameId {
    /// Creates a new random game ID
    pub fn new() -> Self {
        Self(fastrand::u32(..POOL))
    }
}

impl Default for GameId {
    /// Creates a new random game ID (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GameId {
    /// Formats the game ID as four uppercase letters
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut letters = [0u8; CODE_LENGTH];
        let mut rest = self.0;
        for slot in letters.iter_mut().rev() {
            *slot = b'A' + (rest % 26) as u8;
            rest /= 26;
        }
        // Only ASCII letters are ever produced.
        f.write_str(std::str::from_utf8(&letters).expect("code is ASCII"))
    }
}

/// Errors raised when parsing a game code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGameIdError {
    /// The code was not exactly four characters
    #[error("game code must be {CODE_LENGTH} letters")]
    WrongLength,
    /// The code contained a character outside A-Z
    #[error("game code may only contain letters")]
    InvalidCharacter,
}

impl FromStr for GameId {
    type Err = ParseGameIdError;

    /// Parses a game ID from its four-letter code, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns [`ParseGameIdError`] if the string is not four ASCII letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != CODE_LENGTH {
            return Err(ParseGameIdError::WrongLength);
        }
        let mut value = 0u32;
        for c in s.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(ParseGameIdError::InvalidCharacter);
            }
            value = value * 26 + u32::from(c.to_ascii_uppercase() as u8 - b'A');
        }
        Ok(Self(value))
    }
}

impl Serialize for GameId {
    /// Serializes the game ID as its four-letter code
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GameId {
    /// Deserializes a game ID from its four-letter code
    fn deserialize<D>(deserializer: D) -> Result<GameId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GameId::from_str(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_four_letters() {
        for _ in 0..100 {
            let code = GameId::new().to_string();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_display_boundaries() {
        assert_eq!(GameId(0).to_string(), "AAAA");
        assert_eq!(GameId(POOL - 1).to_string(), "ZZZZ");
        assert_eq!(GameId(1).to_string(), "AAAB");
    }

    #[test]
    fn test_from_str_round_trip() {
        for value in [0, 1, 26, 12345, POOL - 1] {
            let id = GameId(value);
            assert_eq!(id.to_string().parse::<GameId>().unwrap(), id);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("frog".parse::<GameId>(), "FROG".parse::<GameId>());
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(
            "TOOLONG".parse::<GameId>(),
            Err(ParseGameIdError::WrongLength)
        );
        assert_eq!("".parse::<GameId>(), Err(ParseGameIdError::WrongLength));
        assert_eq!(
            "AB1D".parse::<GameId>(),
            Err(ParseGameIdError::InvalidCharacter)
        );
    }

    #[test]
    fn test_serialization() {
        let id: GameId = "WOLF".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"WOLF\"");

        let back: GameId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialization_rejects_bad_code() {
        let result: Result<GameId, _> = serde_json::from_str("\"12\"");
        assert!(result.is_err());
    }
}
