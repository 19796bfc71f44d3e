use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::InputError;

/// A guess the player is allowed to submit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Guess(i32);

impl Guess {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 100;

    pub const fn new(value: i32) -> Result<Self, InputError> {
        if value < Self::MIN || value > Self::MAX {
            Err(InputError::OutOfRange)
        } else {
            Ok(Self(value))
        }
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Classification the server attached to a guess.
///
/// The vocabulary belongs to the backend ("low", "high", "correct" in
/// practice), so it is carried through untouched and only used for display
/// and styling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintTag(String);

impl HintTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HintTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub value: Guess,
    pub hint: HintTag,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Error,
    Correct,
    /// Styled after the server's hint for the guess that produced it.
    Hint(HintTag),
}

impl MessageKind {
    pub fn class(&self) -> &str {
        use MessageKind::*;
        match self {
            Info => "info",
            Error => "error",
            Correct => "correct",
            Hint(tag) => tag.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Loading,
    Playing,
    GameOver,
    /// The initial status fetch failed; only a reload gets out of here.
    Error,
}

impl Phase {
    pub const fn from_game_over(game_over: bool) -> Self {
        if game_over {
            Self::GameOver
        } else {
            Self::Playing
        }
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_bounds_are_inclusive() {
        assert_eq!(Guess::new(1).map(Guess::value), Ok(1));
        assert_eq!(Guess::new(100).map(Guess::value), Ok(100));
        assert_eq!(Guess::new(0), Err(InputError::OutOfRange));
        assert_eq!(Guess::new(101), Err(InputError::OutOfRange));
    }

    #[test]
    fn hint_messages_use_the_server_tag_as_class() {
        assert_eq!(MessageKind::Hint(HintTag::new("high")).class(), "high");
        assert_eq!(MessageKind::Correct.class(), "correct");
    }
}
