use alloc::string::String;
use thiserror::Error;

/// Why a raw input could not be turned into a [`crate::Guess`].
///
/// The `Display` text is the advisory shown to the player.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a number")]
    Empty,
    #[error("Please enter a number between 1 and 100")]
    NotANumber,
    #[error("Please enter a number between 1 and 100")]
    OutOfRange,
}

/// A request that never produced a usable reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not decode reply: {0}")]
    Decode(String),
}

/// The four backend operations, used to pick the message shown on failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Status,
    Guess,
    Hint,
    Restart,
}

impl Operation {
    /// Text shown when the operation fails without a server message.
    pub const fn failure_text(self) -> &'static str {
        use Operation::*;
        match self {
            Status => "Error connecting to server",
            Guess => "Error submitting guess",
            Hint => "Error getting hint",
            Restart => "Error restarting game",
        }
    }
}

pub type Result<T> = core::result::Result<T, RequestError>;
