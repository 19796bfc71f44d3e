//! Wire types for the guessing game backend.
//!
//! Every reply carries `success`; the remaining fields are only present when
//! the server has something to say, so they are all optional here and the
//! controller decides what a missing field means.

use serde::{Deserialize, Serialize};

/// Base URL used when none is given on the command line.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Status,
    Guess,
    Hint,
    Restart,
}

impl Endpoint {
    pub const fn method(self) -> Method {
        use Endpoint::*;
        match self {
            Status | Hint => Method::Get,
            Guess | Restart => Method::Post,
        }
    }

    pub const fn path(self) -> &'static str {
        use Endpoint::*;
        match self {
            Status => "/game/status",
            Guess => "/game/guess",
            Hint => "/game/hint",
            Restart => "/game/restart",
        }
    }

    /// Joins `base` and the endpoint path, tolerating a trailing slash on `base`.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Server-authoritative snapshot of the current game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub guesses: u32,
    pub min_range: i32,
    pub max_range: i32,
    pub game_over: bool,
}

/// The status fields shared by the status, guess and restart replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFields {
    #[serde(default)]
    pub guesses: Option<u32>,
    #[serde(default)]
    pub min_range: Option<i32>,
    #[serde(default)]
    pub max_range: Option<i32>,
    #[serde(default)]
    pub game_over: Option<bool>,
}

impl StatusFields {
    /// Returns the snapshot only when every field was sent.
    pub fn snapshot(&self) -> Option<GameStatus> {
        Some(GameStatus {
            guesses: self.guesses?,
            min_range: self.min_range?,
            max_range: self.max_range?,
            game_over: self.game_over?,
        })
    }
}

impl From<GameStatus> for StatusFields {
    fn from(status: GameStatus) -> Self {
        Self {
            guesses: Some(status.guesses),
            min_range: Some(status.min_range),
            max_range: Some(status.max_range),
            game_over: Some(status.game_over),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub status: StatusFields,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(flatten)]
    pub status: StatusFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub status: StatusFields,
}
