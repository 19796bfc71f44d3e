use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything the page knows about the current game.
///
/// Lives for one page load. Status and range are only ever copied from the
/// server, never derived locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    phase: Phase,
    status: Option<GameStatus>,
    history: Vec<GuessRecord>,
    message: Option<Message>,
    input: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.status
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Guess input and button are usable unless the game is known to be over.
    ///
    /// In [`Phase::Error`] the phase is frozen, so a finished game can only be
    /// seen in the mirrored status.
    pub fn controls_enabled(&self) -> bool {
        match self.phase {
            Phase::GameOver => false,
            Phase::Error => !self.status.is_some_and(|status| status.game_over),
            Phase::Loading | Phase::Playing => true,
        }
    }

    /// Moves to `phase`. [`Phase::Error`] is never left.
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase == Phase::Error {
            log::trace!("staying in error phase, not moving to {:?}", phase);
            return;
        }
        if self.phase != phase {
            log::debug!("phase: {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Overwrites the mirrored status and moves to the phase it implies.
    pub(crate) fn apply_status(&mut self, status: GameStatus) {
        self.status = Some(status);
        self.set_phase(Phase::from_game_over(status.game_over));
    }

    pub(crate) fn show(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub(crate) fn record_guess(&mut self, record: GuessRecord) {
        self.history.push(record);
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
    }
}
