use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use guessing_protocol::{Endpoint, GuessReply, HintReply, RestartReply, StatusReply};

use crate::*;

/// A backend call the host has to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Status,
    Guess(Guess),
    Hint,
    Restart,
}

impl ApiCall {
    pub const fn endpoint(self) -> Endpoint {
        match self {
            ApiCall::Status => Endpoint::Status,
            ApiCall::Guess(_) => Endpoint::Guess,
            ApiCall::Hint => Endpoint::Hint,
            ApiCall::Restart => Endpoint::Restart,
        }
    }

    pub const fn operation(self) -> Operation {
        match self {
            ApiCall::Status => Operation::Status,
            ApiCall::Guess(_) => Operation::Guess,
            ApiCall::Hint => Operation::Hint,
            ApiCall::Restart => Operation::Restart,
        }
    }
}

/// The outcome of an [`ApiCall`], fed back through [`Controller::receive`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Status(Result<StatusReply>),
    Guess {
        guess: Guess,
        reply: Result<GuessReply>,
    },
    Hint(Result<HintReply>),
    Restart(Result<RestartReply>),
}

/// Side effects the host carries out after each controller step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Call(ApiCall),
    /// Call [`Controller::celebrate`] with `guesses` once `after_ms` elapsed.
    Celebrate { after_ms: u32, guesses: u32 },
    FocusInput,
    ScrollHistory,
}

/// Keeps the [`Session`] in sync with the server.
///
/// Every step returns the effects to run. Calls are never de-duplicated or
/// cancelled: replies are applied in whatever order they arrive.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    session: Session,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Looks `(control, trigger)` up in [`BINDINGS`] and performs the action.
    pub fn dispatch(&mut self, control: Control, trigger: Trigger) -> Vec<Effect> {
        match action_for(control, trigger) {
            Some(action) => self.perform(action),
            None => {
                log::trace!("no binding for {:?} {:?}", control, trigger);
                Vec::new()
            }
        }
    }

    pub fn perform(&mut self, action: Action) -> Vec<Effect> {
        if self.session.phase() == Phase::Error && action != Action::Initialize {
            log::debug!("ignoring {:?}, no connection to the server", action);
            return Vec::new();
        }

        log::debug!("action: {:?}", action);
        match action {
            Action::Initialize => self.initialize(),
            Action::SubmitGuess => self.submit_guess(),
            Action::RequestHint => self.request_hint(),
            Action::Restart => self.restart(),
        }
    }

    pub fn initialize(&mut self) -> Vec<Effect> {
        vec![Effect::Call(ApiCall::Status)]
    }

    /// Validates the current input and asks the server to judge it.
    pub fn submit_guess(&mut self) -> Vec<Effect> {
        match parse_guess(self.session.input()) {
            Ok(guess) => vec![Effect::Call(ApiCall::Guess(guess))],
            Err(err) => {
                log::debug!("rejected input {:?}: {:?}", self.session.input(), err);
                self.session.show(Message::info(err.to_string()));
                Vec::new()
            }
        }
    }

    pub fn request_hint(&mut self) -> Vec<Effect> {
        vec![Effect::Call(ApiCall::Hint)]
    }

    pub fn restart(&mut self) -> Vec<Effect> {
        vec![Effect::Call(ApiCall::Restart)]
    }

    pub fn set_input(&mut self, input: String) {
        self.session.set_input(input);
    }

    pub fn celebrate(&mut self, guesses: u32) {
        self.session
            .show(Message::new(celebration_text(guesses), MessageKind::Correct));
    }

    pub fn receive(&mut self, reply: Reply) -> Vec<Effect> {
        log::debug!("reply: {:?}", reply);
        match reply {
            Reply::Status(reply) => self.on_status(reply),
            Reply::Guess { guess, reply } => self.on_guess(guess, reply),
            Reply::Hint(reply) => self.on_hint(reply),
            Reply::Restart(reply) => self.on_restart(reply),
        }
    }

    fn on_status(&mut self, reply: Result<StatusReply>) -> Vec<Effect> {
        match reply {
            Ok(StatusReply {
                success: true,
                status,
                ..
            }) => match status.snapshot() {
                Some(status) => self.session.apply_status(status),
                None => {
                    log::warn!("status reply is missing fields: {:?}", status);
                    self.fail(Operation::Status, None);
                    self.session.set_phase(Phase::Error);
                }
            },
            // the server answered, so the page stays usable
            Ok(StatusReply { message, .. }) => self.fail(Operation::Status, message),
            Err(err) => {
                log::warn!("status request failed: {}", err);
                self.fail(Operation::Status, None);
                self.session.set_phase(Phase::Error);
            }
        }
        Vec::new()
    }

    fn on_guess(&mut self, guess: Guess, reply: Result<GuessReply>) -> Vec<Effect> {
        let reply = match reply {
            Ok(reply) if reply.success => reply,
            Ok(reply) => {
                self.fail(Operation::Guess, reply.message);
                return Vec::new();
            }
            Err(err) => {
                log::warn!("guess request failed: {}", err);
                self.fail(Operation::Guess, None);
                return Vec::new();
            }
        };

        let was_over = self.session.is_over();
        let hint = HintTag::new(reply.hint.unwrap_or_default());

        self.session.record_guess(GuessRecord {
            value: guess,
            hint: hint.clone(),
        });
        self.session.show(Message::new(
            reply.message.unwrap_or_default(),
            MessageKind::Hint(hint),
        ));
        self.session.clear_input();

        let mut effects = vec![Effect::FocusInput, Effect::ScrollHistory];
        match reply.status.snapshot() {
            Some(status) => {
                self.session.apply_status(status);
                if status.game_over && !was_over {
                    log::info!("game won after {} guesses", status.guesses);
                    effects.push(Effect::Celebrate {
                        after_ms: CELEBRATION_DELAY_MS,
                        guesses: status.guesses,
                    });
                }
            }
            None => log::warn!("guess reply is missing status fields"),
        }
        effects
    }

    fn on_hint(&mut self, reply: Result<HintReply>) -> Vec<Effect> {
        match reply {
            Ok(reply) => self
                .session
                .show(Message::info(reply.message.unwrap_or_default())),
            Err(err) => {
                log::warn!("hint request failed: {}", err);
                self.fail(Operation::Hint, None);
            }
        }
        Vec::new()
    }

    fn on_restart(&mut self, reply: Result<RestartReply>) -> Vec<Effect> {
        let reply = match reply {
            Ok(reply) if reply.success => reply,
            Ok(reply) => {
                self.fail(Operation::Restart, reply.message);
                return Vec::new();
            }
            Err(err) => {
                // the previous game stays on screen, possibly finished
                log::warn!("restart request failed, keeping current game: {}", err);
                self.fail(Operation::Restart, None);
                return Vec::new();
            }
        };

        self.session.clear_history();
        self.session
            .show(Message::info(reply.message.unwrap_or_default()));
        match reply.status.snapshot() {
            Some(status) => self.session.apply_status(status),
            None => log::warn!("restart reply is missing status fields"),
        }
        self.session.set_phase(Phase::Playing);

        vec![Effect::FocusInput]
    }

    fn fail(&mut self, operation: Operation, server_message: Option<String>) {
        let text = server_message.unwrap_or_else(|| operation.failure_text().into());
        self.session.show(Message::error(text));
    }
}
