//! Which user-facing event triggers which controller action.
//!
//! Hosts translate their toolkit's events into a `(Control, Trigger)` pair
//! and hand it to [`crate::Controller::dispatch`], so the wiring can be
//! exercised without a document.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Document,
    GuessInput,
    GuessButton,
    HintButton,
    RestartButton,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Ready,
    Click,
    KeyEnter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Initialize,
    SubmitGuess,
    RequestHint,
    Restart,
}

pub const BINDINGS: &[(Control, Trigger, Action)] = &[
    (Control::Document, Trigger::Ready, Action::Initialize),
    (Control::GuessButton, Trigger::Click, Action::SubmitGuess),
    (Control::GuessInput, Trigger::KeyEnter, Action::SubmitGuess),
    (Control::HintButton, Trigger::Click, Action::RequestHint),
    (Control::RestartButton, Trigger::Click, Action::Restart),
];

pub fn action_for(control: Control, trigger: Trigger) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|&&(c, t, _)| c == control && t == trigger)
        .map(|&(_, _, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_click_both_submit() {
        assert_eq!(
            action_for(Control::GuessButton, Trigger::Click),
            Some(Action::SubmitGuess)
        );
        assert_eq!(
            action_for(Control::GuessInput, Trigger::KeyEnter),
            Some(Action::SubmitGuess)
        );
    }

    #[test]
    fn unbound_pairs_do_nothing() {
        assert_eq!(action_for(Control::GuessInput, Trigger::Click), None);
        assert_eq!(action_for(Control::HintButton, Trigger::KeyEnter), None);
        assert_eq!(action_for(Control::Document, Trigger::Click), None);
    }

    #[test]
    fn every_binding_is_unique() {
        for (i, &(c, t, _)) in BINDINGS.iter().enumerate() {
            assert!(
                BINDINGS[i + 1..]
                    .iter()
                    .all(|&(oc, ot, _)| (oc, ot) != (c, t))
            );
        }
    }
}
