//! Selection State Machine
//!
//! Tracks where the user is in the network → band → playback cycle.
//! Implements immutable state transitions for predictable behavior.

use super::catalog::Catalog;
use crate::error::SelectionError;

/// Selection state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Waiting for a network choice
    #[default]
    AwaitingNetwork,
    /// Waiting for a band choice within `network`
    AwaitingBand {
        /// 1-based network choice
        network: i64,
    },
    /// A valid pair was chosen; the pipeline runs next
    Processing {
        /// 1-based network choice
        network: i64,
        /// 1-based band choice
        band: i64,
    },
    /// Session ended
    Stopped,
}

impl SelectionState {
    /// Check if the session has ended
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Check if the state waits for console input
    #[must_use]
    pub const fn is_prompt(&self) -> bool {
        matches!(self, Self::AwaitingNetwork | Self::AwaitingBand { .. })
    }
}

/// Selection event that triggers state transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A number was entered at the prompt
    Choice(i64),
    /// Something that is not a number was entered
    Invalid(String),
    /// The pipeline run for `Processing` finished (successfully or not)
    Processed,
    /// Console input ended
    EndOfInput,
}

/// Result of applying an event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the event
    pub state: SelectionState,
    /// Recoverable error to report before re-prompting
    pub error: Option<SelectionError>,
}

impl Transition {
    const fn to(state: SelectionState) -> Self {
        Self { state, error: None }
    }

    const fn rejected(state: SelectionState, error: SelectionError) -> Self {
        Self {
            state,
            error: Some(error),
        }
    }
}

/// Apply an event to the selection state, returning the transition
///
/// Events that make no sense in a state leave it unchanged.
#[must_use]
pub fn apply_event(catalog: &Catalog, state: SelectionState, event: SelectionEvent) -> Transition {
    match (state, event) {
        (SelectionState::Stopped, _) => Transition::to(SelectionState::Stopped),

        (SelectionState::AwaitingNetwork | SelectionState::AwaitingBand { .. }, SelectionEvent::EndOfInput) => {
            Transition::to(SelectionState::Stopped)
        }
        (s @ (SelectionState::AwaitingNetwork | SelectionState::AwaitingBand { .. }), SelectionEvent::Invalid(text)) => {
            Transition::rejected(s, SelectionError::InvalidInput(text))
        }

        (SelectionState::AwaitingNetwork, SelectionEvent::Choice(0)) => {
            Transition::to(SelectionState::Stopped)
        }
        (SelectionState::AwaitingNetwork, SelectionEvent::Choice(network)) => {
            match catalog.network(network) {
                Ok(_) => Transition::to(SelectionState::AwaitingBand { network }),
                Err(e) => Transition::rejected(SelectionState::AwaitingNetwork, e),
            }
        }

        (SelectionState::AwaitingBand { .. }, SelectionEvent::Choice(0)) => {
            Transition::to(SelectionState::AwaitingNetwork)
        }
        (s @ SelectionState::AwaitingBand { network }, SelectionEvent::Choice(band)) => {
            match catalog.station(network, band) {
                Ok(_) => Transition::to(SelectionState::Processing { network, band }),
                Err(e) => Transition::rejected(s, e),
            }
        }

        (SelectionState::Processing { .. }, SelectionEvent::Processed) => {
            Transition::to(SelectionState::AwaitingNetwork)
        }

        (s, _) => Transition::to(s),
    }
}

/// Parse one line of console input into an event
#[must_use]
pub fn parse_choice(line: &str) -> SelectionEvent {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_or_else(|_| SelectionEvent::Invalid(trimmed.to_owned()), SelectionEvent::Choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::catalog::STANDARD_CATALOG;

    #[test]
    fn parse_numbers_and_text() {
        assert_eq!(parse_choice(" 2\n"), SelectionEvent::Choice(2));
        assert_eq!(parse_choice("-1"), SelectionEvent::Choice(-1));
        assert_eq!(parse_choice("abc\n"), SelectionEvent::Invalid("abc".into()));
        assert_eq!(parse_choice(""), SelectionEvent::Invalid(String::new()));
        assert_eq!(parse_choice("1.5"), SelectionEvent::Invalid("1.5".into()));
    }

    #[test]
    fn processing_ignores_choices() {
        let state = SelectionState::Processing { network: 1, band: 1 };
        let t = apply_event(&STANDARD_CATALOG, state, SelectionEvent::Choice(2));
        assert_eq!(t.state, state);
        assert!(t.error.is_none());
    }

    #[test]
    fn stopped_is_terminal() {
        let t = apply_event(&STANDARD_CATALOG, SelectionState::Stopped, SelectionEvent::Choice(1));
        assert!(t.state.is_stopped());
    }
}
