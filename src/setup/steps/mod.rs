//! Wizard screens
//!
//! Each screen asks its questions and returns the actions to dispatch. Screens
//! never validate; the controller does, and the driver shows what it refused.

use crate::wizard::Action;

/// What a screen wants the driver to do next
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch these actions in order, stopping at the first refusal
    Dispatch(Vec<Action>),
    /// Leave the wizard without saving
    Quit,
}

impl Command {
    pub fn back() -> Self {
        Command::Dispatch(vec![Action::Back])
    }
}

/// Unwrap a prompt reply inside a screen, leaving the screen on back/quit
macro_rules! answer {
    ($reply:expr) => {
        match $reply {
            $crate::setup::prompt::Reply::Value(value) => value,
            $crate::setup::prompt::Reply::Back => return Ok($crate::setup::steps::Command::back()),
            $crate::setup::prompt::Reply::Quit => return Ok($crate::setup::steps::Command::Quit),
        }
    };
}

pub mod confirm;
pub mod group;
pub mod hardware;
pub mod welcome;
