//! Confirmation screen

use std::io::{BufRead, Write};

use super::Command;
use crate::display::format_configuration_summary;
use crate::error::LedResult;
use crate::setup::prompt::Prompter;
use crate::wizard::{Action, WizardState, WizardStep};

pub fn run<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    state: &WizardState,
) -> LedResult<Command> {
    p.say(format_configuration_summary(&state.to_configuration()))?;

    if answer!(p.confirm("Save this configuration?", true)?) {
        Ok(Command::Dispatch(vec![Action::Next]))
    } else {
        p.say("Back to the group list.")?;
        Ok(Command::Dispatch(vec![Action::GoTo(WizardStep::GroupSelect)]))
    }
}
