//! Start page

use std::io::{BufRead, Write};

use super::Command;
use crate::error::LedResult;
use crate::setup::prompt::Prompter;
use crate::wizard::Action;

pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> LedResult<Command> {
    p.say("This wizard sets up the addressable LEDs wired to your controller:")?;
    p.say("  1. the LED chain (data pin, LED type, length, brightness)")?;
    p.say("  2. the groups that split the chain into buttons, status LEDs and case lighting")?;
    p.say("")?;
    p.say("Type 'back' at any prompt to return to the previous step, 'quit' to stop.")?;

    let start = answer!(p.confirm("Start?", true)?);
    Ok(if start {
        Command::Dispatch(vec![Action::Next])
    } else {
        Command::Quit
    })
}
