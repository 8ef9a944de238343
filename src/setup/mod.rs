//! Interactive setup wizard
//!
//! A line-oriented front end over the wizard controller: one screen per
//! step, answers read from any `BufRead` so the same flow runs in a terminal
//! and in tests.

pub mod prompt;
pub mod steps;
pub mod wizard;

pub use prompt::{Prompter, Reply};
pub use wizard::{SetupResult, SetupWizard};
