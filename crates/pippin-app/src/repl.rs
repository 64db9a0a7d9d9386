//! The read-eval-print loop.
//!
//! Reads lines from stdin, filters boundary input (blank lines, exit
//! commands, end of input), and hands everything else to the brain. The
//! loop blocks on each read; nothing here is concurrent.

use std::io::BufRead;

use tracing::debug;

use pippin_brain::ResponseSelector;
use pippin_core::Result;

use crate::term::Presenter;

/// Commands that end the session. Compared case-insensitively against the
/// whole trimmed line and never forwarded to the selector.
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// Whether `input` is a session-ending command.
fn is_exit_command(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_COMMANDS.iter().any(|cmd| lowered == *cmd)
}

/// Run the chat loop until an exit command or end of input.
pub fn run<R: BufRead>(
    mut reader: R,
    selector: &ResponseSelector,
    presenter: &Presenter,
) -> Result<()> {
    presenter.greet()?;

    let mut line = String::new();
    loop {
        presenter.prompt()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // End of input: leave as gracefully as an explicit exit.
            debug!("Stdin closed, ending session");
            presenter.farewell()?;
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_command(input) {
            presenter.farewell()?;
            break;
        }

        presenter.think()?;
        let response = selector.select(input);
        match selector.matched_category(input) {
            Some(category) => debug!(category, "Keyword match"),
            None => debug!("No keyword match, idle thought selected"),
        }
        presenter.say(response)?;
    }

    Ok(())
}
