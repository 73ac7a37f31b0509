//! Input line classification.

use crate::config::ControllerConfig;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit sentinel; ends the read loop.
    Quit,
    /// Complete sentinel; completes the first pending task.
    CompleteFirst,
    /// Any other non-blank line, carried verbatim for the model to normalize.
    Add(String),
    /// Blank or whitespace-only line.
    Empty,
}

/// Classifies `line` against the configured sentinels.
///
/// Sentinels match the trimmed line case-insensitively; everything else
/// becomes task text.
pub fn parse_command(line: &str, config: &ControllerConfig) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if trimmed.eq_ignore_ascii_case(config.quit_sentinel.trim()) {
        return Command::Quit;
    }
    if trimmed.eq_ignore_ascii_case(config.complete_sentinel.trim()) {
        return Command::CompleteFirst;
    }
    Command::Add(line.to_string())
}
