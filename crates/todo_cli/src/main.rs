//! Console entry point.
//!
//! # Responsibility
//! - Load sentinel and logging settings from the environment.
//! - Run one controller session over stdin/stdout.

use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::logging::{LOG_DIR_ENV, LOG_LEVEL_ENV};
use todo_core::{default_log_level, init_logging, ConsoleView, Controller, ControllerConfig};

const DEFAULT_LOG_DIR_NAME: &str = "todo-logs";

fn main() -> ExitCode {
    if std::env::args().skip(1).any(|arg| arg == "--version") {
        println!("todo {}", todo_core::core_version());
        return ExitCode::SUCCESS;
    }

    let config = match ControllerConfig::from_lookup(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("todo: invalid configuration: {err}");
            return ExitCode::from(2);
        }
    };

    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
    // Logging is diagnostics only; a broken log setup must not block the session.
    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("todo: logging disabled: {err}");
    }

    println!(
        "Type a task and press enter. `{}` completes the first task, `{}` exits.",
        config.complete_sentinel, config.quit_sentinel
    );

    let session = Controller::new(ConsoleView::stdio(), config)
        .and_then(|mut controller| controller.run());
    match session {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_failed module=cli status=error error={err}");
            eprintln!("todo: {err}");
            ExitCode::FAILURE
        }
    }
}
