//! Read-loop controller.
//!
//! # Responsibility
//! - Own the model and the view for one console session.
//! - Translate input lines into model mutations and re-render after each.
//!
//! # Invariants
//! - The quit sentinel ends the loop without mutating or re-rendering.
//! - Rejected input is reported through the view and never changes state.
//! - Only I/O failures abort `run`.

pub mod command;

use crate::config::{ConfigError, ControllerConfig};
use crate::model::todo::{ModelError, TodoModel};
use crate::view::View;
use command::{parse_command, Command};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum ControllerError {
    Config(ConfigError),
    Io(io::Error),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid controller config: {err}"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ControllerError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<io::Error> for ControllerError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    QuitSentinel,
    EndOfInput,
}

/// Counters for one `run` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub inputs: usize,
    pub added: usize,
    pub completed: usize,
    pub rejected: usize,
    pub exit: ExitReason,
}

#[derive(Debug, Default)]
struct Counters {
    inputs: usize,
    added: usize,
    completed: usize,
    rejected: usize,
}

/// Mediates between one `View` and the `TodoModel` it owns.
pub struct Controller<V: View> {
    model: TodoModel,
    view: V,
    config: ControllerConfig,
    counters: Counters,
}

impl<V: View> Controller<V> {
    /// Creates a controller with an empty model.
    ///
    /// # Errors
    /// - `ControllerError::Config` when the sentinels fail validation.
    pub fn new(view: V, config: ControllerConfig) -> ControllerResult<Self> {
        Self::with_model(TodoModel::new(), view, config)
    }

    pub fn with_model(
        model: TodoModel,
        view: V,
        config: ControllerConfig,
    ) -> ControllerResult<Self> {
        config.validate()?;
        Ok(Self {
            model,
            view,
            config,
            counters: Counters::default(),
        })
    }

    pub fn model(&self) -> &TodoModel {
        &self.model
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Releases the final model state.
    pub fn into_model(self) -> TodoModel {
        self.model
    }

    /// Releases both the model and the view.
    pub fn into_parts(self) -> (TodoModel, V) {
        (self.model, self.view)
    }

    /// Runs the read loop until the quit sentinel or end of input.
    ///
    /// # Errors
    /// - Returns `ControllerError::Io` when the view fails to read or write.
    pub fn run(&mut self) -> ControllerResult<SessionSummary> {
        info!(
            "event=session_start module=controller status=ok pending={} completed={}",
            self.model.pending_count(),
            self.model.completed_count()
        );
        self.render().inspect_err(log_io_failure)?;

        let exit = loop {
            let line = match self.view.read_line().inspect_err(log_io_failure)? {
                Some(line) => line,
                None => break ExitReason::EndOfInput,
            };
            if self.handle_line(&line).inspect_err(log_io_failure)? == LoopControl::Exit {
                break ExitReason::QuitSentinel;
            }
        };

        let summary = SessionSummary {
            inputs: self.counters.inputs,
            added: self.counters.added,
            completed: self.counters.completed,
            rejected: self.counters.rejected,
            exit,
        };
        info!(
            "event=session_end module=controller status=ok exit={:?} inputs={} added={} completed={} rejected={}",
            summary.exit, summary.inputs, summary.added, summary.completed, summary.rejected
        );
        Ok(summary)
    }

    /// Applies one input line and re-renders unless it was the quit sentinel.
    pub fn handle_line(&mut self, line: &str) -> ControllerResult<LoopControl> {
        self.counters.inputs += 1;

        let command = parse_command(line, &self.config);
        let outcome = match &command {
            Command::Quit => return Ok(LoopControl::Exit),
            Command::CompleteFirst => self.model.complete_first().map(|_| ()),
            Command::Add(text) => self.model.add_task(text).map(|_| ()),
            Command::Empty => Err(ModelError::EmptyTask),
        };

        match outcome {
            Ok(()) if command == Command::CompleteFirst => self.counters.completed += 1,
            Ok(()) => self.counters.added += 1,
            Err(err) => {
                self.counters.rejected += 1;
                warn!(
                    "event=input_rejected module=controller status=rejected reason={}",
                    rejection_code(&err)
                );
                self.view.notify(&err.to_string())?;
            }
        }

        self.render()?;
        Ok(LoopControl::Continue)
    }

    fn render(&mut self) -> io::Result<()> {
        self.view.render(self.model.tasks(), self.model.completed())
    }
}

fn rejection_code(err: &ModelError) -> &'static str {
    match err {
        ModelError::EmptyTask => "empty_task",
        ModelError::TaskTooLong { .. } => "task_too_long",
        ModelError::TaskNotFound(_) => "task_not_found",
        ModelError::NoPendingTasks => "no_pending_tasks",
        ModelError::DuplicateTask(_) => "duplicate_task",
    }
}

fn log_io_failure<E: Display>(err: &E) {
    error!("event=console_io module=controller status=error error={err}");
}
