//! Console to-do list built as a model/view/controller triad.
//! The controller owns the model; views only ever see borrowed lists.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;

pub use config::{ConfigError, ControllerConfig};
pub use controller::command::{parse_command, Command};
pub use controller::{
    Controller, ControllerError, ControllerResult, ExitReason, LoopControl, SessionSummary,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::todo::{
    normalize_task_text, ModelError, ModelResult, TodoModel, TodoSnapshot, MAX_TASK_CHARS,
};
pub use view::console::ConsoleView;
pub use view::View;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
