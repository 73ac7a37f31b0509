//! Presentation layer contracts.
//!
//! # Responsibility
//! - Render task lists handed over by the controller.
//! - Read one line of user input at a time.
//!
//! # Invariants
//! - Views hold no business state; every render receives borrowed lists.

pub mod console;

use std::io;

/// Output/input surface driven by the controller.
pub trait View {
    /// Renders both lists in order.
    fn render(&mut self, tasks: &[String], completed: &[String]) -> io::Result<()>;

    /// Reads one line without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Shows a one-line status message, e.g. a rejected input.
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

impl<V: View + ?Sized> View for &mut V {
    fn render(&mut self, tasks: &[String], completed: &[String]) -> io::Result<()> {
        (**self).render(tasks, completed)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        (**self).notify(message)
    }
}
