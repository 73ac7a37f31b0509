use std::collections::VecDeque;
use std::io::{self, Cursor};
use todo_core::{
    ConfigError, ConsoleView, Controller, ControllerConfig, ControllerError, ExitReason,
    LoopControl, View,
};

/// Scripted view that records every render and notification.
#[derive(Default)]
struct ScriptedView {
    inputs: VecDeque<String>,
    renders: Vec<(Vec<String>, Vec<String>)>,
    notices: Vec<String>,
}

impl ScriptedView {
    fn with_inputs(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|line| line.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl View for ScriptedView {
    fn render(&mut self, tasks: &[String], completed: &[String]) -> io::Result<()> {
        self.renders.push((tasks.to_vec(), completed.to_vec()));
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}

struct BrokenView;

impl View for BrokenView {
    fn render(&mut self, _: &[String], _: &[String]) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }

    fn notify(&mut self, _: &str) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn add_complete_and_quit_session() {
    let mut view = ScriptedView::with_inputs(&["buy milk", "walk dog", "done", "quit"]);
    let summary = {
        let mut controller = Controller::new(&mut view, ControllerConfig::default()).unwrap();
        let summary = controller.run().unwrap();
        assert_eq!(controller.model().tasks(), ["walk dog"]);
        assert_eq!(controller.model().completed(), ["buy milk"]);
        summary
    };

    assert_eq!(summary.exit, ExitReason::QuitSentinel);
    assert_eq!(summary.inputs, 4);
    assert_eq!(summary.added, 2);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.rejected, 0);
    // Initial render plus one per non-quit input.
    assert_eq!(view.renders.len(), 4);
    assert_eq!(
        view.renders.last().unwrap(),
        &(vec!["walk dog".to_string()], vec!["buy milk".to_string()])
    );
}

#[test]
fn quit_sentinel_stops_before_remaining_input() {
    let mut view = ScriptedView::with_inputs(&["first", "quit", "never added"]);
    let mut controller = Controller::new(&mut view, ControllerConfig::default()).unwrap();
    controller.run().unwrap();

    let model = controller.into_model();
    assert_eq!(model.tasks(), ["first"]);
    assert!(model.completed().is_empty());
    assert_eq!(view.inputs, ["never added"]);
    assert_eq!(view.renders.len(), 2);
}

#[test]
fn handle_line_quit_returns_exit_without_render() {
    let mut view = ScriptedView::default();
    let mut controller = Controller::new(&mut view, ControllerConfig::default()).unwrap();

    assert_eq!(controller.handle_line("QUIT").unwrap(), LoopControl::Exit);
    assert!(controller.model().tasks().is_empty());
    drop(controller);
    assert!(view.renders.is_empty());
}

#[test]
fn rejected_inputs_notify_and_keep_state() {
    let mut view = ScriptedView::with_inputs(&["done", "   ", "quit"]);
    let mut controller = Controller::new(&mut view, ControllerConfig::default()).unwrap();
    let summary = controller.run().unwrap();
    assert_eq!(summary.rejected, 2);
    assert!(controller.model().tasks().is_empty());
    assert!(controller.model().completed().is_empty());

    drop(controller);
    assert_eq!(
        view.notices,
        ["no pending tasks to complete", "task text cannot be empty"]
    );
    assert_eq!(view.renders.len(), 3);
}

#[test]
fn end_of_input_ends_session() {
    let mut view = ScriptedView::with_inputs(&["only task"]);
    let mut controller = Controller::new(&mut view, ControllerConfig::default()).unwrap();
    let summary = controller.run().unwrap();

    assert_eq!(summary.exit, ExitReason::EndOfInput);
    assert_eq!(controller.model().tasks(), ["only task"]);
}

#[test]
fn custom_sentinels_are_honored() {
    let config = ControllerConfig {
        quit_sentinel: ":q".to_string(),
        complete_sentinel: ":x".to_string(),
    };
    let mut view = ScriptedView::with_inputs(&["quit", "done", ":x", ":q"]);
    let mut controller = Controller::new(&mut view, config).unwrap();
    controller.run().unwrap();

    assert_eq!(controller.model().tasks(), ["done"]);
    assert_eq!(controller.model().completed(), ["quit"]);
}

#[test]
fn io_failure_aborts_run() {
    let mut controller = Controller::new(BrokenView, ControllerConfig::default()).unwrap();
    let err = controller.run().unwrap_err();
    assert!(matches!(err, ControllerError::Io(ref io) if io.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn console_view_session_renders_transcript() {
    let input = Cursor::new(b"buy milk\ndone\nquit\n".to_vec());
    let mut controller = Controller::new(
        ConsoleView::new(input, Vec::new()),
        ControllerConfig::default(),
    )
    .unwrap();
    controller.run().unwrap();

    let (model, view) = controller.into_parts();
    assert!(model.tasks().is_empty());
    assert_eq!(model.completed(), ["buy milk"]);

    let transcript = String::from_utf8(view.into_output()).unwrap();
    let expected = concat!(
        "Tasks:\n  (none)\nCompleted:\n  (none)\n",
        "> ",
        "Tasks:\n  1. buy milk\nCompleted:\n  (none)\n",
        "> ",
        "Tasks:\n  (none)\nCompleted:\n  1. buy milk\n",
        "> ",
    );
    assert_eq!(transcript, expected);
}

#[test]
fn invalid_utf8_line_does_not_end_console_session() {
    let input = Cursor::new(b"buy milk\n\xff\xfe\nwalk dog\nquit\n".to_vec());
    let mut controller = Controller::new(
        ConsoleView::new(input, Vec::new()),
        ControllerConfig::default(),
    )
    .unwrap();
    let summary = controller.run().unwrap();

    assert_eq!(summary.exit, ExitReason::QuitSentinel);
    assert_eq!(summary.inputs, 4);
    let tasks = controller.model().tasks();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0], "buy milk");
    assert_eq!(tasks[1], "\u{FFFD}\u{FFFD}");
    assert_eq!(tasks[2], "walk dog");
}

#[test]
fn duplicate_input_is_reported_and_keeps_lists_disjoint() {
    let mut view = ScriptedView::with_inputs(&["buy milk", "done", "buy milk", "quit"]);
    let mut controller = Controller::new(&mut view, ControllerConfig::default()).unwrap();
    let summary = controller.run().unwrap();

    assert_eq!(summary.rejected, 1);
    assert!(controller.model().tasks().is_empty());
    assert_eq!(controller.model().completed(), ["buy milk"]);
    drop(controller);
    assert_eq!(view.notices, ["task already listed: `buy milk`"]);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ControllerConfig {
        quit_sentinel: "stop".to_string(),
        complete_sentinel: " STOP ".to_string(),
    };
    let err = Controller::new(ScriptedView::default(), config).err().unwrap();
    assert!(matches!(
        err,
        ControllerError::Config(ConfigError::DuplicateSentinel(_))
    ));

    let config = ControllerConfig {
        quit_sentinel: String::new(),
        ..ControllerConfig::default()
    };
    assert!(Controller::new(ScriptedView::default(), config).is_err());
}

#[test]
fn controller_exposes_accepted_config() {
    let config = ControllerConfig {
        quit_sentinel: "exit".to_string(),
        complete_sentinel: "check".to_string(),
    };
    let controller = Controller::new(ScriptedView::default(), config.clone()).unwrap();
    assert_eq!(controller.config(), &config);
}
