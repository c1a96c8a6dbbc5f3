//! Run/freeze state machine for the interactive scope loop.
//!
//! The scope session is a small FSM: while `Running` each tick advances the
//! noise sources and re-renders, while `Frozen` the display holds its last
//! trace. `Reset` reloads the scene from disk and starts over at tick zero.

use std::str::FromStr;

/// Whether the scope is advancing or holding its last trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Frozen,
}

/// A command typed at the scope prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeCommand {
    /// Resume (or keep) running.
    Run,
    /// Hold the current trace.
    Freeze,
    /// Reload the scene file and restart from tick zero.
    Reset,
    /// Leave the session.
    Quit,
}

impl FromStr for ScopeCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "run" | "r" => Ok(ScopeCommand::Run),
            "freeze" | "f" => Ok(ScopeCommand::Freeze),
            "reset" => Ok(ScopeCommand::Reset),
            "quit" | "q" => Ok(ScopeCommand::Quit),
            other => Err(format!("unknown command: {:?}", other)),
        }
    }
}

/// What the session loop should do after applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do; wait for the next command or tick.
    None,
    /// Re-render the current scene at the current tick.
    Render,
    /// Reload the scene from disk, then render tick zero.
    Reload,
    /// Exit the session.
    Quit,
}

/// Tracks the scope run state and tick counter.
#[derive(Debug)]
pub struct Controller {
    state: RunState,
    tick: u64,
}

impl Controller {
    /// A new controller starts running at tick zero.
    pub fn new() -> Self {
        Controller {
            state: RunState::Running,
            tick: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Applies a command and returns what the loop should do next.
    ///
    /// `Run` while frozen resumes and forces a render so the display catches
    /// up; `Run` while already running is a no-op. `Freeze` holds the trace
    /// without rendering. `Reset` always restarts at tick zero.
    pub fn apply(&mut self, command: ScopeCommand) -> Action {
        match command {
            ScopeCommand::Run => match self.state {
                RunState::Running => Action::None,
                RunState::Frozen => {
                    self.state = RunState::Running;
                    Action::Render
                }
            },
            ScopeCommand::Freeze => {
                self.state = RunState::Frozen;
                Action::None
            }
            ScopeCommand::Reset => {
                self.state = RunState::Running;
                self.tick = 0;
                Action::Reload
            }
            ScopeCommand::Quit => Action::Quit,
        }
    }

    /// Advances the tick counter. Frozen scopes do not advance.
    ///
    /// Returns true when the tick moved, meaning the caller should render.
    pub fn advance(&mut self) -> bool {
        match self.state {
            RunState::Running => {
                self.tick += 1;
                true
            }
            RunState::Frozen => false,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert_eq!("run".parse::<ScopeCommand>().unwrap(), ScopeCommand::Run);
        assert_eq!("r".parse::<ScopeCommand>().unwrap(), ScopeCommand::Run);
        assert_eq!(
            " freeze ".parse::<ScopeCommand>().unwrap(),
            ScopeCommand::Freeze
        );
        assert_eq!("f".parse::<ScopeCommand>().unwrap(), ScopeCommand::Freeze);
        assert_eq!(
            "reset".parse::<ScopeCommand>().unwrap(),
            ScopeCommand::Reset
        );
        assert_eq!("quit".parse::<ScopeCommand>().unwrap(), ScopeCommand::Quit);
        assert_eq!("q".parse::<ScopeCommand>().unwrap(), ScopeCommand::Quit);
        assert!("start".parse::<ScopeCommand>().is_err());
        assert!("".parse::<ScopeCommand>().is_err());
    }

    #[test]
    fn test_new_controller_is_running_at_tick_zero() {
        let controller = Controller::new();
        assert_eq!(controller.state(), RunState::Running);
        assert_eq!(controller.tick(), 0);
    }

    #[test]
    fn test_freeze_holds_the_tick() {
        let mut controller = Controller::new();
        assert!(controller.advance());
        assert_eq!(controller.tick(), 1);

        assert_eq!(controller.apply(ScopeCommand::Freeze), Action::None);
        assert_eq!(controller.state(), RunState::Frozen);
        assert!(!controller.advance());
        assert!(!controller.advance());
        assert_eq!(controller.tick(), 1);
    }

    #[test]
    fn test_run_while_frozen_resumes_and_renders() {
        let mut controller = Controller::new();
        controller.apply(ScopeCommand::Freeze);

        assert_eq!(controller.apply(ScopeCommand::Run), Action::Render);
        assert_eq!(controller.state(), RunState::Running);
        assert!(controller.advance());
    }

    #[test]
    fn test_run_while_running_is_a_no_op() {
        let mut controller = Controller::new();
        assert_eq!(controller.apply(ScopeCommand::Run), Action::None);
        assert_eq!(controller.state(), RunState::Running);
    }

    #[test]
    fn test_reset_restarts_at_tick_zero() {
        let mut controller = Controller::new();
        controller.advance();
        controller.advance();
        controller.apply(ScopeCommand::Freeze);

        assert_eq!(controller.apply(ScopeCommand::Reset), Action::Reload);
        assert_eq!(controller.state(), RunState::Running);
        assert_eq!(controller.tick(), 0);
    }

    #[test]
    fn test_quit_does_not_touch_state() {
        let mut controller = Controller::new();
        controller.advance();
        assert_eq!(controller.apply(ScopeCommand::Quit), Action::Quit);
        assert_eq!(controller.tick(), 1);
    }
}
