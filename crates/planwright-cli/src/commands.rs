//! Wizard command parsing
//!
//! One command per input line: a lowercase word followed by an optional
//! argument. Step, idea and version numbers are 1-based on the prompt.

use std::path::PathBuf;

use thiserror::Error;

/// File written by `export` when no path is given
pub const DEFAULT_EXPORT_FILE: &str = "product-plan.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Next,
    Prev,
    /// Jump to a step (1-based)
    Goto(usize),
    /// Replace the notes for the current step
    Input(String),
    Generate,
    /// Pick a pending idea (1-based)
    Select(usize),
    History,
    /// Restore a history entry (1-based)
    Revert(usize),
    Review,
    Edit,
    Canvas,
    Back,
    Key(String),
    /// `reset` asks for confirmation, `reset confirm` does it
    Reset { confirmed: bool },
    Show,
    Export(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("not a valid number: {0}")]
    InvalidNumber(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_lowercase().as_str() {
            "start" => Command::Start,
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "goto" | "step" => Command::Goto(number("goto", rest)?),
            "input" | "notes" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("input"));
                }
                Command::Input(rest.to_string())
            }
            "generate" | "gen" | "g" => Command::Generate,
            "select" => Command::Select(number("select", rest)?),
            "history" => Command::History,
            "revert" => Command::Revert(number("revert", rest)?),
            "review" => Command::Review,
            "edit" => Command::Edit,
            "canvas" => Command::Canvas,
            "back" => Command::Back,
            "key" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("key"));
                }
                Command::Key(rest.to_string())
            }
            "reset" => Command::Reset {
                confirmed: rest.eq_ignore_ascii_case("confirm"),
            },
            "show" => Command::Show,
            "export" => {
                let file = if rest.is_empty() {
                    DEFAULT_EXPORT_FILE
                } else {
                    rest
                };
                Command::Export(PathBuf::from(file))
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    /// Commands that call the generation service
    pub fn is_slow(&self) -> bool {
        matches!(self, Command::Generate | Command::Canvas)
    }
}

fn number(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}

pub const HELP: &str = "\
Navigation
  start               Begin the wizard at step 1
  next | prev         Move between steps (next on the last step opens the review)
  goto <n>            Jump to step n
  review              Review the whole plan
  edit                Leave the review and edit the last step
  back                Leave the Lean Canvas and return to the review

Editing the current step
  input <text>        Replace your notes for this step
  generate            Generate ideas (or example content / next steps)
  select <n>          Use idea n as this step's content
  history             List earlier versions
  revert <n>          Restore earlier version n

Plan
  canvas              Generate a Lean Canvas from the plan
  show                Redraw the current view
  export [file]       Write the plan as Markdown (default product-plan.md)
  reset               Clear the plan (your API key is kept)
  key <value>         Save your Gemini API key

  help                Show this help
  quit                Leave (your plan is saved automatically)";
