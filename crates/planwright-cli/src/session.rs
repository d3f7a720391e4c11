//! Interactive wizard session
//!
//! Reads commands line by line from stdin, applies them to the plan manager
//! and prints the resulting view.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use planwright_core::plan::{PlanManager, SectionId, ViewMode, SECTION_COUNT};

use crate::commands::{Command, CommandError, HELP};
use crate::render;

/// What the loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub struct Session {
    manager: PlanManager,
}

impl Session {
    pub fn new(manager: PlanManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &PlanManager {
        &self.manager
    }

    /// Apply one command and produce the text to show
    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!("Executing {:?}", command);

        let text = match command {
            Command::Start => {
                self.manager.start();
                self.view()
            }
            Command::Next => {
                if !self.manager.is_started() {
                    return Ok(Outcome::Print("Type `start` first.".into()));
                }
                self.manager.advance_step();
                self.view()
            }
            Command::Prev => {
                self.manager.retreat_step();
                self.view()
            }
            Command::Goto(n) => {
                if n > SECTION_COUNT {
                    format!("There are only {} steps.", SECTION_COUNT)
                } else {
                    self.manager.select_step(n - 1);
                    self.view()
                }
            }
            Command::Input(text) => match self.editing_section() {
                Ok(section) => {
                    self.manager.update_user_input(section, text);
                    self.view()
                }
                Err(message) => message,
            },
            Command::Generate => match self.editing_section() {
                Ok(section) => {
                    // The failure is part of the rendered view
                    let _ = self.manager.generate(section).await;
                    self.view()
                }
                Err(message) => message,
            },
            Command::Select(n) => match self.editing_section() {
                Ok(section) => {
                    let idea = self
                        .manager
                        .suggestions(section)
                        .and_then(|ideas| ideas.get(n - 1))
                        .cloned();
                    match idea {
                        Some(idea) => {
                            self.manager.select_idea(section, idea);
                            self.view()
                        }
                        None => format!("There is no idea #{}. Run `generate` first.", n),
                    }
                }
                Err(message) => message,
            },
            Command::History => match self.editing_section() {
                Ok(section) => render::history(&self.manager, section),
                Err(message) => message,
            },
            Command::Revert(n) => match self.editing_section() {
                Ok(section) => {
                    let index = n - 1;
                    let version = self
                        .manager
                        .section(section)
                        .history
                        .get(index)
                        .cloned()
                        .unwrap_or_default();
                    match self.manager.revert_version(section, version, index) {
                        Ok(()) => self.view(),
                        Err(_) => format!("There is no version #{} in the history.", n),
                    }
                }
                Err(message) => message,
            },
            Command::Review => {
                self.manager.enter_plan_review();
                self.view()
            }
            Command::Edit => {
                self.manager.enter_edit_mode();
                self.view()
            }
            Command::Canvas => {
                let _ = self.manager.generate_canvas().await;
                self.view()
            }
            Command::Back => {
                self.manager.exit_canvas_view();
                self.view()
            }
            Command::Key(value) => {
                if self.manager.save_credential(&value) {
                    "API key saved.".to_string()
                } else {
                    "The API key must not be empty.".to_string()
                }
            }
            Command::Reset { confirmed: false } => {
                "This clears every section of your plan. Type `reset confirm` to continue."
                    .to_string()
            }
            Command::Reset { confirmed: true } => {
                self.manager.reset();
                format!("Plan cleared.\n\n{}", self.view())
            }
            Command::Show => self.view(),
            Command::Export(path) => {
                std::fs::write(&path, self.manager.plan_markdown())?;
                info!("Exported plan to {:?}", path);
                format!("Plan written to {}", path.display())
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Print(text))
    }

    /// Render the current view; a pending settings prompt is shown once
    fn view(&mut self) -> String {
        let text = render::view(&self.manager);
        self.manager.dismiss_settings();
        text
    }

    fn editing_section(&self) -> Result<SectionId, String> {
        match (self.manager.view(), self.manager.current_section()) {
            (ViewMode::Editing, Some(section)) => Ok(section),
            _ => Err("Open a step first with `start`, `goto <n>` or `edit`.".to_string()),
        }
    }
}

/// Run the interactive loop until `quit` or end of input
pub async fn run(manager: PlanManager) -> Result<()> {
    let mut session = Session::new(manager);
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render::view(session.manager()));

    loop {
        print!("{}", render::prompt(session.manager()));
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{} (type `help` for the list of commands)", e);
                continue;
            }
        };

        if command.is_slow() {
            println!("Working...");
        }

        match session.execute(command).await {
            Ok(Outcome::Print(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("Error: {:#}", e),
        }
    }

    info!("Wizard session ended");
    Ok(())
}
