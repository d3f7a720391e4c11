//! Plain-text rendering of the wizard views

use std::fmt::Write as _;

use planwright_core::plan::{LeanCanvasData, PlanManager, SectionId, ViewMode, SECTION_COUNT};

const SETTINGS_PROMPT: &str =
    "An API key is needed for this. Get one from Google AI Studio and save it with `key <value>`.";

/// Whatever the manager is currently showing
pub fn view(manager: &PlanManager) -> String {
    let mut out = match manager.view() {
        ViewMode::CanvasReview => match manager.canvas() {
            Some(canvas) => canvas_review(canvas),
            None => plan_review(manager),
        },
        ViewMode::PlanReview => plan_review(manager),
        ViewMode::Editing => match manager.current_section() {
            Some(section) => step(manager, section),
            None => landing(manager),
        },
    };

    if manager.settings_requested() {
        out.push('\n');
        out.push_str(SETTINGS_PROMPT);
        out.push('\n');
    }
    out
}

pub fn landing(manager: &PlanManager) -> String {
    let (done, total) = manager.progress();
    let mut out = String::from("Planwright: build a product plan one step at a time.\n\n");
    if done > 0 {
        let _ = writeln!(out, "Your saved plan has {}/{} sections filled in.", done, total);
    }
    if !manager.has_credential() {
        let _ = writeln!(
            out,
            "Without an API key you can generate examples for the first {} steps.",
            SectionId::ALL.iter().filter(|s| s.is_free()).count()
        );
    }
    out.push_str("Type `start` to begin or `help` for all commands.\n");
    out
}

pub fn step(manager: &PlanManager, section: SectionId) -> String {
    let data = manager.section(section);
    let (done, total) = manager.progress();
    let mut out = String::new();

    let _ = write!(
        out,
        "Step {} of {}: {}",
        section.index() + 1,
        SECTION_COUNT,
        section.title()
    );
    if data.is_complete() {
        out.push_str(" [done]");
    }
    if section.is_free() && !manager.has_credential() {
        out.push_str(" (free)");
    }
    let _ = writeln!(out, "    {}/{} complete", done, total);
    let _ = writeln!(out, "{}\n", section.description());

    out.push_str("Your notes:\n");
    out.push_str(&indented(&data.user_input, "(none yet, use `input <text>`)"));

    if data.is_example {
        out.push_str("\nContent (example):\n");
    } else {
        out.push_str("\nContent:\n");
    }
    out.push_str(&indented(&data.generated_content, "(nothing yet, use `generate`)"));

    if let Some(ideas) = manager.suggestions(section) {
        out.push_str("\nIdeas (`select <n>` to use one):\n");
        for (i, idea) in ideas.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, first_line(idea));
        }
    }

    if !data.history.is_empty() {
        let _ = writeln!(
            out,
            "\n{} earlier version(s), see `history`",
            data.history.len()
        );
    }

    if let Some(err) = manager.error() {
        let _ = writeln!(out, "\nError: {}", err);
    }
    out
}

pub fn history(manager: &PlanManager, section: SectionId) -> String {
    let data = manager.section(section);
    if data.history.is_empty() {
        return format!("No earlier versions of {}.\n", section.title());
    }

    let mut out = format!("Earlier versions of {} (newest first):\n", section.title());
    for (i, version) in data.history.iter().enumerate() {
        let _ = writeln!(out, "\n[{}]", i + 1);
        out.push_str(&indented(version, ""));
    }
    out.push_str("\nUse `revert <n>` to restore one.\n");
    out
}

pub fn plan_review(manager: &PlanManager) -> String {
    let mut out = manager.plan_markdown();
    out.push_str("\n---\nCommands: edit, goto <n>, canvas, export [file]\n");
    if let Some(err) = manager.canvas_error() {
        let _ = writeln!(out, "\nCanvas error: {}", err);
    }
    out
}

pub fn canvas_review(canvas: &LeanCanvasData) -> String {
    let mut out = String::from("Lean Canvas\n===========\n");
    for (block, text) in canvas.blocks() {
        let _ = writeln!(out, "\n{}:", block);
        out.push_str(&indented(text, "-"));
    }
    out.push_str("\nType `back` to return to the plan.\n");
    out
}

/// Status line before each prompt
pub fn prompt(manager: &PlanManager) -> String {
    match (manager.view(), manager.current_step()) {
        (ViewMode::CanvasReview, _) => "canvas> ".to_string(),
        (ViewMode::PlanReview, _) => "review> ".to_string(),
        (ViewMode::Editing, Some(step)) => format!("step {}/{}> ", step + 1, SECTION_COUNT),
        (ViewMode::Editing, None) => "> ".to_string(),
    }
}

fn indented(text: &str, empty: &str) -> String {
    if text.trim().is_empty() {
        return format!("  {}\n", empty);
    }
    let mut out = String::new();
    for line in text.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
