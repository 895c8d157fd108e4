use std::io::BufRead;

use anyhow::{Context, Result};
use engine_logging::{engine_debug, engine_info};
use investigator_core::{Msg, SectionId};

use super::app::Controller;
use super::ui::surface::Surface;

const HELP: &str = "\
Type a claim or URL to set the lead, then:
  :submit, :s          investigate the current lead
  :example <key>       load a canned example
  :theme               toggle light/dark
  :toggle <section>    collapse or expand summary, key_points or sources
  :help                show this help
  :quit, :q            leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Input(String),
    Submit,
    Example(String),
    Theme,
    Toggle(SectionId),
    Help,
    Quit,
    Invalid(String),
}

/// Empty lines carry no command.
pub fn parse_line(line: &str) -> Option<ShellCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    let Some(rest) = line.trim_start().strip_prefix(':') else {
        return Some(ShellCommand::Input(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let command = match (parts.next(), parts.next()) {
        (Some("submit" | "s"), None) => ShellCommand::Submit,
        (Some("example"), Some(key)) => ShellCommand::Example(key.to_string()),
        (Some("theme"), None) => ShellCommand::Theme,
        (Some("toggle"), Some(section)) => match section.parse() {
            Ok(section) => ShellCommand::Toggle(section),
            Err(err) => ShellCommand::Invalid(format!("{err}")),
        },
        (Some("help" | "h" | "?"), None) => ShellCommand::Help,
        (Some("quit" | "q"), None) => ShellCommand::Quit,
        _ => ShellCommand::Invalid(format!("unrecognised command `:{rest}`")),
    };
    Some(command)
}

/// Runs a line-driven session until `:quit` or end of input.
pub fn run<S: Surface, R: BufRead>(controller: &mut Controller<S>, input: R) -> Result<()> {
    engine_info!("Shell session started");
    println!("{HELP}");

    for line in input.lines() {
        let line = line.context("failed to read shell input")?;
        let Some(command) = parse_line(&line) else {
            continue;
        };
        engine_debug!("Shell command {:?}", command);

        match command {
            ShellCommand::Input(text) => controller.dispatch(Msg::InputChanged(text)),
            ShellCommand::Submit => {
                controller.dispatch(Msg::SubmitClicked);
                controller.settle();
            }
            ShellCommand::Example(key) => controller.dispatch(Msg::ExampleSelected(key)),
            ShellCommand::Theme => controller.dispatch(Msg::ThemeToggleClicked),
            ShellCommand::Toggle(section) => controller.dispatch(Msg::SectionClicked(section)),
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Invalid(reason) => eprintln!("{reason}"),
        }
    }

    engine_info!("Shell session ended");
    Ok(())
}
