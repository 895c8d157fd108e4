use std::collections::HashMap;
use std::io::{self, Write};

use engine_logging::engine_debug;
use investigator_core::Theme;
use scraper::{ElementRef, Html, Selector};

use super::controls::{Control, ViewCommand};

/// Something that can show the controller's output.
pub trait Surface {
    fn apply(&mut self, command: ViewCommand);

    fn apply_all(&mut self, commands: Vec<ViewCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// Prints state changes as plain text lines.
///
/// Commands repeat the full view on every render, so the surface remembers
/// what it last showed and only prints differences.
pub struct TerminalSurface<W: Write> {
    out: W,
    texts: HashMap<Control, String>,
    visible: HashMap<Control, bool>,
    announced: HashMap<Control, u64>,
    theme: Option<Theme>,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            texts: HashMap::new(),
            visible: HashMap::new(),
            announced: HashMap::new(),
            theme: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::SetText { control, text } => {
                let changed = self.texts.get(&control) != Some(&text);
                if changed && control == Control::LeadInput && !text.is_empty() {
                    self.line(&format!("Lead: {text}"));
                }
                self.texts.insert(control, text);
            }
            ViewCommand::SetVisible { control, visible } => {
                let was_visible = self.visible.insert(control, visible).unwrap_or(false);
                // Validation is printed on announce so repeats show up too.
                if visible && !was_visible && control != Control::ValidationMessage {
                    let text = self.texts.get(&control).cloned().unwrap_or_default();
                    self.line(&text);
                }
            }
            ViewCommand::Announce { control, serial } => {
                if self.announced.insert(control, serial) != Some(serial) {
                    let text = self.texts.get(&control).cloned().unwrap_or_default();
                    match control {
                        Control::ValidationMessage => self.line(&format!("⚠️  {text}")),
                        _ => self.line(&text),
                    }
                }
            }
            ViewCommand::SetEnabled { control, enabled } => {
                engine_debug!("{:?} enabled={}", control, enabled);
            }
            ViewCommand::SetMarkup { control, markup } => {
                if self.texts.get(&control) != Some(&markup) {
                    if !markup.is_empty() {
                        self.line(&markup_to_text(&markup));
                    }
                    self.texts.insert(control, markup);
                }
            }
            ViewCommand::SetTheme { theme } => {
                let previous = self.theme.replace(theme);
                if previous.is_some_and(|previous| previous != theme) {
                    self.line(&format!("Theme: {theme} {}", theme.icon()));
                }
            }
        }
    }
}

/// Plain-text rendering of result or error markup. Collapsed sections show
/// their heading only.
pub fn markup_to_text(markup: &str) -> String {
    let Ok(selector) = Selector::parse("h2, h3, h4, p, li, a") else {
        return markup.to_string();
    };
    let fragment = Html::parse_fragment(markup);

    let mut lines = Vec::new();
    for element in fragment.select(&selector) {
        if inside_collapsed(&element) {
            continue;
        }
        let text = element
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match element.value().name() {
            "h2" => lines.push(text),
            "h3" | "h4" => {
                lines.push(String::new());
                if header_collapsed(&element) {
                    lines.push(format!("{text} ►"));
                } else {
                    lines.push(text);
                }
            }
            "li" => lines.push(format!("  • {text}")),
            "a" => {
                let href = element.value().attr("href").unwrap_or_default();
                lines.push(format!("  - {text} <{href}>"));
            }
            _ if text.is_empty() => {}
            _ if parent_has_class(&element, "source-item") => lines.push(format!("    {text}")),
            _ => lines.push(text),
        }
    }
    lines.join("\n")
}

fn inside_collapsed(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().classes().any(|class| class == "collapsed"))
}

fn header_collapsed(element: &ElementRef<'_>) -> bool {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|header| header.value().attr("aria-expanded"))
        == Some("false")
}

fn parent_has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().classes().any(|c| c == class))
}

/// Keeps every command for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<ViewCommand>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn enabled_history(&self, control: Control) -> Vec<bool> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                ViewCommand::SetEnabled {
                    control: target,
                    enabled,
                } if *target == control => Some(*enabled),
                _ => None,
            })
            .collect()
    }

    pub fn last_markup(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match command {
            ViewCommand::SetMarkup { markup, .. } => Some(markup.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn apply(&mut self, command: ViewCommand) {
        self.commands.push(command);
    }
}
