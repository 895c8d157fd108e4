use crate::{InvestigationError, InvestigationResult, SectionId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the lead input.
    InputChanged(String),
    /// User clicked the investigate button.
    SubmitClicked,
    /// A key went down anywhere on the page.
    KeyPressed(KeyPress),
    /// User clicked one of the example buttons.
    ExampleSelected(String),
    /// User clicked the theme toggle.
    ThemeToggleClicked,
    /// Theme read from the store at startup.
    ThemeRestored(Theme),
    /// The in-flight investigation returned a valid payload.
    InvestigationSucceeded(InvestigationResult),
    /// The in-flight investigation failed on any path.
    InvestigationFailed(InvestigationError),
    /// User clicked a section header.
    SectionClicked(SectionId),
    /// A key went down while a section header had focus.
    SectionKeyPressed { section: SectionId, key: Key },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// Ctrl+Enter, or Cmd+Enter on macOS.
    pub fn is_submit_shortcut(&self) -> bool {
        self.key == Key::Enter && (self.ctrl || self.meta)
    }
}
