use std::str::FromStr;

use thiserror::Error;

use crate::markup::{render_error, render_result, RenderOptions};
use crate::view_model::{AppViewModel, UiPhase};
use crate::{InvestigationResult, Locale, Theme};

/// The three collapsible regions of a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Summary,
    KeyPoints,
    Sources,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Summary, SectionId::KeyPoints, SectionId::Sources];

    /// Element id of the section's content region.
    pub fn content_id(self) -> &'static str {
        match self {
            SectionId::Summary => "summary-content",
            SectionId::KeyPoints => "keypoints-content",
            SectionId::Sources => "sources-content",
        }
    }

    fn index(self) -> usize {
        match self {
            SectionId::Summary => 0,
            SectionId::KeyPoints => 1,
            SectionId::Sources => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}` (expected summary, key_points or sources)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(SectionId::Summary),
            "key_points" | "keypoints" | "points" => Ok(SectionId::KeyPoints),
            "sources" => Ok(SectionId::Sources),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// Expanded/collapsed flags, all expanded by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sections {
    collapsed: [bool; 3],
}

impl Sections {
    pub fn is_expanded(&self, section: SectionId) -> bool {
        !self.collapsed[section.index()]
    }

    pub(crate) fn toggle(&mut self, section: SectionId) {
        let flag = &mut self.collapsed[section.index()];
        *flag = !*flag;
    }
}

/// What the result container currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ResultDisplayed(InvestigationResult),
    ErrorDisplayed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    locale: Locale,
    collapsible: bool,
    input: String,
    ui: UiState,
    validation: Option<&'static str>,
    validation_serial: u64,
    theme: Theme,
    sections: Sections,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_options(Locale::default(), true)
    }

    pub fn with_options(locale: Locale, collapsible: bool) -> Self {
        Self {
            locale,
            collapsible,
            input: String::new(),
            ui: UiState::Idle,
            validation: None,
            validation_serial: 0,
            theme: Theme::default(),
            sections: Sections::default(),
            dirty: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn sections(&self) -> Sections {
        self.sections
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        self.validation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.ui, UiState::Loading)
    }

    /// Submit and example controls are usable whenever nothing is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn view(&self) -> AppViewModel {
        let options = RenderOptions {
            locale: self.locale,
            collapsible: self.collapsible,
        };
        let (phase, result_markup) = match &self.ui {
            UiState::Idle => (UiPhase::Idle, None),
            UiState::Loading => (UiPhase::Loading, None),
            UiState::ResultDisplayed(result) => (
                UiPhase::ResultDisplayed,
                Some(render_result(result, &self.sections, &options)),
            ),
            UiState::ErrorDisplayed(detail) => (
                UiPhase::ErrorDisplayed,
                Some(render_error(detail, self.locale)),
            ),
        };

        AppViewModel {
            phase,
            input: self.input.clone(),
            loading: self.is_loading(),
            controls_enabled: self.controls_enabled(),
            validation_message: self.validation.map(str::to_string),
            validation_serial: self.validation_serial,
            theme: self.theme,
            theme_icon: self.theme.icon(),
            result_markup,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn show_validation(&mut self) {
        self.validation = Some(self.locale.strings().validation_empty);
        self.validation_serial = self.validation_serial.wrapping_add(1);
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.validation = None;
        self.ui = UiState::Loading;
        self.dirty = true;
    }

    pub(crate) fn show_result(&mut self, result: InvestigationResult) {
        self.sections = Sections::default();
        self.ui = UiState::ResultDisplayed(result);
        self.dirty = true;
    }

    pub(crate) fn show_error(&mut self, detail: String) {
        self.validation = None;
        self.ui = UiState::ErrorDisplayed(detail);
        self.dirty = true;
    }

    pub(crate) fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dirty = true;
    }

    /// Returns false when there is no collapsible result to toggle.
    pub(crate) fn toggle_section(&mut self, section: SectionId) -> bool {
        if !self.collapsible || !matches!(self.ui, UiState::ResultDisplayed(_)) {
            return false;
        }
        self.sections.toggle(section);
        self.dirty = true;
        true
    }
}
