use crate::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    Loading,
    ResultDisplayed,
    ErrorDisplayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: UiPhase,
    pub input: String,
    pub loading: bool,
    pub controls_enabled: bool,
    pub validation_message: Option<String>,
    /// Changes every time the validation message is raised, including
    /// repeats while it is already shown.
    pub validation_serial: u64,
    pub theme: Theme,
    pub theme_icon: &'static str,
    /// Contents of the result container; `None` leaves it empty.
    pub result_markup: Option<String>,
    pub dirty: bool,
}
