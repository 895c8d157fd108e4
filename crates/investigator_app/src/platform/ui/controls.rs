use investigator_core::Theme;

/// Every element the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeadInput,
    SubmitButton,
    ExampleButtons,
    ValidationMessage,
    LoadingIndicator,
    ResultContainer,
    ThemeIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetText { control: Control, text: String },
    SetVisible { control: Control, visible: bool },
    SetEnabled { control: Control, enabled: bool },
    SetMarkup { control: Control, markup: String },
    /// Draw attention to a control again; a new `serial` means a new occurrence.
    Announce { control: Control, serial: u64 },
    /// Root-level theme attribute.
    SetTheme { theme: Theme },
}
