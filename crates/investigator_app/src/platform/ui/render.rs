use investigator_core::{AppViewModel, Strings};

use super::controls::{Control, ViewCommand};

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel, strings: &Strings) -> Vec<ViewCommand> {
    let mut cmds = Vec::new();

    cmds.push(ViewCommand::SetText {
        control: Control::LeadInput,
        text: view.input.clone(),
    });

    cmds.push(ViewCommand::SetText {
        control: Control::ValidationMessage,
        text: view.validation_message.clone().unwrap_or_default(),
    });
    cmds.push(ViewCommand::SetVisible {
        control: Control::ValidationMessage,
        visible: view.validation_message.is_some(),
    });
    if view.validation_message.is_some() {
        cmds.push(ViewCommand::Announce {
            control: Control::ValidationMessage,
            serial: view.validation_serial,
        });
    }

    cmds.push(ViewCommand::SetText {
        control: Control::LoadingIndicator,
        text: strings.loading.to_string(),
    });
    cmds.push(ViewCommand::SetVisible {
        control: Control::LoadingIndicator,
        visible: view.loading,
    });

    for control in [Control::SubmitButton, Control::ExampleButtons] {
        cmds.push(ViewCommand::SetEnabled {
            control,
            enabled: view.controls_enabled,
        });
    }

    cmds.push(ViewCommand::SetMarkup {
        control: Control::ResultContainer,
        markup: view.result_markup.clone().unwrap_or_default(),
    });

    cmds.push(ViewCommand::SetTheme { theme: view.theme });
    cmds.push(ViewCommand::SetText {
        control: Control::ThemeIcon,
        text: view.theme_icon.to_string(),
    });

    cmds
}
