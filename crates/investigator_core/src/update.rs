use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::{classify_input, AppState, Effect, Key, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::KeyPressed(press) if press.is_submit_shortcut() => submit(&mut state),
        Msg::KeyPressed(_) => Vec::new(),
        Msg::ExampleSelected(key) => {
            // Example buttons are disabled together with the submit button.
            if state.controls_enabled() {
                match state.locale().example(&key) {
                    Some(claim) => {
                        engine_debug!("Example '{}' loaded", key);
                        state.set_input(claim.to_string());
                    }
                    None => engine_warn!("Example '{}' not found", key),
                }
            }
            Vec::new()
        }
        Msg::ThemeToggleClicked => {
            let next = state.theme().toggled();
            state.apply_theme(next);
            vec![Effect::PersistTheme(next)]
        }
        Msg::ThemeRestored(theme) => {
            state.apply_theme(theme);
            Vec::new()
        }
        Msg::InvestigationSucceeded(result) => {
            if state.is_loading() {
                engine_info!(
                    "Investigation finished verdict={} key_points={} sources={}",
                    result.verdict,
                    result.key_points.len(),
                    result.sources.len()
                );
                state.show_result(result);
            } else {
                engine_warn!("Ignoring investigation result with nothing in flight");
            }
            Vec::new()
        }
        Msg::InvestigationFailed(err) => {
            if state.is_loading() {
                engine_warn!("Investigation failed: {}", err);
                let detail = err.detail(state.locale().strings());
                state.show_error(detail);
            } else {
                engine_warn!("Ignoring investigation failure with nothing in flight: {}", err);
            }
            Vec::new()
        }
        Msg::SectionClicked(section) => {
            state.toggle_section(section);
            Vec::new()
        }
        Msg::SectionKeyPressed { section, key } => {
            if matches!(key, Key::Enter | Key::Space) {
                state.toggle_section(section);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // At most one investigation in flight.
    if state.is_loading() {
        return Vec::new();
    }

    let lead = state.input().trim();
    if lead.is_empty() {
        state.show_validation();
        return Vec::new();
    }

    let request = classify_input(lead);
    state.begin_loading();
    vec![Effect::SubmitInvestigation { request }]
}
