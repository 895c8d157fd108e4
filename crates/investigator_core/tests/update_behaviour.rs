use std::sync::Once;

use investigator_core::{
    update, AppState, Effect, InvestigationError, InvestigationRequest, InvestigationResult, Key,
    KeyPress, Locale, Msg, ServerDetail, UiPhase, UiState,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit_lead(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn sample_result() -> InvestigationResult {
    InvestigationResult::from_json(
        br#"{"verdict": "CONFIRMED", "event_summary": "s", "key_points": ["a", "b"], "sources": []}"#,
    )
    .unwrap()
}

#[test]
fn url_lead_is_submitted_as_url() {
    init_logging();
    let (state, effects) = submit_lead(AppState::new(), "  https://g1.globo.com/noticia  ");

    assert_eq!(
        effects,
        vec![Effect::SubmitInvestigation {
            request: InvestigationRequest::Url("https://g1.globo.com/noticia".to_string()),
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, UiPhase::Loading);
    assert!(view.loading);
    assert!(!view.controls_enabled);
    assert_eq!(view.result_markup, None);
}

#[test]
fn text_lead_is_submitted_as_text() {
    init_logging();
    let (_state, effects) = submit_lead(AppState::new(), "\tboldo tea cures cancer\n");

    assert_eq!(
        effects,
        vec![Effect::SubmitInvestigation {
            request: InvestigationRequest::Text("boldo tea cures cancer".to_string()),
        }]
    );
}

#[test]
fn blank_input_shows_validation_and_sends_nothing() {
    init_logging();
    for input in ["", "   ", "\n\t "] {
        let (state, effects) = submit_lead(AppState::new(), input);
        assert!(effects.is_empty());
        let view = state.view();
        assert_eq!(view.phase, UiPhase::Idle);
        assert!(view.controls_enabled);
        assert_eq!(
            view.validation_message.as_deref(),
            Some("Please, provide a lead for the investigation.")
        );
        assert_eq!(view.result_markup, None);
    }
}

#[test]
fn validation_message_is_localized() {
    init_logging();
    let state = AppState::with_options(Locale::Portuguese, false);
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(
        state.validation_message(),
        Some("Por favor, insira uma pista para a investigação.")
    );
}

#[test]
fn every_blank_submit_raises_validation_again() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "");
    let first = state.view().validation_serial;
    let (mut state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_ne!(state.view().validation_serial, first);

    let (state, _) = update(state, Msg::InputChanged("still typing".into()));
    assert!(state.validation_message().is_some());
    assert_eq!(state.view().validation_serial, first + 1);
}

#[test]
fn validation_message_is_cleared_by_next_submit() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), " ");
    assert!(state.validation_message().is_some());

    let (state, effects) = submit_lead(state, "fire at the museum");
    assert_eq!(effects.len(), 1);
    assert_eq!(state.validation_message(), None);
}

#[test]
fn second_submit_while_loading_is_ignored() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "oil spill");
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::KeyPressed(KeyPress {
            key: Key::Enter,
            ctrl: true,
            meta: false,
        }),
    );
    assert!(effects.is_empty());
    assert!(state.is_loading());
}

#[test]
fn ctrl_or_cmd_enter_submits() {
    init_logging();
    for (ctrl, meta) in [(true, false), (false, true)] {
        let (state, _) = update(AppState::new(), Msg::InputChanged("rumor".into()));
        let (_, effects) = update(
            state,
            Msg::KeyPressed(KeyPress {
                key: Key::Enter,
                ctrl,
                meta,
            }),
        );
        assert_eq!(effects.len(), 1);
    }
}

#[test]
fn plain_enter_does_not_submit() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("rumor".into()));
    let (state, effects) = update(state, Msg::KeyPressed(KeyPress::plain(Key::Enter)));
    assert!(effects.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn success_displays_result_and_reenables_controls() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "plane crash");
    let (state, effects) = update(state, Msg::InvestigationSucceeded(sample_result()));

    assert!(effects.is_empty());
    assert!(matches!(state.ui(), UiState::ResultDisplayed(_)));
    let view = state.view();
    assert_eq!(view.phase, UiPhase::ResultDisplayed);
    assert!(!view.loading);
    assert!(view.controls_enabled);
    assert!(view.result_markup.unwrap().contains("Verdict: CONFIRMED"));
}

#[test]
fn request_failure_shows_server_detail() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "plane crash");
    let (state, _) = update(
        state,
        Msg::InvestigationFailed(InvestigationError::RequestFailed {
            status: 429,
            detail: ServerDetail::Message("rate limited".into()),
        }),
    );

    let view = state.view();
    assert_eq!(view.phase, UiPhase::ErrorDisplayed);
    assert!(view.controls_enabled);
    assert!(view
        .result_markup
        .unwrap()
        .contains("Details: rate limited"));
}

#[test]
fn unparseable_error_body_uses_fallback() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "plane crash");
    let (state, _) = update(
        state,
        Msg::InvestigationFailed(InvestigationError::RequestFailed {
            status: 502,
            detail: ServerDetail::Unparseable,
        }),
    );
    assert_eq!(
        state.ui(),
        &UiState::ErrorDisplayed("Unknown server error.".into())
    );
}

#[test]
fn network_failure_shows_message() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "plane crash");
    let (state, _) = update(
        state,
        Msg::InvestigationFailed(InvestigationError::Network("connection refused".into())),
    );
    assert!(state.controls_enabled());
    assert_eq!(
        state.ui(),
        &UiState::ErrorDisplayed("connection refused".into())
    );
}

#[test]
fn new_submit_clears_previous_result() {
    init_logging();
    let (state, _) = submit_lead(AppState::new(), "plane crash");
    let (state, _) = update(state, Msg::InvestigationSucceeded(sample_result()));
    let (state, _) = update(state, Msg::SubmitClicked);

    assert_eq!(state.view().result_markup, None);
    assert!(state.is_loading());
}

#[test]
fn stray_completion_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InvestigationSucceeded(sample_result()));
    assert_eq!(state.ui(), &UiState::Idle);
}

#[test]
fn dirty_flag_tracks_changes() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("x".into()));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::InputChanged("x".into()));
    assert!(!state.consume_dirty());
}
