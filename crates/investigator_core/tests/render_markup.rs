use investigator_core::{
    render_error, update, AppState, InvestigationResult, Key, Locale, Msg, SectionId, UiPhase,
};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};

fn displayed(state: AppState, body: &[u8]) -> AppState {
    let (state, _) = update(state, Msg::InputChanged("lead".into()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let result = InvestigationResult::from_json(body).expect("valid payload");
    let (state, _) = update(state, Msg::InvestigationSucceeded(result));
    state
}

fn markup(state: &AppState) -> Html {
    Html::parse_fragment(&state.view().result_markup.expect("result markup"))
}

fn texts(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

fn attr(html: &Html, selector: &str, name: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector)
        .filter_map(|el| el.value().attr(name).map(str::to_string))
        .collect()
}

const PAYLOAD: &[u8] = br#"{
    "verdict": "inaccurate",
    "event_summary": "Partially true <script>alert(1)</script>",
    "key_points": ["a", "b"],
    "sources": [
        {"title": "Folha", "link": "https://folha.uol.com.br/1", "snippet": "one"},
        {"title": "BBC", "link": "https://bbc.com/2", "snippet": "two"}
    ]
}"#;

#[test]
fn key_points_render_as_ordered_list_items() {
    let state = displayed(AppState::new(), PAYLOAD);
    let html = markup(&state);
    assert_eq!(texts(&html, "ul.key-points-list > li"), vec!["a", "b"]);
}

#[test]
fn each_source_gets_anchor_and_snippet() {
    let state = displayed(AppState::new(), PAYLOAD);
    let html = markup(&state);

    assert_eq!(texts(&html, ".source-item a"), vec!["Folha", "BBC"]);
    assert_eq!(texts(&html, ".source-item p"), vec!["one", "two"]);
    assert_eq!(
        attr(&html, ".source-item a", "href"),
        vec!["https://folha.uol.com.br/1", "https://bbc.com/2"]
    );
    assert_eq!(attr(&html, ".source-item a", "target"), vec!["_blank", "_blank"]);
    assert_eq!(
        attr(&html, ".source-item a", "rel"),
        vec!["noopener noreferrer", "noopener noreferrer"]
    );
}

#[test]
fn verdict_header_carries_icon_and_class() {
    let state = displayed(AppState::new(), PAYLOAD);
    let html = markup(&state);
    assert_eq!(texts(&html, ".verdict-icon"), vec!["⚠️"]);
    assert_eq!(texts(&html, ".verdict-title"), vec!["Verdict: inaccurate"]);
    assert_eq!(attr(&html, ".result-card", "class"), vec!["result-card inaccurate"]);
}

#[test]
fn service_text_is_not_interpreted_as_markup() {
    let state = displayed(AppState::new(), PAYLOAD);
    let html = markup(&state);
    assert!(texts(&html, "script").is_empty());
    assert_eq!(
        texts(&html, "#summary-content p"),
        vec!["Partially true <script>alert(1)</script>"]
    );
}

#[test]
fn sections_start_expanded() {
    let state = displayed(AppState::new(), PAYLOAD);
    let html = markup(&state);
    assert_eq!(
        attr(&html, ".collapsible-header", "aria-expanded"),
        vec!["true", "true", "true"]
    );
    assert_eq!(texts(&html, ".collapse-icon"), vec!["▼", "▼", "▼"]);
    assert!(texts(&html, ".collapsed").is_empty());
}

#[test]
fn click_and_keys_toggle_one_section() {
    let state = displayed(AppState::new(), PAYLOAD);

    let (state, _) = update(state, Msg::SectionClicked(SectionId::KeyPoints));
    let html = markup(&state);
    assert_eq!(
        attr(&html, ".collapsible-header", "aria-expanded"),
        vec!["true", "false", "true"]
    );
    assert_eq!(texts(&html, ".collapse-icon"), vec!["▼", "►", "▼"]);
    assert_eq!(attr(&html, ".collapsed", "id"), vec!["keypoints-content"]);

    let (state, _) = update(
        state,
        Msg::SectionKeyPressed {
            section: SectionId::KeyPoints,
            key: Key::Space,
        },
    );
    let (state, _) = update(
        state,
        Msg::SectionKeyPressed {
            section: SectionId::Sources,
            key: Key::Enter,
        },
    );
    let (state, _) = update(
        state,
        Msg::SectionKeyPressed {
            section: SectionId::Summary,
            key: Key::Other,
        },
    );
    let html = markup(&state);
    assert_eq!(
        attr(&html, ".collapsible-header", "aria-expanded"),
        vec!["true", "true", "false"]
    );
}

#[test]
fn new_result_resets_sections() {
    let state = displayed(AppState::new(), PAYLOAD);
    let (state, _) = update(state, Msg::SectionClicked(SectionId::Summary));
    let state = displayed(state, PAYLOAD);
    assert!(state.sections().is_expanded(SectionId::Summary));
}

#[test]
fn flat_layout_has_no_toggles() {
    let state = displayed(AppState::with_options(Locale::Portuguese, false), PAYLOAD);
    let (state, _) = update(state, Msg::SectionClicked(SectionId::Summary));
    assert_eq!(state.view().phase, UiPhase::ResultDisplayed);

    let html = markup(&state);
    assert!(texts(&html, ".collapsible-header").is_empty());
    assert_eq!(
        texts(&html, ".result-section h4"),
        vec!["📄 Resumo da Apuração", "🎯 Pontos-Chave", "🔗 Fontes Consultadas"]
    );
    assert_eq!(texts(&html, ".verdict-title"), vec!["Veredito: inaccurate"]);
}

#[test]
fn missing_lists_render_empty_sections() {
    let state = displayed(AppState::new(), br#"{"verdict": "INSUFICIENTE"}"#);
    let html = markup(&state);
    assert!(texts(&html, "li").is_empty());
    assert!(texts(&html, ".source-item").is_empty());
    assert_eq!(texts(&html, ".verdict-icon"), vec!["❓"]);
}

#[test]
fn error_panel_shows_one_cross_in_every_locale() {
    for locale in [Locale::English, Locale::Portuguese] {
        let markup = render_error("rate limited", locale);
        assert_eq!(markup.matches('❌').count(), 1, "{locale}");
        let html = Html::parse_fragment(&markup);
        assert_eq!(
            texts(&html, ".verdict-title"),
            vec![locale.strings().error_title.to_string()]
        );
    }
}
