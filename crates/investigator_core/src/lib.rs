//! Investigator core: pure state machine, wire types and markup rendering.
mod effect;
mod error;
mod locale;
mod markup;
mod msg;
mod payload;
mod request;
mod state;
mod theme;
mod update;
mod verdict;
mod view_model;

pub use effect::Effect;
pub use error::{InvestigationError, PayloadError, ServerDetail};
pub use locale::{Locale, Strings, UnknownLocale, EXAMPLE_KEYS};
pub use markup::{render_error, render_page, render_result, RenderOptions};
pub use msg::{Key, KeyPress, Msg};
pub use payload::{InvestigationResult, Source};
pub use request::{classify_input, InvestigationRequest};
pub use state::{AppState, SectionId, Sections, UiState, UnknownSection};
pub use theme::{MemoryThemeStore, Theme, ThemeStore, ThemeStoreError};
pub use update::update;
pub use verdict::{verdict_icon, Verdict};
pub use view_model::{AppViewModel, UiPhase};
