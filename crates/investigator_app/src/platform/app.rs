use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use engine_logging::engine_info;
use investigator_core::{
    render_page, update, AppState, Msg, UiState, EXAMPLE_KEYS,
};
use investigator_engine::{AtomicFileWriter, EngineHandle, RESULT_PAGE_FILENAME};

use super::effects::EffectRunner;
use super::logging;
use super::persistence::FileThemeStore;
use super::shell;
use super::ui::render::render;
use super::ui::surface::{Surface, TerminalSurface};
use crate::config::{AppConfig, Cli, Command, ThemeAction};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::from_cli(&cli)?;
    logging::initialize(config.log, config.level, &config.state_dir);
    engine_info!(
        "Starting investigator endpoint={} locale={}",
        config.client.endpoint,
        config.locale
    );

    let engine =
        EngineHandle::new(config.client.clone()).context("failed to start investigation engine")?;
    let store = FileThemeStore::new(config.state_dir.clone());
    let runner = EffectRunner::new(engine, Box::new(store));
    let state = AppState::with_options(config.locale, config.collapsible);
    let mut controller = Controller::new(state, runner, TerminalSurface::stdout());
    controller.start();

    match cli.command {
        Command::Investigate { lead, html } => {
            controller.dispatch(Msg::InputChanged(lead.join(" ")));
            investigate(&mut controller, html.as_deref())
        }
        Command::Example {
            key,
            html,
            load_only,
        } => {
            controller.dispatch(Msg::ExampleSelected(key.clone()));
            if controller.state().input().is_empty() {
                bail!(
                    "unknown example `{key}`; expected one of: {}",
                    EXAMPLE_KEYS.join(", ")
                );
            }
            if load_only {
                return Ok(ExitCode::SUCCESS);
            }
            investigate(&mut controller, html.as_deref())
        }
        Command::Theme { action } => {
            match action {
                ThemeAction::Show => {
                    let theme = controller.state().theme();
                    println!("Theme: {theme} {}", theme.icon());
                }
                ThemeAction::Toggle => controller.dispatch(Msg::ThemeToggleClicked),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => match controller.runner().check_health() {
            Ok(health) => {
                match health.version {
                    Some(version) => println!("{} (version {version})", health.status),
                    None => println!("{}", health.status),
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("Service unavailable: {err}");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Shell => {
            shell::run(&mut controller, io::stdin().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn investigate<S: Surface>(controller: &mut Controller<S>, html: Option<&Path>) -> Result<ExitCode> {
    controller.dispatch(Msg::SubmitClicked);
    controller.settle();

    if let Some(dir) = html {
        write_page(controller.state(), dir)?;
    }

    Ok(match controller.state().ui() {
        UiState::ResultDisplayed(_) => ExitCode::SUCCESS,
        UiState::ErrorDisplayed(_) => ExitCode::FAILURE,
        // Validation rejected the lead before anything was sent.
        UiState::Idle | UiState::Loading => ExitCode::from(2),
    })
}

fn write_page(state: &AppState, dir: &Path) -> Result<()> {
    let Some(markup) = state.view().result_markup else {
        return Ok(());
    };
    let page = render_page(&markup, state.theme(), state.locale());
    let path = AtomicFileWriter::new(dir.to_path_buf())
        .write(RESULT_PAGE_FILENAME, &page)
        .with_context(|| format!("failed to write result page into {}", dir.display()))?;
    println!("Result page: {}", path.display());
    Ok(())
}

/// Owns the state machine and feeds it messages, effects and renders.
pub struct Controller<S: Surface> {
    state: AppState,
    runner: EffectRunner,
    surface: S,
}

impl<S: Surface> Controller<S> {
    pub fn new(state: AppState, runner: EffectRunner, surface: S) -> Self {
        Self {
            state,
            runner,
            surface,
        }
    }

    /// Applies the stored theme, or `light` when none is stored.
    pub fn start(&mut self) {
        let theme = self.runner.stored_theme().unwrap_or_default();
        self.dispatch(Msg::ThemeRestored(theme));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn runner(&self) -> &EffectRunner {
        &self.runner
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        let locale = state.locale();
        self.state = state;

        if was_dirty {
            self.surface.apply_all(render(&view, locale.strings()));
        }
        self.runner.run(effects);
    }

    /// Waits for the in-flight investigation, if any, and applies its outcome.
    pub fn settle(&mut self) {
        while self.state.is_loading() {
            let msg = self.runner.wait_for_completion();
            self.dispatch(msg);
        }
    }
}
