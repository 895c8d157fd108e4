use engine_logging::{engine_debug, engine_info, engine_warn};
use investigator_core::{Effect, InvestigationError, Msg, Theme, ThemeStore};
use investigator_engine::{EngineEvent, EngineHandle, HealthStatus};

/// Executes effects against the engine and the theme store.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Box<dyn ThemeStore>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, store: Box<dyn ThemeStore>) -> Self {
        Self { engine, store }
    }

    pub fn stored_theme(&self) -> Option<Theme> {
        self.store.load()
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitInvestigation { request } => {
                    engine_info!(
                        "SubmitInvestigation kind={} lead_len={}",
                        request.kind(),
                        request.lead().len()
                    );
                    self.engine.submit(request);
                }
                Effect::PersistTheme(theme) => {
                    if let Err(err) = self.store.save(theme) {
                        engine_warn!("Theme {} not persisted: {}", theme, err);
                    }
                }
            }
        }
    }

    /// Blocks until the in-flight investigation settles and returns the
    /// message reporting it. A vanished engine counts as a network failure.
    pub fn wait_for_completion(&self) -> Msg {
        loop {
            match self.engine.recv() {
                Some(EngineEvent::InvestigationCompleted(Ok(result))) => {
                    return Msg::InvestigationSucceeded(result);
                }
                Some(EngineEvent::InvestigationCompleted(Err(err))) => {
                    return Msg::InvestigationFailed(err);
                }
                Some(EngineEvent::HealthChecked(_)) => {
                    engine_debug!("Ignoring health result while waiting for investigation");
                }
                None => {
                    return Msg::InvestigationFailed(InvestigationError::Network(
                        "investigation engine stopped".to_string(),
                    ));
                }
            }
        }
    }

    pub fn check_health(&self) -> Result<HealthStatus, InvestigationError> {
        self.engine.check_health();
        loop {
            match self.engine.recv() {
                Some(EngineEvent::HealthChecked(result)) => return result,
                Some(EngineEvent::InvestigationCompleted(_)) => {
                    engine_debug!("Ignoring investigation result while waiting for health");
                }
                None => {
                    return Err(InvestigationError::Network(
                        "investigation engine stopped".to_string(),
                    ));
                }
            }
        }
    }
}
