use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::engine_error;
use investigator_core::{InvestigationError, InvestigationRequest};

use crate::client::{ClientSettings, Investigator, ReqwestInvestigator};
use crate::EngineEvent;

enum EngineCommand {
    Investigate { request: InvestigationRequest },
    CheckHealth,
}

#[derive(Debug, Clone, Copy)]
enum CommandKind {
    Investigate,
    CheckHealth,
}

impl EngineCommand {
    fn kind(&self) -> CommandKind {
        match self {
            EngineCommand::Investigate { .. } => CommandKind::Investigate,
            EngineCommand::CheckHealth => CommandKind::CheckHealth,
        }
    }
}

impl CommandKind {
    /// The event reported when the command's task dies before answering.
    fn failed(self, err: InvestigationError) -> EngineEvent {
        match self {
            CommandKind::Investigate => EngineEvent::InvestigationCompleted(Err(err)),
            CommandKind::CheckHealth => EngineEvent::HealthChecked(Err(err)),
        }
    }
}

/// Runs investigations on a background tokio runtime.
///
/// Every submitted command produces exactly one event, including when the
/// task executing it panics.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> io::Result<Self> {
        Self::with_investigator(Arc::new(ReqwestInvestigator::new(settings)))
    }

    pub fn with_investigator(investigator: Arc<dyn Investigator>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("investigator-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let investigator = investigator.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let kind = command.kind();
                        let task = tokio::spawn(execute(investigator, command));
                        let event = match task.await {
                            Ok(event) => event,
                            Err(join_err) => {
                                engine_error!("Investigation task aborted: {}", join_err);
                                kind.failed(InvestigationError::Network(format!(
                                    "investigation task aborted: {join_err}"
                                )))
                            }
                        };
                        let _ = event_tx.send(event);
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request: InvestigationRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Investigate { request });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn execute(investigator: Arc<dyn Investigator>, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Investigate { request } => {
            EngineEvent::InvestigationCompleted(investigator.investigate(&request).await)
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked(investigator.health().await),
    }
}
