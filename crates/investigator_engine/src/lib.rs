//! Investigator engine: HTTP client and effect execution.
mod client;
mod engine;
mod page;
mod types;

pub use client::{ClientSettings, Investigator, ReqwestInvestigator, DEFAULT_ENDPOINT};
pub use engine::EngineHandle;
pub use page::{ensure_output_dir, AtomicFileWriter, PersistError, RESULT_PAGE_FILENAME};
pub use types::{EngineEvent, HealthStatus};
