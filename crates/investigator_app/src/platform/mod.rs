mod app;
mod effects;
pub(crate) mod logging;
mod persistence;
mod shell;
mod ui;

pub use app::run;
