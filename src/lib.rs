// Editor library - exposes the edit timeline and its drivers

pub mod config;
pub mod editor;
pub mod model;
pub mod script;
#[cfg(feature = "runtime")]
pub mod services;

pub use editor::Editor;
pub use model::history::{History, HistoryInfo, DEFAULT_MAX_HISTORY};
pub use model::operation::Operation;
pub use model::snapshot::Snapshot;
