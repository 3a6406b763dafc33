//! Application layer - Use cases and orchestration

pub mod app;
pub mod autosave;
pub mod event_loop;
pub mod events;
pub mod init;
pub mod manage_config;

pub use app::DiaryApp;
pub use autosave::DraftAutosave;
pub use event_loop::{Outputs, Presenter};
pub use events::{AppEvent, Effect, KeyCombo, Render, Tab};
pub use manage_config::ConfigService;
