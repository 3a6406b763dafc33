//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod notify;
pub mod repository;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use notify::{AudioCue, ConsoleNotifier, Notifier, Severity, TerminalBell};
pub use repository::{DiaryRepository, FileSystemRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
