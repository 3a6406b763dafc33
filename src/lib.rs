//! blossom - Personal diary and time utility
//!
//! Keeps short diary entries with an autosaved draft, a private viewing mode and
//! cosmetic themes, plus a lap stopwatch and a countdown timer. All state is
//! persisted to a key-value store inside the diary directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::BlossomError;
