//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! Anything that blocks is returned as an [`Effect`] for the shell to run.

pub mod app_state;
pub mod effect;
pub mod modal_handler;
pub mod mode;

// Re-export for convenience
pub use app_state::{AppState, LoadState, PendingAction, SPINNER_FRAMES};
pub use effect::{AppEvent, Effect, RequestId, ADD_SUCCESS_DELAY};
pub use mode::{AddArticleModal, AddStatus, Mode, ReaderModal, ReaderStatus, ThemeModal};
