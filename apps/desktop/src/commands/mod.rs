//! Commands exposed to the frontend.

pub mod flashcards;
pub mod notes;
pub mod session;
pub mod settings;
pub mod stats;

pub use flashcards::{get_flashcards, highlight_answer, CommandError, ErrorKind, HighlightedAnswer};
pub use notes::get_notes;
pub use session::{
    abandon_session, get_current_card, save_session, start_session, submit_answer,
    SubmitResponse,
};
pub use settings::{get_settings, reset_settings, set_notes_directory, update_settings};
pub use stats::{get_activity, list_sessions};
