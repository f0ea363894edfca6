pub mod menu;
pub mod prompt;
pub mod user_interface;

// Re-export the main types and functions
pub use menu::{MenuState, ProfileChoice, TopChoice};
pub use prompt::{Prompter, TerminalPrompter};
pub use user_interface::{run_session, step};
