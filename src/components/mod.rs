//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod snippet_info_dialog;

pub use help_dialog::HelpDialog;
pub use home::HomeComponent;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use snippet_info_dialog::SnippetInfoDialog;
