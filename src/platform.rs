//! Keyboard shortcut labels shown in the status bar

/// Submit the form from any field
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Toggle password visibility
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

/// Quit the application
pub const QUIT_SHORTCUT: &str = "Ctrl+Q";
