use crate::shortcuts::ShortcutAction;

mod args;

pub use args::{Cli, CliCommand};

/// Print the shortcut map the session router handles.
pub fn handle_shortcuts_command() {
    println!("Keyboard shortcuts:");
    for action in ShortcutAction::ALL {
        println!("  {:<14} {}", action.key_hint(), action.description());
    }
    println!();
    println!("Shortcuts are ignored while a text field has focus.");
}
