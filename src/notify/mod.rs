//! Confirmation prompts and user notifications
//!
//! Deletes block on a yes/no confirmation and mutations surface a
//! user-visible acknowledgment. Both are traits so view logic stays
//! testable without a terminal attached.

use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Blocking yes/no confirmation shown before destructive operations
pub trait ConfirmPrompt {
    /// Ask the user to confirm; `false` aborts the operation
    fn confirm(&self, message: &str) -> bool;
}

/// Sink for user-visible acknowledgments
pub trait Notifier {
    /// Report a successful operation
    fn success(&self, message: &str);

    /// Report a failed operation
    fn error(&self, message: &str);
}

/// Prompt that reads a y/n answer from stdin
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Prompt that accepts everything, for non-interactive use
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Notifier that writes acknowledgments to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Notifier that swallows acknowledgments, for views without toasts
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
