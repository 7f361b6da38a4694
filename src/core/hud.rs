//=========================================================================
// HUD Interface
//=========================================================================
//
// Text overlay consumed by the router and the level.
//
// Drawing is out of scope: implementations decide how prompts are shown.
// `LogHud` writes them through the `log` facade for headless runs.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Prompt Constants ====================================================

/// Title shown whenever a fresh level waits for the player.
pub const READY_TITLE: &str = "READY?";

/// Information line shown with [`READY_TITLE`].
pub const READY_INFORMATION: &str = "- Touch screen to start -";

//=== Hud Trait ===========================================================

/// Heads-up display receiving textual prompts.
pub trait Hud: Send {
    /// Shows a prompt with a title and a secondary information line.
    fn message(&mut self, title: &str, information: &str);

    /// Clears prompts and counters back to their initial state.
    fn reset(&mut self);

    /// Shows the standard "ready" prompt.
    fn show_ready(&mut self) {
        self.message(READY_TITLE, READY_INFORMATION);
    }
}

//=== LogHud ==============================================================

/// HUD that renders prompts as log lines and remembers the last one.
#[derive(Debug, Default)]
pub struct LogHud {
    last: Option<(String, String)>,
}

impl LogHud {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent `(title, information)` pair, if any.
    pub fn last_message(&self) -> Option<(&str, &str)> {
        self.last.as_ref().map(|(t, i)| (t.as_str(), i.as_str()))
    }
}

impl Hud for LogHud {
    fn message(&mut self, title: &str, information: &str) {
        info!(target: "hud", "{} {}", title, information);
        self.last = Some((title.to_owned(), information.to_owned()));
    }

    fn reset(&mut self) {
        info!(target: "hud", "HUD reset");
        self.last = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_hud_starts_empty() {
        assert!(LogHud::new().last_message().is_none());
    }

    #[test]
    fn show_ready_uses_standard_prompt() {
        let mut hud = LogHud::new();
        hud.show_ready();
        assert_eq!(hud.last_message(), Some((READY_TITLE, READY_INFORMATION)));
    }

    #[test]
    fn reset_clears_last_message() {
        let mut hud = LogHud::new();
        hud.message("GAME OVER", "- Touch screen to restart -");
        hud.reset();
        assert!(hud.last_message().is_none());
    }
}
