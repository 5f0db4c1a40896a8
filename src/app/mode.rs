//! Application modes
//!
//! Defines the states the demo can be in while browsing cards.

/// The current mode/state of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Swiping through cards
    Normal,
    /// Typing a page number to jump to
    JumpTo { input: String },
    /// Confirming removal of the current card
    ConfirmRemove,
    /// Showing help
    Help,
}

impl Mode {
    /// Footer hints for this mode
    pub fn hints(&self) -> &'static str {
        match self {
            Mode::Normal => {
                "  ? help  hl swipe  gG ends  : jump  a add  x remove  +- cap  u unlimited  p policy  q quit"
            }
            Mode::JumpTo { .. } => "  ⏎ jump  esc cancel",
            Mode::ConfirmRemove => "  y/⏎ confirm  n/esc cancel",
            Mode::Help => "  q close",
        }
    }
}
