//! Application state and business logic
//!
//! This module contains the demo's state machine:
//! - `App` struct: the card carousel and the indicator row following it
//! - Navigation, which goes through the carousel so the indicators only ever
//!   learn about it from page-change events
//! - Card and cap edits, which rebuild the indicator row

mod mode;

use card_indicator::config::{AppConfig, IndicatorConfig};
use card_indicator::indicator::{IndicatorCap, IndicatorController};
use card_indicator::pager::{Carousel, PagerHost};
use tracing::{info, warn};

pub use mode::Mode;

/// Cap used when leaving unlimited mode for the first time
const DEFAULT_LIMITED_CAP: usize = 5;

/// One page of the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub number: usize,
    pub title: String,
    pub body: String,
}

impl Card {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            title: format!("Card {}", number),
            body: format!("This is card number {}. Swipe with h and l.", number),
        }
    }
}

/// Main application state
pub struct App {
    /// The pages being swiped
    pub carousel: Carousel<Card>,
    /// Indicator row following the carousel
    pub indicators: IndicatorController,
    /// Current UI mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Error message to display (clears on next action)
    pub error: Option<String>,
    /// Success message to display (clears on next action)
    pub message: Option<String>,
    /// Cap restored when unlimited mode is toggled off
    remembered_cap: usize,
    /// Number given to the next added card
    next_card: usize,
}

impl App {
    // =========================================================================
    // Initialization
    // =========================================================================

    /// Create a new App from configuration
    pub fn new(config: &AppConfig) -> Self {
        let cards = (1..=config.pages).map(Card::new).collect();
        let mut carousel = Carousel::new(cards);
        let mut indicators = IndicatorController::new(config.indicator.clone());
        indicators.rebuild(&mut carousel);

        Self {
            carousel,
            remembered_cap: config
                .indicator
                .indicators_to_show
                .get()
                .unwrap_or(DEFAULT_LIMITED_CAP),
            indicators,
            mode: Mode::Normal,
            should_quit: false,
            error: None,
            message: None,
            next_card: config.pages + 1,
        }
    }

    /// Clear any displayed messages
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.message = None;
    }

    /// Deliver queued carousel notifications to the indicator row
    fn pump_events(&mut self) {
        let Some(id) = self.indicators.subscription() else {
            return;
        };
        for change in self.carousel.drain_events(id) {
            if let Err(e) = self.indicators.handle(change) {
                warn!(?change, "Indicator rejected page change: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Current page, 0-based
    pub fn current_page(&self) -> usize {
        self.carousel.current_item()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.carousel.current_page()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Swipe to the next card
    pub fn next_page(&mut self) {
        if self.carousel.swipe_next() {
            self.pump_events();
        }
    }

    /// Swipe to the previous card
    pub fn prev_page(&mut self) {
        if self.carousel.swipe_prev() {
            self.pump_events();
        }
    }

    pub fn first_page(&mut self) {
        self.carousel.set_current_item(0);
        self.pump_events();
    }

    pub fn last_page(&mut self) {
        let last = self.carousel.page_count().saturating_sub(1);
        self.carousel.set_current_item(last);
        self.pump_events();
    }

    /// Start typing a page number
    pub fn start_jump(&mut self) {
        if !self.carousel.is_empty() {
            self.mode = Mode::JumpTo {
                input: String::new(),
            };
        }
    }

    /// Jump to the typed page number (1-based)
    pub fn apply_jump(&mut self) {
        let Mode::JumpTo { ref input } = self.mode else {
            return;
        };
        let count = self.carousel.page_count();
        match input.trim().parse::<usize>() {
            Ok(page) if (1..=count).contains(&page) => {
                self.carousel.set_current_item(page - 1);
                self.pump_events();
            }
            _ => {
                self.error = Some(format!("Enter a page between 1 and {}", count));
            }
        }
        self.mode = Mode::Normal;
    }

    // =========================================================================
    // Card edits
    // =========================================================================

    /// Append a card and rebuild the indicators
    pub fn add_card(&mut self) {
        self.carousel.push_page(Card::new(self.next_card));
        self.next_card += 1;
        self.indicators.rebuild(&mut self.carousel);
        self.message = Some(format!("Added card ({} total)", self.carousel.page_count()));
    }

    /// Ask before removing the current card
    pub fn start_remove(&mut self) {
        if self.carousel.is_empty() {
            self.error = Some("No cards to remove".to_string());
        } else {
            self.mode = Mode::ConfirmRemove;
        }
    }

    /// Remove the current card and rebuild the indicators
    pub fn confirm_remove(&mut self) {
        let current = self.carousel.current_item();
        if let Some(card) = self.carousel.remove_page(current) {
            self.indicators.rebuild(&mut self.carousel);
            self.message = Some(format!("Removed {}", card.title));
        }
        self.mode = Mode::Normal;
    }

    // =========================================================================
    // Indicator settings
    // =========================================================================

    fn set_cap(&mut self, cap: IndicatorCap) {
        info!(%cap, "Setting indicator cap");
        if let Some(n) = cap.get() {
            self.remembered_cap = n;
        }
        self.indicators.set_cap(cap, &mut self.carousel);
        self.message = Some(format!("Showing {} indicators", cap));
    }

    /// Show one more indicator
    pub fn increase_cap(&mut self) {
        match self.indicators.cap().get() {
            Some(n) => match IndicatorCap::limited(n + 1) {
                Ok(cap) => self.set_cap(cap),
                Err(e) => self.error = Some(e.to_string()),
            },
            None => self.message = Some("Already unlimited; press u to cap".to_string()),
        }
    }

    /// Show one fewer indicator
    pub fn decrease_cap(&mut self) {
        let n = self.indicators.cap().get().unwrap_or(self.remembered_cap + 1);
        match IndicatorCap::limited(n - 1) {
            Ok(cap) => self.set_cap(cap),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Switch between unlimited and the last finite cap
    pub fn toggle_unlimited(&mut self) {
        if self.indicators.cap().is_unlimited() {
            match IndicatorCap::limited(self.remembered_cap) {
                Ok(cap) => self.set_cap(cap),
                Err(e) => self.error = Some(e.to_string()),
            }
        } else {
            self.set_cap(IndicatorCap::Unlimited);
        }
    }

    /// Switch how the window follows multi-page jumps
    pub fn toggle_jump_policy(&mut self) {
        let config = IndicatorConfig {
            jump_policy: self.indicators.config().jump_policy.toggled(),
            ..self.indicators.config().clone()
        };
        let policy = config.jump_policy;
        self.indicators.configure(config, &mut self.carousel);
        self.message = Some(format!("Jump policy: {}", policy));
    }

    // =========================================================================
    // Mode helpers
    // =========================================================================

    pub fn show_help(&mut self) {
        self.mode = Mode::Help;
    }

    /// Return to normal mode
    pub fn cancel(&mut self) {
        self.mode = Mode::Normal;
    }
}
