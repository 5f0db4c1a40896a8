//! Page-indicator row that follows a card carousel.
//!
//! - `window`: pure window sliding and per-dot classification
//! - `controller`: slot ownership and page-selection handling
//! - `view`: the per-slot binding the controller writes into

mod controller;
mod error;
mod view;
mod window;

pub use controller::{IndicatorController, SelectionState};
pub use error::IndicatorError;
pub use view::{Appearance, IndicatorSlot, IndicatorView, INFINITE_SCALE_FACTOR};
pub use window::{
    classify, init_range, slide, snap, IndicatorCap, JumpPolicy, SwipeDirection, VisualState,
    WindowRange, WindowState, UNLIMITED_INDICATORS,
};
