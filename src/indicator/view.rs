//! Per-indicator view binding.
//!
//! The controller pushes values into each slot; slots never read controller
//! state back.

use super::window::VisualState;

/// Scale applied to infinity dots at the window edges.
pub const INFINITE_SCALE_FACTOR: f32 = 0.5;

/// Receives the state computed for one indicator.
pub trait IndicatorView {
    fn set_visual_state(&mut self, state: VisualState);
    fn set_selected(&mut self, selected: bool);
}

/// Plain indicator slot holding the last values it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorSlot {
    pub selected: bool,
    pub state: VisualState,
}

impl IndicatorView for IndicatorSlot {
    fn set_visual_state(&mut self, state: VisualState) {
        self.state = state;
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl IndicatorSlot {
    pub fn appearance(&self, spacing: f32) -> Appearance {
        Appearance::of(self.state, spacing)
    }
}

/// Concrete layout for a visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub visible: bool,
    pub scale: f32,
    /// Space after the indicator
    pub margin_end: f32,
}

impl Appearance {
    pub fn of(state: VisualState, spacing: f32) -> Self {
        let (visible, scale, margin_end) = match state {
            VisualState::Normal => (true, 1.0, spacing),
            VisualState::Hidden => (false, 1.0, 0.0),
            VisualState::Last => (true, 1.0, 0.0),
            VisualState::InfiniteStart => (true, INFINITE_SCALE_FACTOR, spacing),
            VisualState::InfiniteEnd => (true, INFINITE_SCALE_FACTOR, 0.0),
        };
        Self {
            visible,
            scale,
            margin_end,
        }
    }
}
