//! Stateful side of the indicator row.
//!
//! The controller owns one slot per page, the committed selection and the
//! window. It turns page-selected events from the host pager into per-slot
//! visual states.

use tracing::{debug, trace};

use super::error::IndicatorError;
use super::view::{IndicatorSlot, IndicatorView};
use super::window::{IndicatorCap, SwipeDirection, VisualState, WindowRange, WindowState};
use crate::config::IndicatorConfig;
use crate::pager::{ListenerId, PageChange, PagerHost};

/// Last committed selection and the direction it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_position: usize,
    pub swipe_direction: SwipeDirection,
}

/// Drives a row of indicator views from page-selection events.
pub struct IndicatorController<V = IndicatorSlot> {
    config: IndicatorConfig,
    window: WindowState,
    selection: SelectionState,
    slots: Vec<V>,
    subscription: Option<ListenerId>,
}

impl<V: IndicatorView + Default> Default for IndicatorController<V> {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl<V: IndicatorView + Default> IndicatorController<V> {
    /// Create a controller with no indicators. Call [`rebuild`](Self::rebuild)
    /// or [`reset`](Self::reset) once pages are known.
    pub fn new(config: IndicatorConfig) -> Self {
        let window = WindowState::new(config.indicators_to_show, 0);
        Self {
            config,
            window,
            selection: SelectionState::default(),
            slots: Vec::new(),
            subscription: None,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn cap(&self) -> IndicatorCap {
        self.config.indicators_to_show
    }

    pub fn slots(&self) -> &[V] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected_position(&self) -> usize {
        self.selection.selected_position
    }

    pub fn swipe_direction(&self) -> SwipeDirection {
        self.selection.swipe_direction
    }

    /// Current window, `None` while there are no indicators.
    pub fn range(&self) -> Option<WindowRange> {
        self.window.range()
    }

    pub fn subscription(&self) -> Option<ListenerId> {
        self.subscription
    }

    /// Replace all indicators with `total_count` fresh ones and select page 0.
    pub fn reset(&mut self, total_count: usize) {
        self.reset_at(total_count, 0);
    }

    /// Rebuild from the host pager and (re)subscribe to its page changes.
    ///
    /// Reads the page count and current item once. Any previous subscription
    /// on `pager` is dropped first, so at most one is ever active.
    pub fn rebuild<P: PagerHost + ?Sized>(&mut self, pager: &mut P) {
        let total_count = pager.page_count();
        let current = pager.current_item().min(total_count.saturating_sub(1));
        self.reset_at(total_count, current);

        if let Some(previous) = self.subscription.take() {
            pager.remove_page_change_listener(previous);
        }
        self.subscription = Some(pager.add_page_change_listener());
    }

    /// Stop following `pager`.
    pub fn detach<P: PagerHost + ?Sized>(&mut self, pager: &mut P) {
        if let Some(id) = self.subscription.take() {
            pager.remove_page_change_listener(id);
        }
    }

    /// Change the cap. The pager goes back to its first page and the row is
    /// rebuilt around it.
    pub fn set_cap<P: PagerHost + ?Sized>(&mut self, cap: IndicatorCap, pager: &mut P) {
        debug!(from = %self.config.indicators_to_show, to = %cap, "Changing indicator cap");
        self.config.indicators_to_show = cap;
        pager.set_current_item(0);
        self.rebuild(pager);
    }

    /// Replace the whole configuration and rebuild from `pager`.
    pub fn configure<P: PagerHost + ?Sized>(&mut self, config: IndicatorConfig, pager: &mut P) {
        let cap_changed = config.indicators_to_show != self.config.indicators_to_show;
        self.config = config;
        if cap_changed {
            pager.set_current_item(0);
        }
        self.rebuild(pager);
    }

    fn reset_at(&mut self, total_count: usize, current: usize) {
        // Stage the new row and swap it in once it is fully classified.
        let mut window = WindowState::new(self.config.indicators_to_show, total_count);
        let mut slots: Vec<V> = (0..total_count).map(|_| V::default()).collect();
        let selection = SelectionState {
            selected_position: current,
            swipe_direction: SwipeDirection::between(0, current).unwrap_or_default(),
        };

        if total_count > 0 {
            if current == 0 {
                window.advance(selection.swipe_direction, 0, self.config.jump_policy);
            } else {
                window.place(selection.swipe_direction, current);
            }
            apply(&window, &mut slots, current);
        }

        debug!(
            total_count,
            current,
            cap = %self.config.indicators_to_show,
            range = ?window.range(),
            "Rebuilt indicators"
        );

        self.window = window;
        self.slots = slots;
        self.selection = selection;
    }

    /// Apply a page-selected event.
    ///
    /// Rejects positions outside `[0, len)` without touching any state.
    pub fn on_page_selected(&mut self, position: usize) -> Result<(), IndicatorError> {
        if position >= self.slots.len() {
            debug!(position, count = self.slots.len(), "Rejected page selection");
            return Err(IndicatorError::InvalidPosition {
                position,
                count: self.slots.len(),
            });
        }

        if let Some(direction) = SwipeDirection::between(self.selection.selected_position, position)
        {
            self.selection.swipe_direction = direction;
        }

        let before = self.window.range();
        let after = self.window.advance(
            self.selection.swipe_direction,
            position,
            self.config.jump_policy,
        );
        if before != after {
            trace!(?before, ?after, "Window slid");
        }

        apply(&self.window, &mut self.slots, position);
        self.selection.selected_position = position;
        trace!(position, direction = ?self.selection.swipe_direction, "Selected page");
        Ok(())
    }

    /// Handle a pager notification. Only page selections change state.
    pub fn handle(&mut self, change: PageChange) -> Result<(), IndicatorError> {
        match change {
            PageChange::Selected(position) => self.on_page_selected(position),
            PageChange::Scrolled { .. } | PageChange::ScrollStateChanged(_) => Ok(()),
        }
    }

    /// Visual state of every slot, in order.
    pub fn visual_states(&self) -> Vec<VisualState> {
        (0..self.slots.len())
            .map(|index| self.window.classify(index))
            .collect()
    }
}

fn apply<V: IndicatorView>(window: &WindowState, slots: &mut [V], selected: usize) {
    for (index, slot) in slots.iter_mut().enumerate() {
        slot.set_selected(index == selected);
        slot.set_visual_state(window.classify(index));
    }
}
