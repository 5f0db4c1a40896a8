//! Indicator windowing: which dots are visible, and how.
//!
//! The window is an inclusive range of indicator indices that may be drawn.
//! It slides by one step when the selection reaches one of its edges while
//! moving towards that edge. Dots at the window edges are drawn shrunken
//! ("infinity dots") unless they sit at the true ends of the row.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::error::IndicatorError;

/// Cap value that disables windowing.
pub const UNLIMITED_INDICATORS: i32 = -1;

/// Maximum number of indicators shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum IndicatorCap {
    /// Every indicator is shown at full size
    #[default]
    Unlimited,
    /// At most this many indicators are shown
    Limited(NonZeroUsize),
}

impl IndicatorCap {
    /// Build a finite cap, rejecting zero.
    pub fn limited(count: usize) -> Result<Self, IndicatorError> {
        NonZeroUsize::new(count)
            .map(IndicatorCap::Limited)
            .ok_or(IndicatorError::InvalidCap(0))
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, IndicatorCap::Unlimited)
    }

    /// The finite cap, if any.
    pub fn get(self) -> Option<usize> {
        match self {
            IndicatorCap::Unlimited => None,
            IndicatorCap::Limited(n) => Some(n.get()),
        }
    }
}

impl TryFrom<i32> for IndicatorCap {
    type Error = IndicatorError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            UNLIMITED_INDICATORS => Ok(IndicatorCap::Unlimited),
            n if n >= 1 => IndicatorCap::limited(n as usize),
            n => Err(IndicatorError::InvalidCap(n.into())),
        }
    }
}

impl From<IndicatorCap> for i32 {
    fn from(cap: IndicatorCap) -> Self {
        match cap {
            IndicatorCap::Unlimited => UNLIMITED_INDICATORS,
            IndicatorCap::Limited(n) => i32::try_from(n.get()).unwrap_or(i32::MAX),
        }
    }
}

impl fmt::Display for IndicatorCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorCap::Unlimited => write!(f, "unlimited"),
            IndicatorCap::Limited(n) => write!(f, "{}", n),
        }
    }
}

/// Direction of the last page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeDirection {
    #[default]
    ToEnd,
    ToStart,
}

impl SwipeDirection {
    /// Direction of travel from `from` to `to`, or `None` when they are equal.
    pub fn between(from: usize, to: usize) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(SwipeDirection::ToEnd),
            std::cmp::Ordering::Less => Some(SwipeDirection::ToStart),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// How the window follows a selection that moves more than one page at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JumpPolicy {
    /// Slide at most one step per event; the window may lag behind a jump
    #[default]
    SingleStep,
    /// Move the window so it contains the selection
    SnapToContain,
}

impl JumpPolicy {
    pub fn toggled(self) -> Self {
        match self {
            JumpPolicy::SingleStep => JumpPolicy::SnapToContain,
            JumpPolicy::SnapToContain => JumpPolicy::SingleStep,
        }
    }
}

impl fmt::Display for JumpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpPolicy::SingleStep => write!(f, "single-step"),
            JumpPolicy::SnapToContain => write!(f, "snap"),
        }
    }
}

/// Display state of one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Full size, standard trailing margin
    #[default]
    Normal,
    /// Not shown, takes no space
    Hidden,
    /// Full size, no trailing margin (end of row)
    Last,
    /// Shrunken, more pages hidden before it
    InfiniteStart,
    /// Shrunken, more pages hidden after it
    InfiniteEnd,
}

impl VisualState {
    pub fn is_visible(self) -> bool {
        self != VisualState::Hidden
    }

    pub fn is_shrunk(self) -> bool {
        matches!(self, VisualState::InfiniteStart | VisualState::InfiniteEnd)
    }
}

/// Inclusive range `[first, last]` of indicator indices eligible to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub first: usize,
    pub last: usize,
}

impl WindowRange {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "window [{first}, {last}] is inverted");
        Self { first, last }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    pub fn width(&self) -> usize {
        self.last - self.first + 1
    }

    /// Shift back by one, staying put at index 0.
    pub fn decrement(self) -> Self {
        if self.first == 0 {
            self
        } else {
            Self::new(self.first - 1, self.last - 1)
        }
    }

    /// Shift forward by one, staying put at `last_index`.
    pub fn increment(self, last_index: usize) -> Self {
        if self.last >= last_index {
            self
        } else {
            Self::new(self.first + 1, self.last + 1)
        }
    }
}

impl fmt::Display for WindowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.first, self.last)
    }
}

/// Initial window for `total_count` indicators, or `None` when there are none.
pub fn init_range(cap: IndicatorCap, total_count: usize) -> Option<WindowRange> {
    let last_index = total_count.checked_sub(1)?;
    let last = match cap {
        IndicatorCap::Unlimited => last_index,
        IndicatorCap::Limited(n) => (n.get() - 1).min(last_index),
    };
    Some(WindowRange::new(0, last))
}

/// Slide the window one step when the selection sits on the edge it is moving
/// towards. The start edge is checked first.
pub fn slide(
    range: WindowRange,
    direction: SwipeDirection,
    selected: usize,
    last_index: usize,
) -> WindowRange {
    if selected == range.first && direction == SwipeDirection::ToStart {
        range.decrement()
    } else if selected == range.last && direction == SwipeDirection::ToEnd {
        range.increment(last_index)
    } else {
        range
    }
}

/// Move the window so it contains `selected`, keeping its width and leaving one
/// page of look-ahead in the direction of travel where there is room.
///
/// A selection still inside the window is handed to [`slide`], so a move of a
/// single page gives the same window under either policy.
pub fn snap(
    range: WindowRange,
    direction: SwipeDirection,
    selected: usize,
    last_index: usize,
) -> WindowRange {
    let width = range.width();
    let lookahead = (width - 1).min(1);

    if selected < range.first {
        let first = selected.saturating_sub(lookahead);
        WindowRange::new(first, first + width - 1)
    } else if selected > range.last {
        let last = (selected + lookahead).min(last_index).max(width - 1);
        WindowRange::new(last + 1 - width, last)
    } else {
        slide(range, direction, selected, last_index)
    }
}

/// Classify one indicator against the (already slid) window.
///
/// Rules apply in order; index 0 is never an infinity-start dot and the final
/// index is never an infinity-end dot.
pub fn classify(index: usize, range: WindowRange, last_index: usize) -> VisualState {
    if index != 0 && index == range.first {
        VisualState::InfiniteStart
    } else if index != last_index && index == range.last {
        VisualState::InfiniteEnd
    } else if index == last_index && range.contains(index) {
        VisualState::Last
    } else if range.contains(index) {
        VisualState::Normal
    } else {
        VisualState::Hidden
    }
}

/// Window bookkeeping for one set of indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    cap: IndicatorCap,
    range: Option<WindowRange>,
    last_index: Option<usize>,
}

impl WindowState {
    pub fn new(cap: IndicatorCap, total_count: usize) -> Self {
        Self {
            cap,
            range: init_range(cap, total_count),
            last_index: total_count.checked_sub(1),
        }
    }

    pub fn cap(&self) -> IndicatorCap {
        self.cap
    }

    /// Current window, `None` when there are no indicators.
    pub fn range(&self) -> Option<WindowRange> {
        self.range
    }

    /// Advance the window for a selection event and return the new range.
    pub fn advance(
        &mut self,
        direction: SwipeDirection,
        selected: usize,
        policy: JumpPolicy,
    ) -> Option<WindowRange> {
        let (range, last_index) = (self.range?, self.last_index?);
        let next = match policy {
            JumpPolicy::SingleStep => slide(range, direction, selected, last_index),
            JumpPolicy::SnapToContain => snap(range, direction, selected, last_index),
        };
        self.range = Some(next);
        self.range
    }

    /// Place the window around `selected` regardless of policy.
    pub fn place(&mut self, direction: SwipeDirection, selected: usize) -> Option<WindowRange> {
        let (range, last_index) = (self.range?, self.last_index?);
        self.range = Some(snap(range, direction, selected, last_index));
        self.range
    }

    /// Visual state of `index`; always `Normal` in unlimited mode.
    pub fn classify(&self, index: usize) -> VisualState {
        match (self.cap, self.range, self.last_index) {
            (IndicatorCap::Unlimited, _, _) => VisualState::Normal,
            (_, Some(range), Some(last_index)) => classify(index, range, last_index),
            _ => VisualState::Hidden,
        }
    }
}
