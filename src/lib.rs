//! Windowed page indicators for swiped card carousels.
//!
//! [`indicator::IndicatorController`] keeps one indicator per page and, given
//! page-selected events from a [`pager::PagerHost`], decides for each one
//! whether it is drawn normally, shrunken at a window edge, or hidden.
//! [`widget::IndicatorRow`] draws the result with ratatui.

pub mod config;
pub mod indicator;
pub mod pager;
pub mod widget;
