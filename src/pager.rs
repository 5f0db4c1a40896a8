//! Host pager abstraction and an in-memory carousel implementing it.
//!
//! Page-change notifications are queued per listener and drained by whoever
//! holds the listener id, so delivery stays on the caller's thread and in
//! order.

use std::collections::VecDeque;

use tracing::trace;

/// Handle for one page-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Scroll phase reported by the pager while a swipe is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Dragging,
    Settling,
}

/// Notification emitted by a pager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageChange {
    /// A page became the current one
    Selected(usize),
    /// Scroll progress between `position` and the next page
    Scrolled { position: usize, offset: f32 },
    ScrollStateChanged(ScrollPhase),
}

/// The carousel the indicators follow.
pub trait PagerHost {
    fn page_count(&self) -> usize;
    fn current_item(&self) -> usize;
    /// Make `position` current, notifying listeners if it changes.
    fn set_current_item(&mut self, position: usize);
    fn add_page_change_listener(&mut self) -> ListenerId;
    fn remove_page_change_listener(&mut self, id: ListenerId);
}

/// A horizontally swiped row of pages.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    pages: Vec<T>,
    current: usize,
    listeners: Vec<(ListenerId, VecDeque<PageChange>)>,
    next_listener: u64,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Carousel<T> {
    pub fn new(pages: Vec<T>) -> Self {
        Self {
            pages,
            current: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    pub fn current_page(&self) -> Option<&T> {
        self.pages.get(self.current)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Swipe to the next page. Returns false at the last page.
    pub fn swipe_next(&mut self) -> bool {
        if self.current + 1 >= self.pages.len() {
            return false;
        }
        self.swipe_to(self.current + 1);
        true
    }

    /// Swipe to the previous page. Returns false at the first page.
    pub fn swipe_prev(&mut self) -> bool {
        if self.current == 0 || self.pages.is_empty() {
            return false;
        }
        self.swipe_to(self.current - 1);
        true
    }

    /// Animated move to `position`, emitting the full scroll sequence.
    fn swipe_to(&mut self, position: usize) {
        let from = self.current;
        self.broadcast(PageChange::ScrollStateChanged(ScrollPhase::Dragging));
        self.broadcast(PageChange::Scrolled {
            position: from.min(position),
            offset: 0.5,
        });
        self.broadcast(PageChange::ScrollStateChanged(ScrollPhase::Settling));
        self.current = position;
        self.broadcast(PageChange::Selected(position));
        self.broadcast(PageChange::ScrollStateChanged(ScrollPhase::Idle));
    }

    /// Append a page. Listeners are not notified; the page count changed, so
    /// dependants must rebuild.
    pub fn push_page(&mut self, page: T) {
        self.pages.push(page);
    }

    /// Remove the page at `position`, keeping the current index in bounds.
    pub fn remove_page(&mut self, position: usize) -> Option<T> {
        if position >= self.pages.len() {
            return None;
        }
        let page = self.pages.remove(position);
        if self.current >= self.pages.len() {
            self.current = self.pages.len().saturating_sub(1);
        }
        Some(page)
    }

    /// Take all notifications queued for `id`, oldest first.
    pub fn drain_events(&mut self, id: ListenerId) -> Vec<PageChange> {
        self.listeners
            .iter_mut()
            .find(|(listener, _)| *listener == id)
            .map(|(_, queue)| queue.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn broadcast(&mut self, change: PageChange) {
        trace!(?change, listeners = self.listeners.len(), "page change");
        for (_, queue) in &mut self.listeners {
            queue.push_back(change);
        }
    }
}

impl<T> PagerHost for Carousel<T> {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_item(&self) -> usize {
        self.current
    }

    fn set_current_item(&mut self, position: usize) {
        let position = position.min(self.pages.len().saturating_sub(1));
        if position != self.current {
            self.current = position;
            self.broadcast(PageChange::Selected(position));
        }
    }

    fn add_page_change_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, VecDeque::new()));
        id
    }

    fn remove_page_change_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(count: usize) -> Carousel<usize> {
        Carousel::new((0..count).collect())
    }

    #[test]
    fn test_swipe_bounds() {
        let mut pager = carousel(2);
        assert!(!pager.swipe_prev());
        assert!(pager.swipe_next());
        assert_eq!(pager.current_item(), 1);
        assert!(!pager.swipe_next());
        assert!(pager.swipe_prev());
        assert_eq!(pager.current_item(), 0);
    }

    #[test]
    fn test_swipe_emits_selection_between_scroll_events() {
        let mut pager = carousel(3);
        let id = pager.add_page_change_listener();
        pager.swipe_next();

        let events = pager.drain_events(id);
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            PageChange::ScrollStateChanged(ScrollPhase::Dragging)
        );
        assert_eq!(events[3], PageChange::Selected(1));
        assert_eq!(events[4], PageChange::ScrollStateChanged(ScrollPhase::Idle));
        assert!(pager.drain_events(id).is_empty());
    }

    #[test]
    fn test_removed_listener_gets_nothing() {
        let mut pager = carousel(3);
        let id = pager.add_page_change_listener();
        pager.remove_page_change_listener(id);
        pager.swipe_next();
        assert!(pager.drain_events(id).is_empty());
        assert_eq!(pager.listener_count(), 0);
    }

    #[test]
    fn test_set_current_item_clamps_and_skips_noop() {
        let mut pager = carousel(3);
        let id = pager.add_page_change_listener();
        pager.set_current_item(0);
        assert!(pager.drain_events(id).is_empty());
        pager.set_current_item(10);
        assert_eq!(pager.current_item(), 2);
        assert_eq!(pager.drain_events(id), vec![PageChange::Selected(2)]);
    }

    #[test]
    fn test_remove_page_keeps_current_in_bounds() {
        let mut pager = carousel(3);
        pager.set_current_item(2);
        assert_eq!(pager.remove_page(2), Some(2));
        assert_eq!(pager.current_item(), 1);
        assert_eq!(pager.remove_page(5), None);
    }
}
