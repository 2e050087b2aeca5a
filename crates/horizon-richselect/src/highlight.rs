//! Highlight tracking within the filtered options.
//!
//! The highlight is the row the keyboard or pointer is on. It is distinct
//! from the selection: moving the highlight never commits anything.
//!
//! [`HighlightTracker`] owns the highlight index exclusively. Every setter
//! validates against the filtered list the tracker was last reset with, so
//! the index can never point past the end of the list.

use horizon_richselect_core::logging::targets;
use horizon_richselect_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::filter::FilteredOptions;
use crate::option::NormalizedOption;

/// How keyboard navigation behaves at the ends of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    /// Moving past the first or last row does nothing.
    #[default]
    Saturating,
    /// Moving past the last row goes to the first, and vice versa.
    Wrapping,
}

/// Tracks which filtered option is highlighted.
#[derive(Debug, Clone, Default)]
pub struct HighlightTracker {
    filtered: FilteredOptions,
    index: Option<usize>,
    mode: NavigationMode,
}

impl HighlightTracker {
    /// Create a tracker with no options and no highlight.
    pub fn new(mode: NavigationMode) -> Self {
        Self {
            filtered: FilteredOptions::empty(),
            index: None,
            mode,
        }
    }

    /// The navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Set the navigation mode.
    pub fn set_mode(&mut self, mode: NavigationMode) {
        self.mode = mode;
    }

    /// The highlighted position in the filtered options.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The filtered options the highlight refers to.
    pub fn filtered(&self) -> &FilteredOptions {
        &self.filtered
    }

    /// The highlighted option, if any.
    pub fn current(&self) -> Option<&NormalizedOption> {
        self.index.and_then(|index| self.filtered.get(index))
    }

    /// Revalidate the highlight against a new filtered list.
    ///
    /// An empty list clears the highlight. Otherwise a highlight still in
    /// range is kept and one past the end is clamped to the last row.
    /// Returns `true` if the index changed.
    pub fn reset(&mut self, filtered: FilteredOptions) -> bool {
        self.filtered = filtered;
        let len = self.filtered.len();
        let index = match self.index {
            _ if len == 0 => None,
            Some(index) if index >= len => Some(len - 1),
            other => other,
        };
        self.set_index(index)
    }

    /// Highlight the next row.
    ///
    /// With no highlight this highlights the first row. No-op on an empty list.
    pub fn move_next(&mut self) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }
        let index = match (self.index, self.mode) {
            (None, _) => 0,
            (Some(i), NavigationMode::Wrapping) if i + 1 >= len => 0,
            (Some(i), _) => (i + 1).min(len - 1),
        };
        self.set_index(Some(index))
    }

    /// Highlight the previous row.
    ///
    /// With no highlight this highlights the first row, or the last row in
    /// wrapping mode. No-op on an empty list.
    pub fn move_previous(&mut self) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }
        let index = match (self.index, self.mode) {
            (None, NavigationMode::Saturating) => 0,
            (None, NavigationMode::Wrapping) => len - 1,
            (Some(0), NavigationMode::Wrapping) => len - 1,
            (Some(i), _) => i.saturating_sub(1),
        };
        self.set_index(Some(index))
    }

    /// Highlight the first row.
    pub fn move_first(&mut self) -> bool {
        if self.filtered.is_empty() {
            return false;
        }
        self.set_index(Some(0))
    }

    /// Highlight the last row.
    pub fn move_last(&mut self) -> bool {
        match self.filtered.len() {
            0 => false,
            len => self.set_index(Some(len - 1)),
        }
    }

    /// Move the highlight down by a page, stopping at the last row.
    pub fn page_next(&mut self, page_size: usize) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }
        let index = match self.index {
            None => page_size.saturating_sub(1),
            Some(i) => i.saturating_add(page_size.max(1)),
        };
        self.set_index(Some(index.min(len - 1)))
    }

    /// Move the highlight up by a page, stopping at the first row.
    pub fn page_previous(&mut self, page_size: usize) -> bool {
        if self.filtered.is_empty() {
            return false;
        }
        let index = self
            .index
            .map_or(0, |i| i.saturating_sub(page_size.max(1)));
        self.set_index(Some(index))
    }

    /// Highlight the row under the pointer.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index` is not a row of the current filtered
    /// list. The highlight is left unchanged in that case.
    pub fn set_by_hover(&mut self, index: usize) -> Result<bool> {
        let len = self.filtered.len();
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }
        Ok(self.set_index(Some(index)))
    }

    /// Remove the highlight.
    pub fn clear(&mut self) -> bool {
        self.set_index(None)
    }

    /// Verify that the highlight refers to a row of the filtered list.
    pub fn check_invariant(&self) -> Result<()> {
        let len = self.filtered.len();
        match self.index {
            Some(index) if len == 0 => Err(Error::invariant(format!(
                "highlight {index} set while no options are shown"
            ))),
            Some(index) if index >= len => Err(Error::invariant(format!(
                "highlight {index} past the end of {len} options"
            ))),
            _ => Ok(()),
        }
    }

    fn set_index(&mut self, index: Option<usize>) -> bool {
        if self.index == index {
            return false;
        }
        tracing::trace!(target: targets::HIGHLIGHT, from = ?self.index, to = ?index, "highlight moved");
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Query, filter};
    use crate::option::OptionSet;

    fn tracker_with(texts: &[&str], mode: NavigationMode) -> HighlightTracker {
        let options = OptionSet::from_texts(texts.iter().copied()).unwrap();
        let mut tracker = HighlightTracker::new(mode);
        tracker.reset(filter(&options, &Query::default()));
        tracker
    }

    fn abc() -> HighlightTracker {
        tracker_with(&["A", "B", "C"], NavigationMode::Saturating)
    }

    #[test]
    fn test_starts_without_highlight() {
        let tracker = abc();
        assert_eq!(tracker.index(), None);
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_move_next_saturates() {
        let mut tracker = abc();
        for _ in 0..3 {
            assert!(tracker.move_next());
        }
        assert_eq!(tracker.index(), Some(2));
        assert!(!tracker.move_next());
        assert_eq!(tracker.index(), Some(2));
        assert_eq!(tracker.current().unwrap().text(), "C");
    }

    #[test]
    fn test_move_previous_saturates_at_zero() {
        let mut tracker = abc();
        tracker.move_previous();
        assert_eq!(tracker.index(), Some(0));
        assert!(!tracker.move_previous());
        assert_eq!(tracker.index(), Some(0));
    }

    #[test]
    fn test_wrapping_both_directions() {
        let mut tracker = tracker_with(&["A", "B", "C"], NavigationMode::Wrapping);
        tracker.move_previous();
        assert_eq!(tracker.index(), Some(2));
        tracker.move_next();
        assert_eq!(tracker.index(), Some(0));
        tracker.move_previous();
        assert_eq!(tracker.index(), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_is_noop() {
        let mut tracker = HighlightTracker::new(NavigationMode::Saturating);
        assert!(!tracker.move_next());
        assert!(!tracker.move_previous());
        assert!(!tracker.move_first());
        assert!(!tracker.move_last());
        assert!(!tracker.page_next(5));
        assert!(!tracker.page_previous(5));
        assert_eq!(tracker.index(), None);
    }

    #[test]
    fn test_reset_keeps_in_range_index() {
        let options = OptionSet::from_texts(["Apple", "Banana", "Cherry"]).unwrap();
        let mut tracker = HighlightTracker::default();
        tracker.reset(filter(&options, &Query::default()));
        tracker.move_next();
        tracker.move_next();
        assert_eq!(tracker.index(), Some(1));

        assert!(!tracker.reset(filter(&options, &"a".into())));
        assert_eq!(tracker.index(), Some(1));
        assert_eq!(tracker.current().unwrap().text(), "Banana");
    }

    #[test]
    fn test_reset_clamps_to_last() {
        let options = OptionSet::from_texts(["Apple", "Banana", "Cherry"]).unwrap();
        let mut tracker = HighlightTracker::default();
        tracker.reset(filter(&options, &Query::default()));
        tracker.move_last();
        assert_eq!(tracker.current().unwrap().text(), "Cherry");

        assert!(tracker.reset(filter(&options, &"an".into())));
        assert_eq!(tracker.index(), Some(0));
        assert_eq!(tracker.current().unwrap().text(), "Banana");
    }

    #[test]
    fn test_reset_to_empty_clears() {
        let options = OptionSet::from_texts(["Apple"]).unwrap();
        let mut tracker = HighlightTracker::default();
        tracker.reset(filter(&options, &Query::default()));
        tracker.move_next();

        assert!(tracker.reset(filter(&options, &"z".into())));
        assert_eq!(tracker.index(), None);
        assert!(tracker.check_invariant().is_ok());
    }

    #[test]
    fn test_set_by_hover_validates() {
        let mut tracker = abc();
        assert!(tracker.set_by_hover(1).unwrap());
        assert_eq!(tracker.index(), Some(1));

        let err = tracker.set_by_hover(3).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(tracker.index(), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut tracker = abc();
        tracker.move_next();
        assert!(tracker.clear());
        assert!(!tracker.clear());
        assert_eq!(tracker.index(), None);
    }

    #[test]
    fn test_paging() {
        let mut tracker = tracker_with(
            &["1", "2", "3", "4", "5", "6", "7"],
            NavigationMode::Saturating,
        );
        tracker.page_next(3);
        assert_eq!(tracker.index(), Some(2));
        tracker.page_next(3);
        assert_eq!(tracker.index(), Some(5));
        tracker.page_next(3);
        assert_eq!(tracker.index(), Some(6));
        tracker.page_previous(3);
        assert_eq!(tracker.index(), Some(3));
        tracker.page_previous(10);
        assert_eq!(tracker.index(), Some(0));
    }
}
