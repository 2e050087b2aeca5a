//! The dropdown state machine.
//!
//! [`DropdownController`] is the single authority over the open state, the
//! query, the filtered options, and the highlight. Every input arrives as an
//! [`Intent`] through [`DropdownController::dispatch`] and is fully processed
//! (state mutated, derived data recomputed, notifications emitted) before the
//! next one starts.
//!
//! # States
//!
//! | Intent | From | To | Effect |
//! |---|---|---|---|
//! | `Activate` | Closed | Open | highlight revalidated |
//! | `Toggle` | either | other | as `Activate` / `Escape` |
//! | `QueryChanged` | Open | Open | refilter, highlight revalidated |
//! | `ArrowDown` / `ArrowUp` | Open | Open | highlight moves, saturating by default |
//! | `ArrowDown` / `ArrowUp` / `Enter` | Closed | Open | keyboard open |
//! | `Enter` | Open | Closed | highlighted option selected; no-op without highlight |
//! | `OptionClicked(i)` | Open | Closed | row `i` selected |
//! | `Hover(i)` / `HoverLeave` | Open | Open | highlight set / cleared |
//! | `Blur` | Open | Closed | per [`BlurPolicy`](crate::config::BlurPolicy) |
//! | `Escape` | Open | Closed | no selection change |
//!
//! Closing always clears the query and the highlight.
//!
//! # Example
//!
//! ```
//! use horizon_richselect::{DropdownController, Intent, OptionSet, OptionValue};
//!
//! let options = OptionSet::from_pairs([(1, "Red"), (2, "Green"), (3, "Blue")])?;
//! let mut dropdown = DropdownController::new().with_options(options);
//!
//! dropdown.selection_changed().connect(|value| {
//!     println!("selected {:?}", value);
//! });
//!
//! dropdown.dispatch(Intent::Activate)?;
//! dropdown.dispatch(Intent::ArrowDown)?;
//! dropdown.dispatch(Intent::ArrowDown)?;
//! dropdown.dispatch(Intent::Enter)?;
//!
//! assert_eq!(dropdown.selected_value(), Some(OptionValue::Int(2)));
//! assert!(!dropdown.is_open());
//! # Ok::<(), horizon_richselect::Error>(())
//! ```

use horizon_richselect_core::logging::{span_names, targets};
use horizon_richselect_core::{Error, EventQueue, EventSender, PerfSpan, Result, Signal};

use crate::config::RichSelectConfig;
use crate::filter::{FilteredOptions, Query, filter};
use crate::highlight::HighlightTracker;
use crate::input::{FocusSource, Intent, Key};
use crate::option::{NormalizedOption, OptionSet, OptionValue};
use crate::provider::OptionsProvider;
use crate::selection::SelectionModel;
use crate::snapshot::DropdownSnapshot;

/// Whether the dropdown list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// What a processed intent changed.
///
/// Renderers use this to decide whether to redraw; an empty set means the
/// intent had no observable effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// The dropdown opened or closed.
    pub open: bool,
    /// The query text changed.
    pub query: bool,
    /// The filtered options were recomputed with a different result.
    pub filtered: bool,
    /// The highlight index changed.
    pub highlight: bool,
    /// The selected value changed.
    pub selection: bool,
}

impl Changes {
    /// No changes.
    pub const NONE: Self = Self {
        open: false,
        query: false,
        filtered: false,
        highlight: false,
        selection: false,
    };

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Accumulate another set of changes into this one.
    pub fn merge(&mut self, other: Changes) {
        self.open |= other.open;
        self.query |= other.query;
        self.filtered |= other.filtered;
        self.highlight |= other.highlight;
        self.selection |= other.selection;
    }
}

/// The rich select interaction state machine.
///
/// # Signals
///
/// - `open_changed(bool)`: Emitted when the dropdown opens or closes
/// - `highlight_changed(Option<OptionValue>)`: Emitted when a different option
///   becomes highlighted
/// - `state_changed(Changes)`: Emitted after every intent that changed anything;
///   take a fresh [`snapshot`](Self::snapshot) and redraw
/// - `selection_changed(Option<OptionValue>)`: Emitted when the committed
///   value changes, through [`selection_changed`](Self::selection_changed)
pub struct DropdownController {
    config: RichSelectConfig,
    state: OpenState,
    options: OptionSet,
    query: Query,
    /// Owns the filtered options and the highlight into them.
    highlight: HighlightTracker,
    selection: SelectionModel,
    pending: EventQueue<Intent>,

    /// Signal emitted when the dropdown opens or closes.
    pub open_changed: Signal<bool>,
    /// Signal emitted when the highlighted option changes.
    pub highlight_changed: Signal<Option<OptionValue>>,
    /// Signal emitted after any observable change.
    pub state_changed: Signal<Changes>,
}

impl DropdownController {
    /// Create a closed dropdown with no options and the default configuration.
    pub fn new() -> Self {
        let config = RichSelectConfig::default();
        Self {
            highlight: HighlightTracker::new(config.navigation),
            config,
            state: OpenState::Closed,
            options: OptionSet::empty(),
            query: Query::default(),
            selection: SelectionModel::new(),
            pending: EventQueue::new(),
            open_changed: Signal::new(),
            highlight_changed: Signal::new(),
            state_changed: Signal::new(),
        }
    }

    /// Set the options using builder pattern.
    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.set_options(options);
        self
    }

    /// Set the configuration using builder pattern.
    pub fn with_config(mut self, config: RichSelectConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set the initial selected value using builder pattern.
    pub fn with_selected_value(mut self, value: Option<OptionValue>) -> Self {
        self.select_value(value);
        self
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// The open state.
    pub fn state(&self) -> OpenState {
        self.state
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    /// The current query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The full option set.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// The options matching the query.
    pub fn filtered_options(&self) -> &FilteredOptions {
        self.highlight.filtered()
    }

    /// The highlighted position in the filtered options.
    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight.index()
    }

    /// The highlighted option.
    pub fn highlighted_option(&self) -> Option<&NormalizedOption> {
        self.highlight.current()
    }

    /// The committed selection.
    pub fn selected_value(&self) -> Option<OptionValue> {
        self.selection.selected_value()
    }

    /// The option matching the committed selection, if it is in the option set.
    pub fn selected_option(&self) -> Option<&NormalizedOption> {
        self.selection
            .selected_value()
            .and_then(|value| self.options.find(&value))
    }

    /// Whether `option` is the committed selection.
    pub fn is_selected(&self, option: &NormalizedOption) -> bool {
        self.selection.is_selected(option)
    }

    /// Signal emitted when the committed value changes.
    pub fn selection_changed(&self) -> &Signal<Option<OptionValue>> {
        &self.selection.selection_changed
    }

    /// The configuration.
    pub fn config(&self) -> &RichSelectConfig {
        &self.config
    }

    /// A handle for posting intents from slots and other callbacks.
    ///
    /// Intents posted while an intent is being processed run after it, in
    /// posting order.
    pub fn intent_sender(&self) -> EventSender<Intent> {
        self.pending.sender()
    }

    /// A read-only copy of the view state for renderers.
    pub fn snapshot(&self) -> DropdownSnapshot {
        let selected_value = self.selection.selected_value();
        let button_label = match &selected_value {
            Some(value) => Some(
                self.options
                    .find(value)
                    .map_or_else(|| value.to_string(), |option| option.text().to_string()),
            ),
            None => self.config.placeholder.clone(),
        };

        DropdownSnapshot {
            is_open: self.is_open(),
            query: self.query.as_str().to_string(),
            filtered_options: self.highlight.filtered().clone(),
            highlight_index: self.highlight.index(),
            selected_value,
            no_results_label: self.config.no_results_label.clone(),
            search_box_visible: self.config.search_box_visible(),
            search_box_placeholder: self.config.search_box_placeholder.clone(),
            button_label,
            max_height: self.config.max_height,
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Process an intent, then any intents posted while processing it.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if a `Hover` or `OptionClicked` index is not a row
    /// of the current filtered options. State is unchanged in that case.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Changes> {
        let changes = self.process(intent)?;
        Ok(self.drain_pending(changes))
    }

    /// Resolve a key press on `source` and dispatch it.
    ///
    /// Keys the rich select ignores produce no changes.
    pub fn handle_key(&mut self, key: Key, source: FocusSource) -> Result<Changes> {
        match Intent::from_key(key, source) {
            Some(intent) => self.dispatch(intent),
            None => Ok(Changes::NONE),
        }
    }

    /// Process intents posted through [`intent_sender`](Self::intent_sender).
    ///
    /// Errors from posted intents have no caller to return to; they are
    /// logged and the intent is dropped.
    pub fn process_pending(&mut self) -> Changes {
        let mut changes = Changes::NONE;
        while let Some(intent) = self.pending.try_next() {
            match self.process(intent) {
                Ok(c) => changes.merge(c),
                Err(err) => {
                    tracing::error!(target: targets::CONTROLLER, error = %err, "queued intent failed");
                }
            }
        }
        changes
    }

    /// Replace the options with a fresh snapshot from the options provider.
    ///
    /// The query is kept and reapplied. The selection is never touched, even
    /// if its value is missing from the new set.
    pub fn set_options(&mut self, options: OptionSet) -> Changes {
        let before = self.highlighted_value();
        let mut changes = Changes::NONE;
        tracing::debug!(target: targets::CONTROLLER, count = options.len(), "options replaced");
        self.options = options;
        changes.filtered = true;
        self.refilter(&mut changes);
        let changes = self.finish(changes, before);
        self.drain_pending(changes)
    }

    /// Pull a new option set from `provider`.
    pub fn refresh_from(&mut self, provider: &impl OptionsProvider) -> Result<Changes> {
        let options = provider.options()?;
        Ok(self.set_options(options))
    }

    /// Set the selected value programmatically.
    pub fn select_value(&mut self, value: Option<OptionValue>) -> Changes {
        let before = self.highlighted_value();
        let changes = Changes {
            selection: self.selection.select_value(value),
            ..Changes::NONE
        };
        let changes = self.finish(changes, before);
        self.drain_pending(changes)
    }

    /// Clear the selected value programmatically.
    pub fn clear_selection(&mut self) -> Changes {
        let before = self.highlighted_value();
        let changes = Changes {
            selection: self.selection.clear(),
            ..Changes::NONE
        };
        let changes = self.finish(changes, before);
        self.drain_pending(changes)
    }

    /// Replace the configuration.
    ///
    /// Hiding the search box clears any query.
    pub fn set_config(&mut self, config: RichSelectConfig) -> Changes {
        let before = self.highlighted_value();
        let mut changes = Changes::NONE;
        self.highlight.set_mode(config.navigation);
        self.config = config;
        if !self.config.search_box_visible() && !self.query.is_empty() {
            self.set_query(Query::default(), &mut changes);
        }
        let changes = self.finish(changes, before);
        self.drain_pending(changes)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn process(&mut self, intent: Intent) -> Result<Changes> {
        let _span = PerfSpan::new(span_names::DISPATCH);
        tracing::trace!(target: targets::CONTROLLER, state = ?self.state, intent = ?intent, "dispatch");
        let before = self.highlighted_value();
        let mut changes = Changes::NONE;

        match (self.state, intent) {
            (
                OpenState::Closed,
                Intent::Activate | Intent::Toggle | Intent::ArrowDown | Intent::ArrowUp | Intent::Enter,
            ) => self.open(&mut changes),
            (OpenState::Closed, ignored) => {
                tracing::trace!(target: targets::CONTROLLER, intent = ?ignored, "ignored while closed");
            }
            (OpenState::Open, Intent::Activate) => {}
            (OpenState::Open, Intent::Toggle | Intent::Escape) => self.close(&mut changes),
            (OpenState::Open, Intent::QueryChanged(text)) => {
                if self.config.search_box_visible() {
                    self.set_query(Query::new(text), &mut changes);
                } else {
                    tracing::trace!(target: targets::CONTROLLER, "query ignored, search box hidden");
                }
            }
            (OpenState::Open, Intent::ArrowDown) => changes.highlight = self.highlight.move_next(),
            (OpenState::Open, Intent::ArrowUp) => changes.highlight = self.highlight.move_previous(),
            (OpenState::Open, Intent::Home) => changes.highlight = self.highlight.move_first(),
            (OpenState::Open, Intent::End) => changes.highlight = self.highlight.move_last(),
            (OpenState::Open, Intent::PageDown) => {
                changes.highlight = self.highlight.page_next(self.config.page_size);
            }
            (OpenState::Open, Intent::PageUp) => {
                changes.highlight = self.highlight.page_previous(self.config.page_size);
            }
            (OpenState::Open, Intent::Enter) => match self.highlight.current().cloned() {
                Some(option) => self.commit(&option, &mut changes),
                None => {
                    tracing::trace!(target: targets::CONTROLLER, "enter without highlight");
                }
            },
            (OpenState::Open, Intent::OptionClicked(index)) => {
                let filtered = self.highlight.filtered();
                let option = filtered.get(index).cloned().ok_or_else(|| {
                    let err = Error::out_of_range(index, filtered.len());
                    tracing::warn!(target: targets::CONTROLLER, error = %err, "click outside filtered options");
                    err
                })?;
                self.commit(&option, &mut changes);
            }
            (OpenState::Open, Intent::Hover(index)) => {
                changes.highlight = self.highlight.set_by_hover(index).inspect_err(|err| {
                    tracing::warn!(target: targets::CONTROLLER, error = %err, "hover outside filtered options");
                })?;
            }
            (OpenState::Open, Intent::HoverLeave) => changes.highlight = self.highlight.clear(),
            (OpenState::Open, Intent::Blur(source)) => {
                if self
                    .config
                    .blur_policy
                    .closes_on(source, self.config.search_box_visible())
                {
                    self.close(&mut changes);
                }
            }
        }

        Ok(self.finish(changes, before))
    }

    fn open(&mut self, changes: &mut Changes) {
        self.state = OpenState::Open;
        changes.open = true;
        let filtered = self.highlight.filtered().clone();
        changes.highlight |= self.highlight.reset(filtered);
        tracing::debug!(target: targets::CONTROLLER, "dropdown opened");
    }

    fn close(&mut self, changes: &mut Changes) {
        self.state = OpenState::Closed;
        changes.open = true;
        if !self.query.is_empty() {
            self.set_query(Query::default(), changes);
        }
        changes.highlight |= self.highlight.clear();
        tracing::debug!(target: targets::CONTROLLER, "dropdown closed");
    }

    /// Close, then select, so slots observe the finished state.
    fn commit(&mut self, option: &NormalizedOption, changes: &mut Changes) {
        self.close(changes);
        changes.selection |= self.selection.select(option);
    }

    fn set_query(&mut self, query: Query, changes: &mut Changes) {
        if self.query == query {
            return;
        }
        self.query = query;
        changes.query = true;
        self.refilter(changes);
    }

    fn refilter(&mut self, changes: &mut Changes) {
        let filtered = filter(&self.options, &self.query);
        changes.filtered |= filtered != *self.highlight.filtered();
        changes.highlight |= self.highlight.reset(filtered);
    }

    /// Run intents posted by slots during a completed transition.
    fn drain_pending(&mut self, mut changes: Changes) -> Changes {
        changes.merge(self.process_pending());
        changes
    }

    fn highlighted_value(&self) -> Option<OptionValue> {
        self.highlight.current().map(|option| option.value().clone())
    }

    /// Check invariants and emit notifications for a completed transition.
    fn finish(&mut self, mut changes: Changes, highlighted_before: Option<OptionValue>) -> Changes {
        let violation = self.check_invariants().err();
        debug_assert!(violation.is_none(), "{violation:?}");
        if let Some(err) = violation {
            tracing::error!(target: targets::CONTROLLER, error = %err, "clamping highlight");
            let filtered = self.highlight.filtered().clone();
            if self.is_open() {
                changes.highlight |= self.highlight.reset(filtered);
            } else {
                changes.highlight |= self.highlight.clear();
            }
        }

        if changes.open {
            self.open_changed.emit(self.is_open());
        }
        let highlighted = self.highlighted_value();
        if highlighted != highlighted_before {
            self.highlight_changed.emit(highlighted);
        }
        if !changes.is_empty() {
            self.state_changed.emit(changes);
        }
        changes
    }

    /// Verify the highlight against the filtered options and open state.
    pub fn check_invariants(&self) -> Result<()> {
        self.highlight.check_invariant()?;
        if !self.is_open() && self.highlight.index().is_some() {
            return Err(Error::invariant("highlight set while closed"));
        }
        Ok(())
    }
}

impl Default for DropdownController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DropdownController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownController")
            .field("state", &self.state)
            .field("query", &self.query.as_str())
            .field("filtered", &self.highlight.filtered().len())
            .field("highlight", &self.highlight.index())
            .field("selected", &self.selection.selected_value())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
