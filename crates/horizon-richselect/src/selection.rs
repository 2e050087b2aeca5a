//! Single-value selection model.
//!
//! [`SelectionModel`] holds the committed value of the rich select. It is
//! owned by the dropdown controller, which is the only code that writes it.
//! Consumers observe it through
//! [`DropdownController::selection_changed`](crate::DropdownController::selection_changed).

use horizon_richselect_core::Signal;
use horizon_richselect_core::logging::targets;
use parking_lot::RwLock;

use crate::option::{NormalizedOption, OptionValue};

/// Manages the committed selection of a rich select.
///
/// # Signals
///
/// - `selection_changed(Option<OptionValue>)`: Emitted when the selected value
///   actually changes. Re-selecting the current value emits nothing.
pub(crate) struct SelectionModel {
    selected: RwLock<Option<OptionValue>>,

    /// Signal emitted when the selected value changes.
    pub(crate) selection_changed: Signal<Option<OptionValue>>,
}

impl SelectionModel {
    /// Create a model with nothing selected.
    pub(crate) fn new() -> Self {
        Self {
            selected: RwLock::new(None),
            selection_changed: Signal::new(),
        }
    }

    /// The selected value.
    pub(crate) fn selected_value(&self) -> Option<OptionValue> {
        self.selected.read().clone()
    }

    /// Select an option.
    ///
    /// Returns `true` and emits `selection_changed` if the value changed.
    pub(crate) fn select(&self, option: &NormalizedOption) -> bool {
        self.select_value(Some(option.value().clone()))
    }

    /// Set the selected value directly (for example from a bound form value).
    ///
    /// Returns `true` and emits `selection_changed` if the value changed.
    pub(crate) fn select_value(&self, value: Option<OptionValue>) -> bool {
        {
            let mut current = self.selected.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        tracing::debug!(target: targets::SELECTION, value = ?value, "selection changed");
        self.selection_changed.emit(value);
        true
    }

    /// Whether `option` is the selected one.
    pub(crate) fn is_selected(&self, option: &NormalizedOption) -> bool {
        self.selected.read().as_ref() == Some(option.value())
    }

    /// Clear the selection.
    ///
    /// Returns `true` and emits `selection_changed(None)` if something was selected.
    pub(crate) fn clear(&self) -> bool {
        self.select_value(None)
    }
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionModel")
            .field("selected", &*self.selected.read())
            .finish()
    }
}
