//! Immutable view state handed to renderers.

use crate::filter::FilteredOptions;
use crate::option::{NormalizedOption, OptionValue};

/// How a row of the option list should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowState {
    /// Neither highlighted nor selected.
    Plain,
    /// Under the keyboard or pointer highlight.
    Highlighted,
    /// The committed selection.
    Selected,
    /// Both selected and highlighted.
    SelectedHighlighted,
}

impl RowState {
    /// Combine the two row flags.
    pub fn from_flags(selected: bool, highlighted: bool) -> Self {
        match (selected, highlighted) {
            (true, true) => Self::SelectedHighlighted,
            (false, true) => Self::Highlighted,
            (true, false) => Self::Selected,
            (false, false) => Self::Plain,
        }
    }

    /// Whether the row is the committed selection.
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected | Self::SelectedHighlighted)
    }

    /// Whether the row is highlighted.
    pub fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted | Self::SelectedHighlighted)
    }
}

/// One row of the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow<'a> {
    /// Position in the filtered list; pass this back in hover and click intents.
    pub index: usize,
    /// The option shown in this row.
    pub option: &'a NormalizedOption,
    /// How the row should be drawn.
    pub state: RowState,
}

impl OptionRow<'_> {
    /// Whether the row shows the selected check mark.
    pub fn shows_selected_icon(&self) -> bool {
        self.state.is_selected()
    }
}

/// A read-only copy of everything a renderer needs.
///
/// Snapshots are cheap to clone: option data is shared with the controller.
/// Mutating a snapshot has no effect on the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSnapshot {
    /// Whether the dropdown is open.
    pub is_open: bool,
    /// The current query text.
    pub query: String,
    /// The options matching the query, in display order.
    pub filtered_options: FilteredOptions,
    /// The highlighted position in `filtered_options`.
    pub highlight_index: Option<usize>,
    /// The committed selection.
    pub selected_value: Option<OptionValue>,
    /// Shown instead of the list when nothing matches.
    pub no_results_label: String,
    /// Whether the search box is shown.
    pub search_box_visible: bool,
    /// Placeholder for the empty search box.
    pub search_box_placeholder: String,
    /// Text of the trigger button.
    pub button_label: Option<String>,
    /// Maximum height of the option list, in pixels.
    pub max_height: Option<u32>,
}

impl DropdownSnapshot {
    /// Iterate the rows of the option list with their draw state.
    pub fn rows(&self) -> impl Iterator<Item = OptionRow<'_>> + '_ {
        self.filtered_options
            .iter()
            .enumerate()
            .map(move |(index, option)| OptionRow {
                index,
                option,
                state: RowState::from_flags(
                    self.selected_value.as_ref() == Some(option.value()),
                    self.highlight_index == Some(index),
                ),
            })
    }

    /// Whether the "no results" feedback replaces the list.
    pub fn shows_no_results(&self) -> bool {
        self.filtered_options.is_empty()
    }

    /// The highlighted option, if any.
    pub fn highlighted_option(&self) -> Option<&NormalizedOption> {
        self.highlight_index
            .and_then(|index| self.filtered_options.get(index))
    }
}
