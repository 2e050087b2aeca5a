//! Query filtering of option sets.
//!
//! [`filter`] reduces an [`OptionSet`] to the options whose search text
//! contains the query, ignoring case. The result is a fresh
//! [`FilteredOptions`] every time; it shares the immutable option storage and
//! owns its own list of positions.

use std::fmt;
use std::sync::Arc;

use horizon_richselect_core::PerfSpan;
use horizon_richselect_core::logging::{span_names, targets};

use crate::option::{NormalizedOption, OptionSet, OptionValue};

// ============================================================================
// Query
// ============================================================================

/// The filter text typed by the user.
///
/// Matching is case-insensitive; the lower-cased form is computed once when
/// the query is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    lowered: String,
}

impl Query {
    /// Create a query from user text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lowered: text.to_lowercase(),
            text,
        }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the query filters nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn lowered(&self) -> &str {
        &self.lowered
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

// ============================================================================
// Filtered Options
// ============================================================================

/// An ordered subsequence of an [`OptionSet`].
///
/// Indices passed to and returned from this type are positions in the
/// filtered list, not in the source set.
#[derive(Debug, Clone)]
pub struct FilteredOptions {
    source: OptionSet,
    indices: Arc<[usize]>,
}

impl FilteredOptions {
    /// A list with no options, derived from an empty set.
    pub fn empty() -> Self {
        Self {
            source: OptionSet::empty(),
            indices: Arc::from(Vec::new()),
        }
    }

    /// Number of matching options.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the option at a filtered position.
    pub fn get(&self, index: usize) -> Option<&NormalizedOption> {
        self.indices
            .get(index)
            .and_then(|&source_index| self.source.get(source_index))
    }

    /// Map a filtered position to its position in the source set.
    pub fn source_index(&self, index: usize) -> Option<usize> {
        self.indices.get(index).copied()
    }

    /// Filtered position of the option with the given value.
    pub fn position_of(&self, value: &OptionValue) -> Option<usize> {
        self.iter().position(|option| option.value() == value)
    }

    /// Iterate the matching options in display order.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedOption> + '_ {
        self.indices
            .iter()
            .filter_map(|&source_index| self.source.get(source_index))
    }

    /// The option set this list was derived from.
    pub fn source(&self) -> &OptionSet {
        &self.source
    }
}

impl PartialEq for FilteredOptions {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for FilteredOptions {}

impl Default for FilteredOptions {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Reduce `options` to those whose search text contains `query`.
///
/// An empty query keeps every option. Otherwise the comparison lower-cases
/// both sides and keeps source order. Runs in O(n·m) for n options and a
/// query of length m.
pub fn filter(options: &OptionSet, query: &Query) -> FilteredOptions {
    let _span = PerfSpan::new(span_names::FILTER);

    let indices: Vec<usize> = if query.is_empty() {
        (0..options.len()).collect()
    } else {
        let needle = query.lowered();
        options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.matches_lowered(needle))
            .map(|(index, _)| index)
            .collect()
    };

    tracing::trace!(
        target: targets::FILTER,
        query = query.as_str(),
        total = options.len(),
        matched = indices.len(),
        "filtered options"
    );

    FilteredOptions {
        source: options.clone(),
        indices: indices.into(),
    }
}
