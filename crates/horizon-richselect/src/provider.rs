//! Option providers.
//!
//! An [`OptionsProvider`] supplies complete [`OptionSet`] snapshots. Loading
//! and normalizing raw option data (including any asynchronous fetching) is
//! the provider's concern; the dropdown only ever receives finished sets and
//! treats each one as a full replacement.

use std::path::Path;

use horizon_richselect_core::logging::targets;
use horizon_richselect_core::{Error, Result};

use crate::option::{NormalizedOption, OptionSet, OptionValue};

/// Trait for supplying options to a rich select.
pub trait OptionsProvider {
    /// Produce the current option set.
    fn options(&self) -> Result<OptionSet>;
}

/// An in-memory provider backed by a fixed option set.
#[derive(Debug, Clone, Default)]
pub struct StaticOptions {
    options: OptionSet,
}

impl StaticOptions {
    /// Create a provider for the given options.
    pub fn new(options: OptionSet) -> Self {
        Self { options }
    }

    /// Create a provider from `(value, text)` pairs.
    pub fn from_pairs<V, T>(pairs: impl IntoIterator<Item = (V, T)>) -> Result<Self>
    where
        V: Into<OptionValue>,
        T: Into<String>,
    {
        Ok(Self::new(OptionSet::from_pairs(pairs)?))
    }

    /// Parse a JSON array of `{ "value", "text", "searchText"? }` objects.
    pub fn from_json(source: &str) -> Result<Self> {
        let options: Vec<NormalizedOption> = serde_json::from_str(source)?;
        let set = OptionSet::new(options)?;
        tracing::debug!(target: targets::PROVIDER, count = set.len(), "parsed option list");
        Ok(Self::new(set))
    }

    /// Load a JSON option list from a file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&source)
    }

    /// Replace the options this provider supplies.
    pub fn set_options(&mut self, options: OptionSet) {
        self.options = options;
    }
}

impl OptionsProvider for StaticOptions {
    fn options(&self) -> Result<OptionSet> {
        Ok(self.options.clone())
    }
}

impl<F> OptionsProvider for F
where
    F: Fn() -> Result<OptionSet>,
{
    fn options(&self) -> Result<OptionSet> {
        self()
    }
}
