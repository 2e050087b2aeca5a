//! Normalized options and option sets.
//!
//! Options arrive already normalized from an
//! [`OptionsProvider`](crate::provider::OptionsProvider). The dropdown never
//! creates options of its own; it only references the ones it was given.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use horizon_richselect_core::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Option Value
// ============================================================================

/// The identifier of an option.
///
/// Values are either integers or text, matching what bound form values
/// typically hold. Serialized untagged, so `1` and `"red"` both parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// An integer identifier.
    Int(i64),
    /// A text identifier.
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// ============================================================================
// Normalized Option
// ============================================================================

/// One selectable item.
///
/// Equality and hashing consider only the [`value`](Self::value); two options
/// with the same value are the same option even if their text differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawOption", into = "RawOption")]
pub struct NormalizedOption {
    value: OptionValue,
    text: String,
    search_text: String,
    /// Lower-cased `search_text`, computed once.
    search_key: String,
}

impl NormalizedOption {
    /// Create an option whose search text is its display text.
    pub fn new(value: impl Into<OptionValue>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: value.into(),
            search_key: text.to_lowercase(),
            search_text: text.clone(),
            text,
        }
    }

    /// Replace the text used for filtering using builder pattern.
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self.search_key = self.search_text.to_lowercase();
        self
    }

    /// The option's identifier.
    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// The display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text matched against the query.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Case-insensitive substring match against an already lower-cased needle.
    pub(crate) fn matches_lowered(&self, needle: &str) -> bool {
        self.search_key.contains(needle)
    }
}

impl PartialEq for NormalizedOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for NormalizedOption {}

impl Hash for NormalizedOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Wire form of an option, as produced by option providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawOption {
    value: OptionValue,
    text: String,
    #[serde(
        rename = "searchText",
        alias = "search_text",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    search_text: Option<String>,
}

impl From<RawOption> for NormalizedOption {
    fn from(raw: RawOption) -> Self {
        let option = NormalizedOption::new(raw.value, raw.text);
        match raw.search_text {
            Some(search_text) => option.with_search_text(search_text),
            None => option,
        }
    }
}

impl From<NormalizedOption> for RawOption {
    fn from(option: NormalizedOption) -> Self {
        let search_text = (option.search_text != option.text).then_some(option.search_text);
        Self {
            value: option.value,
            text: option.text,
            search_text,
        }
    }
}

// ============================================================================
// Option Set
// ============================================================================

/// An ordered, immutable list of options with unique values.
///
/// Display order is insertion order. Cloning is cheap; clones share storage.
#[derive(Debug, Clone)]
pub struct OptionSet {
    options: Arc<[NormalizedOption]>,
}

impl OptionSet {
    /// Create an option set, rejecting duplicate values.
    pub fn new(options: Vec<NormalizedOption>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.value()) {
                return Err(Error::DuplicateValue(option.value().to_string()));
            }
        }
        Ok(Self {
            options: options.into(),
        })
    }

    /// Create an option set from `(value, text)` pairs.
    pub fn from_pairs<V, T>(pairs: impl IntoIterator<Item = (V, T)>) -> Result<Self>
    where
        V: Into<OptionValue>,
        T: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(value, text)| NormalizedOption::new(value, text))
                .collect(),
        )
    }

    /// Create an option set whose values are the texts themselves.
    pub fn from_texts<T: Into<String>>(texts: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::new(
            texts
                .into_iter()
                .map(|text| {
                    let text = text.into();
                    NormalizedOption::new(text.clone(), text)
                })
                .collect(),
        )
    }

    /// Create an empty option set.
    pub fn empty() -> Self {
        Self {
            options: Arc::from(Vec::new()),
        }
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the set has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get the option at the given display position.
    pub fn get(&self, index: usize) -> Option<&NormalizedOption> {
        self.options.get(index)
    }

    /// Iterate the options in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedOption> {
        self.options.iter()
    }

    /// The options as a slice.
    pub fn as_slice(&self) -> &[NormalizedOption] {
        &self.options
    }

    /// Find the option with the given value.
    pub fn find(&self, value: &OptionValue) -> Option<&NormalizedOption> {
        self.options.iter().find(|option| option.value() == value)
    }

    /// Whether both sets share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.options, &other.options)
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a NormalizedOption;
    type IntoIter = std::slice::Iter<'a, NormalizedOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_equality_by_value() {
        let a = NormalizedOption::new(1, "Red");
        let b = NormalizedOption::new(1, "Crimson");
        let c = NormalizedOption::new(2, "Red");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_option_search_text_defaults_to_text() {
        let option = NormalizedOption::new("nl", "Netherlands");
        assert_eq!(option.search_text(), "Netherlands");
        assert!(option.matches_lowered("neth"));

        let option = option.with_search_text("Holland NL");
        assert_eq!(option.text(), "Netherlands");
        assert!(option.matches_lowered("holl"));
        assert!(!option.matches_lowered("neth"));
    }

    #[test]
    fn test_option_set_rejects_duplicates() {
        let err = OptionSet::from_pairs([(1, "Red"), (2, "Green"), (1, "Blue")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateValue(ref v) if v == "1"));
    }

    #[test]
    fn test_option_set_int_and_text_values_are_distinct() {
        let set = OptionSet::new(vec![
            NormalizedOption::new(1, "One"),
            NormalizedOption::new("1", "Text one"),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.find(&OptionValue::from("1")).unwrap().text(), "Text one");
    }

    #[test]
    fn test_option_set_order_and_sharing() {
        let set = OptionSet::from_texts(["Apple", "Banana", "Cherry"]).unwrap();
        let texts: Vec<_> = set.iter().map(NormalizedOption::text).collect();
        assert_eq!(texts, ["Apple", "Banana", "Cherry"]);

        let clone = set.clone();
        assert!(set.ptr_eq(&clone));
        assert!(OptionSet::empty().is_empty());
    }

    #[test]
    fn test_option_json_forms() {
        let options: Vec<NormalizedOption> = serde_json::from_str(
            r#"[
                {"value": 1, "text": "Red"},
                {"value": "nl", "text": "Netherlands", "searchText": "Holland"}
            ]"#,
        )
        .unwrap();
        assert_eq!(options[0].value(), &OptionValue::Int(1));
        assert_eq!(options[1].value(), &OptionValue::from("nl"));
        assert_eq!(options[1].search_text(), "Holland");

        let json = serde_json::to_string(&options[0]).unwrap();
        assert_eq!(json, r#"{"value":1,"text":"Red"}"#);
    }
}
