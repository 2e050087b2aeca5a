//! Rich select configuration.
//!
//! [`RichSelectConfig`] collects the options that change behavior or the
//! labels the renderer shows. It can be built in code with the `with_*`
//! builder methods or loaded from TOML:
//!
//! ```toml
//! hide-search-box = false
//! search-box-placeholder = "Search colors..."
//! no-results-label = "Nothing matches"
//! blur-policy = "search-box-aware"
//! navigation = "wrapping"
//! ```

use std::path::Path;

use horizon_richselect_core::logging::targets;
use horizon_richselect_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::highlight::NavigationMode;
use crate::input::FocusSource;

/// When losing focus closes the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlurPolicy {
    /// The search box losing focus always closes. The trigger losing focus
    /// closes only when the search box is hidden, since opening the dropdown
    /// moves focus from the trigger into the search box.
    #[default]
    SearchBoxAware,
    /// Any loss of focus closes.
    Always,
    /// Losing focus never closes; only commit or escape do.
    Never,
}

impl BlurPolicy {
    /// Whether a blur of `source` closes the dropdown.
    pub fn closes_on(self, source: FocusSource, search_box_visible: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::SearchBoxAware => match source {
                FocusSource::SearchBox => true,
                FocusSource::Trigger => !search_box_visible,
            },
        }
    }
}

/// Configuration for a rich select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RichSelectConfig {
    /// Hide the search box; the list is then never filtered.
    pub hide_search_box: bool,
    /// Placeholder shown in the empty search box.
    pub search_box_placeholder: String,
    /// Text shown instead of the list when nothing matches.
    pub no_results_label: String,
    /// Button label when nothing is selected.
    pub placeholder: Option<String>,
    /// Maximum height of the option list, in pixels.
    pub max_height: Option<u32>,
    /// When losing focus closes the dropdown.
    pub blur_policy: BlurPolicy,
    /// Behavior of keyboard navigation at the ends of the list.
    pub navigation: NavigationMode,
    /// Rows moved by PageUp and PageDown.
    pub page_size: usize,
}

impl Default for RichSelectConfig {
    fn default() -> Self {
        Self {
            hide_search_box: false,
            search_box_placeholder: "Search...".to_string(),
            no_results_label: "No results found".to_string(),
            placeholder: None,
            max_height: Some(300),
            blur_policy: BlurPolicy::default(),
            navigation: NavigationMode::default(),
            page_size: 10,
        }
    }
}

impl RichSelectConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        Ok(config.normalized())
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded rich select config");
        Ok(config)
    }

    /// Serialize this configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Whether the search box is shown.
    pub fn search_box_visible(&self) -> bool {
        !self.hide_search_box
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }

    /// Set whether the search box is hidden using builder pattern.
    pub fn with_hide_search_box(mut self, hide: bool) -> Self {
        self.hide_search_box = hide;
        self
    }

    /// Set the search box placeholder using builder pattern.
    pub fn with_search_box_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_box_placeholder = text.into();
        self
    }

    /// Set the no-results label using builder pattern.
    pub fn with_no_results_label(mut self, text: impl Into<String>) -> Self {
        self.no_results_label = text.into();
        self
    }

    /// Set the button placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Set the maximum list height using builder pattern.
    pub fn with_max_height(mut self, height: Option<u32>) -> Self {
        self.max_height = height;
        self
    }

    /// Set the blur policy using builder pattern.
    pub fn with_blur_policy(mut self, policy: BlurPolicy) -> Self {
        self.blur_policy = policy;
        self
    }

    /// Set the navigation mode using builder pattern.
    pub fn with_navigation(mut self, mode: NavigationMode) -> Self {
        self.navigation = mode;
        self
    }

    /// Set the page size using builder pattern.
    pub fn with_page_size(mut self, rows: usize) -> Self {
        self.page_size = rows.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RichSelectConfig::default();
        assert!(config.search_box_visible());
        assert_eq!(config.search_box_placeholder, "Search...");
        assert_eq!(config.no_results_label, "No results found");
        assert_eq!(config.max_height, Some(300));
        assert_eq!(config.blur_policy, BlurPolicy::SearchBoxAware);
        assert_eq!(config.navigation, NavigationMode::Saturating);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RichSelectConfig::from_toml_str(
            r#"
            hide-search-box = true
            no-results-label = "Nothing here"
            navigation = "wrapping"
            page-size = 0
            "#,
        )
        .unwrap();
        assert!(!config.search_box_visible());
        assert_eq!(config.no_results_label, "Nothing here");
        assert_eq!(config.navigation, NavigationMode::Wrapping);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.search_box_placeholder, "Search...");
    }

    #[test]
    fn test_from_toml_rejects_unknown_policy() {
        let err = RichSelectConfig::from_toml_str(r#"blur-policy = "sometimes""#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RichSelectConfig::new()
            .with_placeholder("Pick a color")
            .with_blur_policy(BlurPolicy::Always);
        let text = config.to_toml_string().unwrap();
        assert_eq!(RichSelectConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("select.toml");
        std::fs::write(&path, "search-box-placeholder = \"Filter...\"\n").unwrap();

        let config = RichSelectConfig::load(&path).unwrap();
        assert_eq!(config.search_box_placeholder, "Filter...");

        let missing = RichSelectConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, Error::Io { .. }));
    }

    #[test]
    fn test_blur_policy_matrix() {
        use FocusSource::{SearchBox, Trigger};

        let aware = BlurPolicy::SearchBoxAware;
        assert!(aware.closes_on(SearchBox, true));
        assert!(!aware.closes_on(Trigger, true));
        assert!(aware.closes_on(Trigger, false));

        assert!(BlurPolicy::Always.closes_on(Trigger, true));
        assert!(!BlurPolicy::Never.closes_on(SearchBox, true));
    }
}
