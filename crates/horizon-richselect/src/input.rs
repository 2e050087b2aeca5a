//! Input intents.
//!
//! Raw input is resolved into an [`Intent`] once, at the boundary between the
//! host toolkit and the rich select. The dropdown state machine only ever
//! sees intents, never key codes or pointer coordinates.

/// Which element of the rich select an input event targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusSource {
    /// The button showing the current selection.
    Trigger,
    /// The search box inside the dropdown.
    SearchBox,
}

/// Keys the rich select reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    /// Any key the rich select does not handle.
    Other,
}

/// A semantic user intent delivered to the dropdown controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open the dropdown (trigger focused or activated).
    Activate,
    /// Open the dropdown if closed, close it if open (trigger clicked).
    Toggle,
    /// The search box text changed.
    QueryChanged(String),
    /// Highlight the next row.
    ArrowDown,
    /// Highlight the previous row.
    ArrowUp,
    /// Highlight the first row.
    Home,
    /// Highlight the last row.
    End,
    /// Move the highlight up one page.
    PageUp,
    /// Move the highlight down one page.
    PageDown,
    /// Commit the highlighted row.
    Enter,
    /// Close without changing the selection.
    Escape,
    /// A row of the filtered list was clicked.
    OptionClicked(usize),
    /// The pointer entered a row of the filtered list.
    Hover(usize),
    /// The pointer left the list.
    HoverLeave,
    /// An element of the rich select lost focus.
    Blur(FocusSource),
}

impl Intent {
    /// Resolve a key press on `source` into an intent.
    ///
    /// Returns `None` for keys the rich select ignores.
    pub fn from_key(key: Key, source: FocusSource) -> Option<Self> {
        match key {
            Key::ArrowDown => Some(Self::ArrowDown),
            Key::ArrowUp => Some(Self::ArrowUp),
            Key::Enter => Some(Self::Enter),
            Key::Escape => Some(Self::Escape),
            Key::Home => Some(Self::Home),
            Key::End => Some(Self::End),
            Key::PageUp => Some(Self::PageUp),
            Key::PageDown => Some(Self::PageDown),
            Key::Tab => Some(Self::Blur(source)),
            Key::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let source = FocusSource::Trigger;
        assert_eq!(Intent::from_key(Key::ArrowDown, source), Some(Intent::ArrowDown));
        assert_eq!(Intent::from_key(Key::ArrowUp, source), Some(Intent::ArrowUp));
        assert_eq!(Intent::from_key(Key::Enter, source), Some(Intent::Enter));
        assert_eq!(Intent::from_key(Key::Escape, source), Some(Intent::Escape));
        assert_eq!(Intent::from_key(Key::Other, source), None);
    }

    #[test]
    fn test_tab_blurs_focused_element() {
        assert_eq!(
            Intent::from_key(Key::Tab, FocusSource::SearchBox),
            Some(Intent::Blur(FocusSource::SearchBox))
        );
        assert_eq!(
            Intent::from_key(Key::Tab, FocusSource::Trigger),
            Some(Intent::Blur(FocusSource::Trigger))
        );
    }
}
