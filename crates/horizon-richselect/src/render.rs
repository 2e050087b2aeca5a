//! The renderer seam.
//!
//! A [`Renderer`] turns a [`DropdownSnapshot`] into a view. Renderers never
//! touch the controller: user input on the view goes back as
//! [`Intent`](crate::input::Intent)s, carrying the row
//! [`index`](crate::snapshot::OptionRow::index) for hover and click.
//!
//! [`PlainTextRenderer`] is the reference implementation. It projects the
//! snapshot to lines of text, which is handy in tests and debug logs:
//!
//! ```text
//! [Green]
//! search: gr
//! > Green *
//!   Grey
//! ```

use std::fmt::Write as _;

use horizon_richselect_core::PerfSpan;
use horizon_richselect_core::logging::span_names;

use crate::snapshot::DropdownSnapshot;

/// Produces a view from a snapshot.
pub trait Renderer {
    /// The view type produced.
    type Output;

    /// Render the snapshot.
    fn render(&mut self, snapshot: &DropdownSnapshot) -> Self::Output;
}

/// Marker characters used by [`PlainTextRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// `>` for the highlight, `*` for the selection.
    #[default]
    Ascii,
    /// `▸` for the highlight, `✓` for the selection.
    Unicode,
}

impl MarkerStyle {
    fn highlight(self) -> &'static str {
        match self {
            Self::Ascii => ">",
            Self::Unicode => "\u{25b8}",
        }
    }

    fn selected(self) -> &'static str {
        match self {
            Self::Ascii => "*",
            Self::Unicode => "\u{2713}",
        }
    }
}

/// Renders a snapshot as plain text, one line per element.
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer {
    style: MarkerStyle,
}

impl PlainTextRenderer {
    /// Create a renderer with ASCII markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker style using builder pattern.
    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }
}

impl Renderer for PlainTextRenderer {
    type Output = String;

    fn render(&mut self, snapshot: &DropdownSnapshot) -> String {
        let _span = PerfSpan::new(span_names::RENDER);
        let mut out = String::new();

        let _ = write!(out, "[{}]", snapshot.button_label.as_deref().unwrap_or(""));
        if !snapshot.is_open {
            return out;
        }

        if snapshot.search_box_visible {
            if snapshot.query.is_empty() {
                let _ = write!(out, "\nsearch: ({})", snapshot.search_box_placeholder);
            } else {
                let _ = write!(out, "\nsearch: {}", snapshot.query);
            }
        }

        if snapshot.shows_no_results() {
            let _ = write!(out, "\n  {}", snapshot.no_results_label);
            return out;
        }

        for row in snapshot.rows() {
            let lead = if row.state.is_highlighted() {
                self.style.highlight()
            } else {
                " "
            };
            let _ = write!(out, "\n{lead} {}", row.option.text());
            if row.shows_selected_icon() {
                let _ = write!(out, " {}", self.style.selected());
            }
        }
        out
    }
}
