//! Logging facilities for Horizon RichSelect.
//!
//! Horizon RichSelect uses the `tracing` crate for instrumentation. Install a
//! subscriber in your application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_richselect=debug")
//!     .init();
//! ```
//!
//! Transitions of the dropdown state machine are logged at `debug`; per
//! keystroke filtering and highlight movement at `trace`.

/// Span names used throughout Horizon RichSelect for tracing.
pub mod span_names {
    /// Dispatch of a single input intent.
    pub const DISPATCH: &str = "horizon_richselect::dispatch";
    /// Recomputation of the filtered options.
    pub const FILTER: &str = "horizon_richselect::filter";
    /// Rendering of a snapshot.
    pub const RENDER: &str = "horizon_richselect::render";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_richselect_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_richselect_core::signal";
    /// Intent queue target.
    pub const QUEUE: &str = "horizon_richselect_core::queue";
    /// Dropdown state machine target.
    pub const CONTROLLER: &str = "horizon_richselect::controller";
    /// Option filtering target.
    pub const FILTER: &str = "horizon_richselect::filter";
    /// Highlight tracking target.
    pub const HIGHLIGHT: &str = "horizon_richselect::highlight";
    /// Selection model target.
    pub const SELECTION: &str = "horizon_richselect::selection";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_richselect::config";
    /// Option providers target.
    pub const PROVIDER: &str = "horizon_richselect::provider";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time operations that run on every keystroke.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_richselect::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
