//! Horizon RichSelect - a filterable, keyboard-navigable select widget core.
//!
//! A rich select is a button that opens a dropdown list with a search box.
//! Typing narrows the list, the arrow keys move a highlight, and Enter or a
//! click commits the highlighted option. This crate holds the interaction
//! state and its rules; drawing is left to a [`Renderer`](render::Renderer)
//! that reads [`DropdownSnapshot`]s.
//!
//! # Example
//!
//! ```
//! use horizon_richselect::prelude::*;
//!
//! let options = OptionSet::from_pairs([(1, "Red"), (2, "Green"), (3, "Blue")])?;
//! let mut dropdown = DropdownController::new()
//!     .with_options(options)
//!     .with_config(RichSelectConfig::new().with_placeholder("Pick a color"));
//!
//! dropdown.dispatch(Intent::Activate)?;
//! dropdown.dispatch(Intent::QueryChanged("bl".into()))?;
//! dropdown.dispatch(Intent::ArrowDown)?;
//!
//! let text = PlainTextRenderer::new().render(&dropdown.snapshot());
//! assert_eq!(text, "[Pick a color]\nsearch: bl\n> Blue");
//!
//! dropdown.dispatch(Intent::Enter)?;
//! assert_eq!(dropdown.selected_value(), Some(OptionValue::Int(3)));
//! # Ok::<(), horizon_richselect::Error>(())
//! ```

pub use horizon_richselect_core::*;

pub mod config;
pub mod controller;
pub mod filter;
pub mod highlight;
pub mod input;
pub mod option;
pub mod prelude;
pub mod provider;
pub mod render;
mod selection;
pub mod snapshot;

pub use config::{BlurPolicy, RichSelectConfig};
pub use controller::{Changes, DropdownController, OpenState};
pub use filter::{FilteredOptions, Query, filter};
pub use highlight::{HighlightTracker, NavigationMode};
pub use input::{FocusSource, Intent, Key};
pub use option::{NormalizedOption, OptionSet, OptionValue};
pub use provider::{OptionsProvider, StaticOptions};
pub use render::{MarkerStyle, PlainTextRenderer, Renderer};
pub use snapshot::{DropdownSnapshot, OptionRow, RowState};

static_assertions::assert_impl_all!(OptionSet: Send, Sync, Clone);
static_assertions::assert_impl_all!(DropdownSnapshot: Send, Sync, Clone);
static_assertions::assert_impl_all!(DropdownController: Send, Sync);
