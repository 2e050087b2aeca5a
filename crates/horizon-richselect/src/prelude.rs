//! Prelude module for Horizon RichSelect.
//!
//! ```ignore
//! use horizon_richselect::prelude::*;
//! ```

// ============================================================================
// Error Handling
// ============================================================================

pub use crate::{Error, Result};

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::{ConnectionId, EventSender, Signal};

// ============================================================================
// Options and Filtering
// ============================================================================

pub use crate::filter::{FilteredOptions, Query};
pub use crate::option::{NormalizedOption, OptionSet, OptionValue};
pub use crate::provider::{OptionsProvider, StaticOptions};

// ============================================================================
// Dropdown State
// ============================================================================

pub use crate::config::{BlurPolicy, RichSelectConfig};
pub use crate::controller::{Changes, DropdownController, OpenState};
pub use crate::highlight::NavigationMode;
pub use crate::input::{FocusSource, Intent, Key};

// ============================================================================
// Rendering
// ============================================================================

pub use crate::render::{PlainTextRenderer, Renderer};
pub use crate::snapshot::{DropdownSnapshot, RowState};
