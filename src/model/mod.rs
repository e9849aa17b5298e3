//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `catalog` - Static advanced action reference data
//! - `dialog` - Dialog registry and handles for modal overlays

pub mod catalog;
pub mod dialog;

// Re-export commonly used types
pub use catalog::{catalog, ActionEntry, ActionKind};
pub use dialog::{DialogHandle, DialogId, DialogKind, DialogRegistry};
