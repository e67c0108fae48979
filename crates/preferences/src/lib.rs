//! # FundWise Preferences
//!
//! Durable user preferences: the colour theme and the legal disclaimer flag.
//!
//! `ThemeManager` is the only code that reads or writes the theme. Surfaces
//! that need to react to a change (icon toggles) subscribe to it instead of
//! reading shared state.

pub mod disclaimer;
pub mod error;
pub mod store;
pub mod theme;

pub use disclaimer::{is_home_path, DisclaimerGate, DISCLAIMER_KEY};
pub use error::PreferenceError;
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
pub use theme::{ThemeIcons, ThemeListener, ThemeManager, THEME_KEY};
