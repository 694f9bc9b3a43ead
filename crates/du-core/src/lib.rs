//! Style tables, name resolution and substitution engine for dressup.
//!
//! This crate holds everything except the command-line front-end: the
//! [`StyleStore`] and its loader, the [`convert`] / [`show_all`] engine,
//! configuration, and the offline table derivation helper.

pub mod config;
pub mod derive;
pub mod engine;
pub mod error;
pub mod names;
pub mod provider;
pub mod store;
pub mod table;
pub mod traits;

pub use config::Settings;
pub use engine::{complete, convert, show_all, ConvertOptions, StyledVariants};
pub use error::CoreError;
pub use names::{humanize, normalize_text};
pub use provider::TomlProvider;
pub use store::StyleStore;
pub use table::StyleTable;
pub use traits::StyleProvider;
