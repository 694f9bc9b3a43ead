use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested style does not resolve to any loaded table.
    ///
    /// `valid` is sorted and holds canonical names.
    #[error("'{}' is not a valid Unicode type. Valid types are {}.", .name, .valid.join(", "))]
    InvalidStyle {
        /// Normalized name that failed to resolve.
        name: String,
        /// Every canonical style name known to the store.
        valid: Vec<String>,
    },

    /// The style table source is unreadable or malformed.
    #[error("Invalid style table source: {0}")]
    DataSource(String),

    /// Bad input to the table derivation helper.
    #[error("Cannot derive table: {0}")]
    Derive(String),

    /// Invalid configuration value or structure.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
