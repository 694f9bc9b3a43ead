use crate::error::CoreError;

/// Raw table definitions, in source order: `(style, [(source, replacement)])`.
///
/// Keys and values are still strings here; [`StyleStore`](crate::store::StyleStore)
/// checks that each one holds exactly one character.
pub type RawTables = Vec<(String, Vec<(String, String)>)>;

/// Supplies style table definitions to the store.
///
/// Implemented by : `TomlProvider`.
///
/// # Example
/// ```
/// use du_core::error::CoreError;
/// use du_core::traits::{RawTables, StyleProvider};
///
/// struct Fixed;
/// impl StyleProvider for Fixed {
///     fn load(&self) -> Result<RawTables, CoreError> {
///         Ok(vec![("circled".into(), vec![("a".into(), "ⓐ".into())])])
///     }
/// }
/// assert_eq!(Fixed.load().unwrap().len(), 1);
/// ```
pub trait StyleProvider {
    /// Read every style definition.
    ///
    /// # Errors
    /// Returns [`CoreError::DataSource`] if the source is unreadable or
    /// malformed. Callers must not retry.
    fn load(&self) -> Result<RawTables, CoreError>;
}

impl<P: StyleProvider + ?Sized> StyleProvider for &P {
    fn load(&self) -> Result<RawTables, CoreError> {
        (**self).load()
    }
}
