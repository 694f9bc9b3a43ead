use rayon::prelude::*;

use crate::error::CoreError;
use crate::names::{humanize, hyphenate, normalize_text};
use crate::store::StyleStore;
use crate::table::StyleTable;

/// Sample text used for previews when the caller has none.
pub const DEFAULT_SAMPLE: &str = "Dress Up!";

/// Per-request substitution options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Forbid falling back to the other letter case.
    pub strict_case: bool,
    /// Reverse the input before substitution.
    pub reverse: bool,
}

impl ConvertOptions {
    #[must_use]
    pub fn new(strict_case: bool, reverse: bool) -> Self {
        Self {
            strict_case,
            reverse,
        }
    }
}

/// Substitute every character of `characters` through `table`.
///
/// With `reverse`, characters are read back to front *before* mapping.
///
/// # Example
/// ```
/// use du_core::engine::{apply, ConvertOptions};
/// use du_core::table::StyleTable;
/// let table = StyleTable::new("circled", [('a', 'ⓐ'), ('b', 'ⓑ')]);
/// assert_eq!(apply(&table, "ab!", ConvertOptions::default()), "ⓐⓑ!");
/// assert_eq!(apply(&table, "ab!", ConvertOptions::new(false, true)), "!ⓑⓐ");
/// ```
#[must_use]
pub fn apply(table: &StyleTable, characters: &str, options: ConvertOptions) -> String {
    let strict = options.strict_case;
    if options.reverse {
        characters
            .chars()
            .rev()
            .map(|c| table.lookup(c, strict))
            .collect()
    } else {
        characters.chars().map(|c| table.lookup(c, strict)).collect()
    }
}

/// Convert `characters` to the style named `style_name`.
///
/// The name is normalized first, so `"Negative circled"`,
/// `"negative-circled"` and `"NEGATIVE_CIRCLED"` are equivalent.
///
/// # Errors
/// Returns [`CoreError::InvalidStyle`] if no table matches.
///
/// # Example
/// ```
/// use du_core::engine::{convert, ConvertOptions};
/// use du_core::provider::TomlProvider;
/// use du_core::store::StyleStore;
/// let store = StyleStore::load(&TomlProvider::embedded()).unwrap();
/// let out = convert(&store, "hello", "Circled", ConvertOptions::default()).unwrap();
/// assert_eq!(out, "ⓗⓔⓛⓛⓞ");
/// ```
pub fn convert(
    store: &StyleStore,
    characters: &str,
    style_name: &str,
    options: ConvertOptions,
) -> Result<String, CoreError> {
    let table = store.resolve(style_name)?;
    Ok(apply(table, characters, options))
}

/// Conversions of one input through every loaded style.
///
/// Keyed by display name ([`humanize`]), in store load order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledVariants {
    entries: Vec<(String, String)>,
}

impl StyledVariants {
    /// Converted text for a display name such as `"Negative circled"`.
    #[must_use]
    pub fn get(&self, display_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == display_name)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for StyledVariants {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Convert `characters` through every style in `store`.
///
/// Each style is computed independently with the same algorithm as
/// [`convert`]. Never fails: only known styles are visited.
///
/// # Example
/// ```
/// use du_core::engine::{show_all, ConvertOptions};
/// use du_core::provider::TomlProvider;
/// use du_core::store::StyleStore;
/// let store = StyleStore::load(&TomlProvider::embedded()).unwrap();
/// let all = show_all(&store, "hello", ConvertOptions::default());
/// assert_eq!(all.len(), store.len());
/// assert_eq!(all.get("Circled"), Some("ⓗⓔⓛⓛⓞ"));
/// ```
#[must_use]
pub fn show_all(store: &StyleStore, characters: &str, options: ConvertOptions) -> StyledVariants {
    let entries = store
        .tables()
        .par_iter()
        .map(|table| (humanize(table.name()), apply(table, characters, options)))
        .collect();
    StyledVariants { entries }
}

/// Styles whose canonical name starts with `incomplete`, with a preview.
///
/// Returns `(hyphenated name, sample converted)` pairs in load order.
///
/// # Example
/// ```
/// use du_core::engine::{complete, ConvertOptions};
/// use du_core::provider::TomlProvider;
/// use du_core::store::StyleStore;
/// let store = StyleStore::load(&TomlProvider::embedded()).unwrap();
/// let hits = complete(&store, "Negative C", "ab", ConvertOptions::default());
/// assert_eq!(hits, vec![("negative-circled".to_string(), "🅐🅑".to_string())]);
/// ```
#[must_use]
pub fn complete(
    store: &StyleStore,
    incomplete: &str,
    sample: &str,
    options: ConvertOptions,
) -> Vec<(String, String)> {
    let prefix = normalize_text(incomplete);
    store
        .iter()
        .filter(|table| table.name().starts_with(&prefix))
        .map(|table| (hyphenate(table.name()), apply(table, sample, options)))
        .collect()
}
