use std::collections::{HashMap, HashSet};

use crate::error::CoreError;
use crate::names::normalize_text;
use crate::table::StyleTable;
use crate::traits::{RawTables, StyleProvider};

/// Every loaded [`StyleTable`], keyed by canonical name.
///
/// Owned by the caller and shared read-only; nothing mutates it after
/// construction, so `&StyleStore` can be used from several threads at once.
///
/// # Example
/// ```
/// use du_core::provider::TomlProvider;
/// use du_core::store::StyleStore;
/// let store = StyleStore::load(&TomlProvider::embedded()).unwrap();
/// assert!(store.get("circled").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleStore {
    /// Load order.
    tables: Vec<StyleTable>,
    index: HashMap<String, usize>,
}

impl StyleStore {
    /// Load and validate every table from `provider`.
    ///
    /// # Errors
    /// Returns [`CoreError::DataSource`] if the provider fails, if a key or
    /// value is not exactly one character, or if two styles share a
    /// canonical name.
    pub fn load(provider: &impl StyleProvider) -> Result<Self, CoreError> {
        let store = Self::from_raw(provider.load()?)?;
        log::debug!("{} style tables loaded", store.len());
        Ok(store)
    }

    /// Build a store from raw string pairs.
    ///
    /// # Errors
    /// See [`StyleStore::load`].
    pub fn from_raw(raw: RawTables) -> Result<Self, CoreError> {
        let mut tables = Vec::with_capacity(raw.len());
        for (style, pairs) in raw {
            let name = normalize_text(&style);
            let mut chars = Vec::with_capacity(pairs.len());
            let mut seen = HashSet::with_capacity(pairs.len());
            for (key, value) in &pairs {
                let src = one_char(key)
                    .ok_or_else(|| bad_entry(&style, key, "key must be a single character"))?;
                let dst = one_char(value)
                    .ok_or_else(|| bad_entry(&style, key, "value must be a single character"))?;
                if !seen.insert(src) {
                    return Err(bad_entry(&style, key, "duplicate key"));
                }
                chars.push((src, dst));
            }
            tables.push(StyleTable::new(name, chars));
        }
        Self::from_tables(tables)
    }

    /// Build a store from ready-made tables, keeping their order.
    ///
    /// Table names are used as-is and must already be canonical.
    ///
    /// # Errors
    /// Returns [`CoreError::DataSource`] on a duplicate name.
    pub fn from_tables(tables: Vec<StyleTable>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(tables.len());
        for (i, table) in tables.iter().enumerate() {
            if index.insert(table.name().to_string(), i).is_some() {
                return Err(CoreError::DataSource(format!(
                    "style '{}' is defined more than once",
                    table.name()
                )));
            }
        }
        Ok(Self { tables, index })
    }

    /// Table for an already-canonical name.
    #[must_use]
    pub fn get(&self, canonical: &str) -> Option<&StyleTable> {
        self.index.get(canonical).map(|&i| &self.tables[i])
    }

    /// Normalize `style_name` and look it up.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidStyle`] with the normalized name and the
    /// sorted list of valid names.
    pub fn resolve(&self, style_name: &str) -> Result<&StyleTable, CoreError> {
        let name = normalize_text(style_name);
        match self.get(&name) {
            Some(table) => Ok(table),
            None => Err(CoreError::InvalidStyle {
                name,
                valid: self.sorted_names(),
            }),
        }
    }

    /// Tables in load order.
    #[must_use]
    pub fn tables(&self) -> &[StyleTable] {
        &self.tables
    }

    /// Tables in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleTable> {
        self.tables.iter()
    }

    /// Canonical names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.iter().map(StyleTable::name)
    }

    #[must_use]
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names().map(str::to_string).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<'a> IntoIterator for &'a StyleStore {
    type Item = &'a StyleTable;
    type IntoIter = std::slice::Iter<'a, StyleTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn one_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn bad_entry(style: &str, key: &str, what: &str) -> CoreError {
    CoreError::DataSource(format!("'{style}.{key}': {what}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TomlProvider;

    fn raw(style: &str, pairs: &[(&str, &str)]) -> (String, Vec<(String, String)>) {
        (
            style.to_string(),
            pairs
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn style_headings_are_normalized() {
        let store = StyleStore::from_raw(vec![raw("Negative Circled", &[("A", "🅐")])]).unwrap();
        assert!(store.get("negative_circled").is_some());
        assert_eq!(store.resolve("negative-circled").unwrap().name(), "negative_circled");
    }

    #[test]
    fn keeps_load_order() {
        let store =
            StyleStore::from_raw(vec![raw("zeta", &[]), raw("alpha", &[]), raw("mid", &[])])
                .unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(store.sorted_names(), ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn rejects_multi_char_entries() {
        let err = StyleStore::from_raw(vec![raw("s", &[("ab", "x")])]).unwrap_err();
        assert!(matches!(err, CoreError::DataSource(_)));
        let err = StyleStore::from_raw(vec![raw("s", &[("a", "")])]).unwrap_err();
        assert!(matches!(err, CoreError::DataSource(_)));
    }

    #[test]
    fn rejects_duplicate_styles_after_normalization() {
        let err =
            StyleStore::from_raw(vec![raw("Math Bold", &[]), raw("math-bold", &[])]).unwrap_err();
        assert!(err.to_string().contains("math_bold"));
    }

    #[test]
    fn unknown_style_reports_sorted_names() {
        let store = StyleStore::from_raw(vec![raw("zeta", &[]), raw("alpha", &[])]).unwrap();
        match store.resolve(" No Such-Style ") {
            Err(CoreError::InvalidStyle { name, valid }) => {
                assert_eq!(name, "no_such_style");
                assert_eq!(valid, ["alpha", "zeta"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn provider_failure_propagates() {
        let err = StyleStore::load(&TomlProvider::from_str("not = [valid")).unwrap_err();
        assert!(matches!(err, CoreError::DataSource(_)));
    }

    #[test]
    fn embedded_set_is_complete() {
        let store = StyleStore::load(&TomlProvider::embedded()).unwrap();
        for name in [
            "circled",
            "negative_circled",
            "fullwidth",
            "math_bold",
            "math_italic",
            "math_bold_italic",
            "math_script",
            "math_fraktur",
            "math_double_struck",
            "math_monospace",
            "math_sans",
            "math_sans_bold",
            "parenthesized",
            "squared",
            "negative_squared",
            "small_caps",
            "superscript",
            "subscript",
            "inverted",
            "reversed",
        ] {
            assert!(store.get(name).is_some(), "missing {name}");
        }
    }
}
