use std::collections::HashMap;

/// Character map for a single style.
///
/// Built once by [`StyleStore`](crate::store::StyleStore) and never mutated
/// afterwards. A table may be partial: characters it does not know pass
/// through [`StyleTable::lookup`] unchanged.
///
/// # Example
/// ```
/// use du_core::table::StyleTable;
/// let table = StyleTable::new("circled", [('a', 'ⓐ'), ('b', 'ⓑ')]);
/// assert_eq!(table.lookup('a', false), 'ⓐ');
/// assert_eq!(table.lookup('A', false), 'ⓐ');
/// assert_eq!(table.lookup('A', true), 'A');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleTable {
    name: String,
    map: HashMap<char, char>,
}

impl StyleTable {
    /// Build a table from `(source, replacement)` pairs.
    ///
    /// A later pair for the same source character replaces an earlier one.
    #[must_use]
    pub fn new(name: impl Into<String>, pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            name: name.into(),
            map: pairs.into_iter().collect(),
        }
    }

    /// Canonical name of the style.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of mapped characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Exact mapping for `c`, without any case coercion.
    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Case-fallback lookup.
    ///
    /// Resolution order: exact, then upper case, then lower case, then `c`
    /// itself. With `strict_case` only the exact mapping is tried.
    ///
    /// Case forms that expand to several characters (`'ß'` → `"SS"`) are
    /// skipped: tables map single characters only.
    ///
    /// # Example
    /// ```
    /// use du_core::table::StyleTable;
    /// let table = StyleTable::new("negative_circled", [('H', '🅗')]);
    /// assert_eq!(table.lookup('h', false), '🅗');
    /// assert_eq!(table.lookup('h', true), 'h');
    /// assert_eq!(table.lookup('7', false), '7');
    /// ```
    #[inline]
    #[must_use]
    pub fn lookup(&self, c: char, strict_case: bool) -> char {
        if let Some(mapped) = self.get(c) {
            return mapped;
        }
        if strict_case {
            return c;
        }
        single_char(c.to_uppercase())
            .and_then(|upper| self.get(upper))
            .or_else(|| single_char(c.to_lowercase()).and_then(|lower| self.get(lower)))
            .unwrap_or(c)
    }

    /// Iterate over `(source, replacement)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }

    /// Replacement → source map, if the table is injective.
    ///
    /// Returns `None` when two sources share a replacement.
    #[must_use]
    pub fn inverse(&self) -> Option<HashMap<char, char>> {
        let mut inverse = HashMap::with_capacity(self.map.len());
        for (src, dst) in self.iter() {
            if inverse.insert(dst, src).is_some() {
                return None;
            }
        }
        Some(inverse)
    }
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_only() -> StyleTable {
        StyleTable::new("negative_circled", [('A', '🅐'), ('B', '🅑')])
    }

    #[test]
    fn exact_match_wins_over_fallback() {
        let table = StyleTable::new("mixed", [('a', '1'), ('A', '2')]);
        assert_eq!(table.lookup('a', false), '1');
        assert_eq!(table.lookup('A', false), '2');
    }

    #[test]
    fn lowercase_promotes_to_uppercase_entry() {
        assert_eq!(upper_only().lookup('a', false), '🅐');
    }

    #[test]
    fn uppercase_demotes_to_lowercase_entry() {
        let table = StyleTable::new("circled", [('a', 'ⓐ')]);
        assert_eq!(table.lookup('A', false), 'ⓐ');
    }

    #[test]
    fn strict_case_skips_fallback() {
        assert_eq!(upper_only().lookup('a', true), 'a');
        assert_eq!(upper_only().lookup('A', true), '🅐');
    }

    #[test]
    fn unmapped_passes_through() {
        let table = upper_only();
        for c in ['1', '!', ' ', '😀', 'é'] {
            assert_eq!(table.lookup(c, false), c);
            assert_eq!(table.lookup(c, true), c);
        }
    }

    #[test]
    fn multi_char_case_forms_are_ignored() {
        // 'ß'.to_uppercase() == "SS"
        let table = StyleTable::new("s", [('S', 'Ｓ')]);
        assert_eq!(table.lookup('ß', false), 'ß');
    }

    #[test]
    fn inverse_detects_collisions() {
        assert!(upper_only().inverse().is_some());
        let table = StyleTable::new("dup", [('a', 'x'), ('b', 'x')]);
        assert!(table.inverse().is_none());
    }
}
