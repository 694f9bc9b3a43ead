use std::collections::HashSet;
use std::fmt::Write as _;

use crate::error::CoreError;
use crate::traits::RawTables;

/// Drop the positions where `base` and `styled` hold the same character.
///
/// Both strings must have the same number of characters and contain no
/// duplicates. Characters are compared position by position.
///
/// # Errors
/// Returns [`CoreError::Derive`] on a length mismatch or duplicates.
///
/// # Example
/// ```
/// use du_core::derive::remove_common_characters;
/// let (a, b) = remove_common_characters("ab1", "ⓐⓑ1").unwrap();
/// assert_eq!((a.as_str(), b.as_str()), ("ab", "ⓐⓑ"));
/// ```
pub fn remove_common_characters(base: &str, styled: &str) -> Result<(String, String), CoreError> {
    let (base_len, styled_len) = (base.chars().count(), styled.chars().count());
    if base_len != styled_len {
        return Err(CoreError::Derive(format!(
            "both strings must be the same length, got {base_len} and {styled_len}"
        )));
    }
    for (label, s) in [("base", base), ("styled", styled)] {
        let mut seen = HashSet::new();
        if let Some(dup) = s.chars().find(|&c| !seen.insert(c)) {
            return Err(CoreError::Derive(format!(
                "{label} sample contains '{dup}' more than once"
            )));
        }
    }
    Ok(base
        .chars()
        .zip(styled.chars())
        .filter(|(a, b)| a != b)
        .unzip())
}

/// Build tables from font samples.
///
/// The first non-empty line is the base alphabet. Each following non-empty
/// line is `<style> <sample>`, where the sample is the base alphabet typed
/// in that style. Characters the sample leaves unchanged are dropped.
///
/// # Errors
/// Returns [`CoreError::Derive`] if there is no base line, if a line has no
/// sample, or if [`remove_common_characters`] rejects a sample.
///
/// # Example
/// ```
/// use du_core::derive::parse_samples;
/// let tables = parse_samples("qwer\nmock asef\n").unwrap();
/// assert_eq!(tables[0].0, "mock");
/// assert_eq!(tables[0].1.len(), 3);
/// ```
pub fn parse_samples(text: &str) -> Result<RawTables, CoreError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let base = lines
        .next()
        .ok_or_else(|| CoreError::Derive("missing base alphabet line".into()))?;

    let mut tables = Vec::new();
    for line in lines {
        let Some((name, sample)) = line.split_once(char::is_whitespace) else {
            return Err(CoreError::Derive(format!("'{line}' has no sample")));
        };
        let (from, to) = remove_common_characters(base, sample.trim())?;
        let pairs = from
            .chars()
            .zip(to.chars())
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        tables.push((name.to_string(), pairs));
    }
    Ok(tables)
}

/// Serialize tables into the format read by
/// [`TomlProvider`](crate::provider::TomlProvider).
#[must_use]
pub fn to_toml(tables: &RawTables) -> String {
    let quote = |s: &str| toml::Value::String(s.to_string()).to_string();
    let mut out = String::new();
    for (style, pairs) in tables {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "[{}]", quote(style));
        for (key, value) in pairs {
            let _ = writeln!(out, "{} = {}", quote(key), quote(value));
        }
    }
    out
}
