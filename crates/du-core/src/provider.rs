use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::traits::{RawTables, StyleProvider};

/// Table set compiled into the crate.
pub const EMBEDDED_TABLES: &str = include_str!("../data/translator.toml");

/// Reads style tables from a TOML document.
///
/// Each top-level table is a style; each entry maps a source character to
/// its replacement. Order is preserved.
///
/// ```toml
/// [circled]
/// "a" = "ⓐ"
/// "b" = "ⓑ"
/// ```
#[derive(Clone, Debug)]
pub enum TomlProvider {
    /// Re-read from disk on every `load`.
    File(PathBuf),
    /// In-memory document.
    Text(String),
    /// [`EMBEDDED_TABLES`].
    Embedded,
}

impl TomlProvider {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::Embedded
    }
}

impl StyleProvider for TomlProvider {
    fn load(&self) -> Result<RawTables, CoreError> {
        match self {
            Self::File(path) => parse_tables(&read_file(path)?),
            Self::Text(text) => parse_tables(text),
            Self::Embedded => parse_tables(EMBEDDED_TABLES),
        }
    }
}

fn read_file(path: &Path) -> Result<String, CoreError> {
    std::fs::read_to_string(path)
        .map_err(|e| CoreError::DataSource(format!("cannot read {}: {e}", path.display())))
}

/// Parse a TOML table document into [`RawTables`].
///
/// # Errors
/// Returns [`CoreError::DataSource`] on TOML syntax errors, on a top-level
/// value that is not a table, or on a non-string entry.
pub fn parse_tables(text: &str) -> Result<RawTables, CoreError> {
    let doc: toml::Table = toml::from_str(text)
        .map_err(|e| CoreError::DataSource(format!("TOML parse error: {e}")))?;

    let mut tables = Vec::with_capacity(doc.len());
    for (style, value) in doc {
        let toml::Value::Table(entries) = value else {
            return Err(CoreError::DataSource(format!(
                "'{style}' must be a table of character mappings"
            )));
        };
        let mut pairs = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let toml::Value::String(replacement) = value else {
                return Err(CoreError::DataSource(format!(
                    "'{style}.{key}' must map to a string"
                )));
            };
            pairs.push((key, replacement));
        }
        tables.push((style, pairs));
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn preserves_document_order() {
        let tables = parse_tables("[zeta]\n\"a\" = \"1\"\n[alpha]\n\"b\" = \"2\"\n\"a\" = \"3\"\n")
            .unwrap();
        let names: Vec<&str> = tables.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(tables[1].1[0], ("b".to_string(), "2".to_string()));
    }

    #[test]
    fn rejects_scalar_style() {
        let err = parse_tables("circled = 3\n").unwrap_err();
        assert!(matches!(err, CoreError::DataSource(_)));
    }

    #[test]
    fn rejects_non_string_entry() {
        let err = parse_tables("[circled]\na = 1\n").unwrap_err();
        assert!(err.to_string().contains("circled.a"));
    }

    #[test]
    fn rejects_bad_syntax() {
        assert!(parse_tables("[circled\n").is_err());
    }

    #[test]
    fn embedded_tables_parse() {
        let tables = TomlProvider::embedded().load().unwrap();
        assert!(tables.iter().any(|(n, _)| n == "circled"));
        assert!(tables.iter().any(|(n, _)| n == "negative_circled"));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[circled]\n\"a\" = \"ⓐ\"").unwrap();
        let tables = TomlProvider::from_path(file.path()).load().unwrap();
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn missing_file_is_data_source_error() {
        let err = TomlProvider::from_path("/definitely/not/here.toml")
            .load()
            .unwrap_err();
        assert!(matches!(err, CoreError::DataSource(_)));
    }
}
