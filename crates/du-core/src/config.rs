use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::ConvertOptions;
use crate::error::CoreError;
use crate::names::normalize_text;

/// Réglages de l'application, chargés depuis `dressup.toml`.
///
/// Every field has a sane default; a config file only overrides what it sets.
///
/// # Example
/// ```
/// use du_core::config::Settings;
/// let settings = Settings::default();
/// assert!(!settings.strict_case);
/// assert!(settings.tables_path.is_none());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    // === Conversion ===
    /// Ne pas retomber sur l'autre casse.
    pub strict_case: bool,
    /// Inverser l'entrée avant substitution.
    pub reverse: bool,
    /// Default style for single-style mode. `None` = show every style.
    pub style: Option<String>,

    // === Tables ===
    /// External table file. `None` = embedded tables.
    pub tables_path: Option<PathBuf>,

    // === Output ===
    /// Colored output.
    pub color: bool,
    /// Title of the show-all table.
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_case: false,
            reverse: false,
            style: None,
            tables_path: None,
            color: true,
            title: "Dress up".to_string(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(self.strict_case, self.reverse)
    }

    /// Reject values that cannot be used.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] on a blank default style.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(style) = &self.style {
            if normalize_text(style).is_empty() {
                return Err(CoreError::Config("convert.style must not be blank".into()));
            }
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire, toutes les valeurs optionnelles.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    convert: ConvertSection,
    #[serde(default)]
    tables: TablesSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConvertSection {
    strict_case: Option<bool>,
    reverse: Option<bool>,
    style: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TablesSection {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    color: Option<bool>,
    title: Option<String>,
}

/// Parse TOML settings and merge them over the defaults.
///
/// A relative `tables.path` is resolved against `base_dir`.
///
/// # Errors
/// Returns an error if the text is not valid TOML, has unknown keys, or
/// fails [`Settings::validate`].
pub fn parse_config(text: &str, base_dir: Option<&Path>) -> Result<Settings> {
    let file: ConfigFile = toml::from_str(text).context("Erreur de parsing TOML")?;

    let mut settings = Settings::default();

    let c = file.convert;
    if let Some(v) = c.strict_case {
        settings.strict_case = v;
    }
    if let Some(v) = c.reverse {
        settings.reverse = v;
    }
    if c.style.is_some() {
        settings.style = c.style;
    }

    if let Some(path) = file.tables.path {
        settings.tables_path = Some(match base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        });
    }

    let o = file.output;
    if let Some(v) = o.color {
        settings.color = v;
    }
    if let Some(v) = o.title {
        settings.title = v;
    }

    settings.validate()?;
    Ok(settings)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use du_core::config::load_config;
/// use std::path::Path;
/// let settings = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content, path.parent())
        .with_context(|| format!("Configuration invalide dans {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("", None).unwrap(), Settings::default());
    }

    #[test]
    fn partial_override() {
        let s = parse_config("[convert]\nreverse = true\n[output]\ncolor = false\n", None).unwrap();
        assert!(s.reverse);
        assert!(!s.strict_case);
        assert!(!s.color);
        assert_eq!(s.title, "Dress up");
        assert_eq!(s.options(), ConvertOptions::new(false, true));
    }

    #[test]
    fn relative_tables_path_is_anchored() {
        let s = parse_config("[tables]\npath = \"t.toml\"\n", Some(Path::new("/etc/dressup")))
            .unwrap();
        assert_eq!(s.tables_path, Some(PathBuf::from("/etc/dressup/t.toml")));
        let s = parse_config("[tables]\npath = \"/abs/t.toml\"\n", Some(Path::new("/x"))).unwrap();
        assert_eq!(s.tables_path, Some(PathBuf::from("/abs/t.toml")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("[convert]\nstrict = true\n", None).is_err());
    }

    #[test]
    fn blank_style_is_rejected() {
        assert!(parse_config("[convert]\nstyle = \"  \"\n", None).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nstyle = \"math bold\"").unwrap();
        let s = load_config(file.path()).unwrap();
        assert_eq!(s.style.as_deref(), Some("math bold"));
    }

    #[test]
    fn shipped_default_config_parses() {
        let text = include_str!("../../../config/default.toml");
        assert!(parse_config(text, None).is_ok());
    }
}
