use std::path::PathBuf;

use clap::Parser;

/// dressup — convert text to decorative Unicode styles.
///
/// Without --type, every style is shown side by side.
#[derive(Parser, Debug)]
#[command(name = "dressup", version, about, long_about = None)]
pub struct Cli {
    /// Texte à convertir.
    pub characters: Option<String>,

    /// Do not fall back to a different letter case.
    #[arg(short, long, default_value_t = false)]
    pub strict_case: bool,

    /// Reverse the input before converting.
    #[arg(short, long, default_value_t = false)]
    pub reverse: bool,

    /// Style to convert to, e.g. "circled" or "math-bold".
    #[arg(short = 't', long = "type", value_name = "STYLE")]
    pub style: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Style table file (TOML). Overrides the config and the built-in tables.
    #[arg(long, value_name = "PATH")]
    pub tables: Option<PathBuf>,

    /// List styles starting with PREFIX, with a preview of CHARACTERS.
    #[arg(long, value_name = "PREFIX")]
    pub complete: Option<String>,

    /// Build tables from a font sample file and print them as TOML.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["characters", "style", "complete"])]
    pub derive: Option<PathBuf>,

    /// Désactiver la couleur.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Whether any conversion option was passed on the command line.
    #[must_use]
    pub fn has_conversion_flags(&self) -> bool {
        self.style.is_some() || self.strict_case || self.reverse
    }
}
