use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use du_core::config::Settings;
use du_core::engine::{self, DEFAULT_SAMPLE};
use du_core::error::CoreError;
use du_core::provider::TomlProvider;
use du_core::store::StyleStore;

pub mod cli;
pub mod output;

fn main() -> Result<ExitCode> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Dérivation de tables (hors-ligne)
    if let Some(path) = cli.derive.as_deref() {
        return derive_tables(path);
    }

    // 4. Charger la config, puis appliquer les overrides CLI
    let settings = apply_overrides(resolve_config(&cli)?, &cli);

    let Some(characters) = cli.characters.as_deref() else {
        if cli.complete.is_none() {
            println!("No characters provided to convert.");
            return Ok(if cli.has_conversion_flags() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
        return run(&cli, &settings, DEFAULT_SAMPLE);
    };
    run(&cli, &settings, characters)
}

fn run(cli: &cli::Cli, settings: &Settings, characters: &str) -> Result<ExitCode> {
    // 5. Charger les tables
    let provider = match &settings.tables_path {
        Some(path) => TomlProvider::from_path(path),
        None => TomlProvider::embedded(),
    };
    let store = StyleStore::load(&provider).context("Impossible de charger les tables de styles")?;
    let options = settings.options();

    // 6. Complétion
    if let Some(prefix) = cli.complete.as_deref() {
        for (name, preview) in engine::complete(&store, prefix, characters, options) {
            println!("{name}\t{preview}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    // 7. Un seul style, ou tous
    if let Some(style) = settings.style.as_deref() {
        return match engine::convert(&store, characters, style, options) {
            Ok(converted) => {
                println!("{converted}");
                Ok(ExitCode::SUCCESS)
            }
            Err(e @ CoreError::InvalidStyle { .. }) => {
                eprintln!("{}", output::render_error(&e.to_string(), settings.color));
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        };
    }

    let all = engine::show_all(&store, characters, options);
    println!("{}", output::render_table(&settings.title, all.iter(), settings.color));
    Ok(ExitCode::SUCCESS)
}

/// Print the TOML tables derived from a font sample file.
fn derive_tables(path: &Path) -> Result<ExitCode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let tables = du_core::derive::parse_samples(&text)
        .with_context(|| format!("Échantillons invalides dans {}", path.display()))?;
    log::info!("{} tables dérivées depuis {}", tables.len(), path.display());
    print!("{}", du_core::derive::to_toml(&tables));
    Ok(ExitCode::SUCCESS)
}

/// Load `--config` if it exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<Settings> {
    if cli.config.exists() {
        du_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(Settings::default())
    }
}

/// CLI flags win over the config file.
fn apply_overrides(mut settings: Settings, cli: &cli::Cli) -> Settings {
    settings.strict_case |= cli.strict_case;
    settings.reverse |= cli.reverse;
    if let Some(style) = &cli.style {
        settings.style = Some(style.clone());
    }
    if let Some(path) = &cli.tables {
        settings.tables_path = Some(path.clone());
    }
    if cli.no_color {
        settings.color = false;
    }
    settings
}
