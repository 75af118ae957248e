//! markdown-lumen: compile a markdown file (or stdin) to HTML or JSON.

mod output;
mod settings;

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use markdown_lumen_config::Config;
use markdown_lumen_engine::{compile, read_source};

use output::format_output;
use settings::Cli;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let file_config = match &cli.config {
        Some(path) => {
            let config = Config::load_from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            if config.is_none() {
                log::warn!("Config file {} not found; using defaults", path.display());
            }
            config
        }
        None => Config::load()
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?,
    };
    if file_config.is_some() {
        log::info!("Using config file {}", config_path.display());
    }
    let config = cli.merge(file_config.unwrap_or_default());

    if cli.save_config {
        config
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        log::info!("Saved settings to {}", config_path.display());
    }

    let source = match cli.input_path() {
        Some(path) => {
            read_source(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read markdown from stdin")?;
            source
        }
    };

    let tree = compile(&source);
    log::debug!("compiled {} bytes into {} nodes", source.len(), tree.nodes.len());

    let rendered = format_output(&tree, &config)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output")?;
    Ok(())
}
