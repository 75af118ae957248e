use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use markdown_lumen_config::{Config, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Compile markdown to HTML or to a JSON output tree.
#[derive(Debug, Parser)]
#[command(name = "markdown-lumen", version, about)]
pub struct Cli {
    /// Markdown file to compile. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Wrap HTML in a complete document.
    #[arg(long)]
    pub standalone: bool,

    /// Stylesheet to link from a standalone document.
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Title of a standalone document.
    #[arg(long)]
    pub title: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Applies command-line flags over the file config.
    pub fn merge(&self, config: Config) -> Config {
        Config {
            format: self.format.map(Into::into).unwrap_or(config.format),
            standalone: self.standalone || config.standalone,
            stylesheet: self.stylesheet.clone().or(config.stylesheet),
            title: self.title.clone().or(config.title),
        }
    }
}
