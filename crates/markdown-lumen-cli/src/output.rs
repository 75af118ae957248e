use anyhow::{Context, Result};
use markdown_lumen_config::{Config, OutputFormat};
use markdown_lumen_engine::{OutputTree, escape_html};

/// Formats a compiled tree as the configured output.
pub fn format_output(tree: &OutputTree, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(tree).context("Failed to serialize output tree")
        }
        OutputFormat::Html if config.standalone => {
            Ok(standalone_document(&tree.to_html(), config))
        }
        OutputFormat::Html => Ok(tree.to_html()),
    }
}

/// Wraps an HTML body in a minimal document.
pub fn standalone_document(body: &str, config: &Config) -> String {
    let mut head = String::from("<meta charset=\"utf-8\">\n");
    if let Some(title) = &config.title {
        head.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }
    if let Some(stylesheet) = &config.stylesheet {
        head.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(&stylesheet.to_string_lossy())
        ));
    }
    format!("<!DOCTYPE html>\n<html>\n<head>\n{head}</head>\n<body>\n{body}\n</body>\n</html>")
}
