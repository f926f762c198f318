use crate::context::{AppContext, VerbosityLevel};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stderr is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        write!(f, "{}", s)
    }
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Pretty,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        write!(f, "{}", s)
    }
}

/// Serializes any catalog record for the json and yaml output formats.
///
/// Returns `None` for [`OutputFormat::Pretty`], which callers render as a table.
pub fn serialize<T: Serialize + ?Sized>(
    item: &T,
    format: OutputFormat,
) -> Option<Result<String, String>> {
    match format {
        OutputFormat::Pretty => None,
        OutputFormat::Json => Some(
            serde_json::to_string_pretty(item)
                .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        ),
        OutputFormat::Yaml => Some(
            serde_yaml::to_string(item).map_err(|e| format!("Failed to serialize to YAML: {}", e)),
        ),
    }
}

/// Check if we should use colors on stderr
pub fn should_color(ctx: &AppContext) -> bool {
    match ctx.config.style.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Red cross prefix for error lines
pub fn error_mark(ctx: &AppContext) -> String {
    if should_color(ctx) {
        format!("{}", "✗".red().bold())
    } else {
        "✗".to_string()
    }
}

/// Print a diagnostic message to stderr when the verbosity allows it
pub fn print(ctx: &AppContext, level: VerbosityLevel, message: &str) {
    if ctx.verbosity >= level {
        if should_color(ctx) {
            eprintln!("{}", message.dimmed());
        } else {
            eprintln!("{}", message);
        }
    }
}

/// Print an error message to stderr
pub fn error(ctx: &AppContext, message: &str) {
    eprintln!("{} {}", error_mark(ctx), message);
}

/// Renders an error with its chain of causes on one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Spinner on stderr while a request is in flight.
///
/// Hidden unless stderr is a terminal, so piped output stays clean.
pub fn spinner(ctx: &AppContext, message: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() || ctx.verbosity > VerbosityLevel::Normal {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
