use clap::{CommandFactory, Parser};

mod commands;
mod config;
mod context;
mod format;
mod table;

/// mulled - browse the mulled catalog of bioinformatics container images
///
/// Without arguments every image is listed with its revisions. Given image
/// names, shows the details and version history of each one.
#[derive(Parser, Debug)]
#[command(name = "mulled")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Images to show in detail (lists all images when omitted)
    #[arg(value_name = "IMAGE")]
    images: Vec<String>,

    /// API endpoint [default: https://mulled.github.io/api/v1/]
    #[arg(long)]
    endpoint: Option<String>,

    /// Shows available builders and exits
    #[arg(long)]
    builders: bool,

    /// Output format: pretty, json, yaml
    #[arg(short, long)]
    format: Option<String>,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long)]
    timeout: Option<u64>,

    /// Control colored output: auto, always, never
    #[arg(long)]
    color: Option<String>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

/// Which listing a run produces; chosen once from the arguments
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Builders,
    AllImages,
    Images(Vec<String>),
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.builders {
            Mode::Builders
        } else if self.images.is_empty() {
            Mode::AllImages
        } else {
            Mode::Images(self.images.clone())
        }
    }

    fn overrides(&self) -> context::CliOverrides {
        context::CliOverrides {
            endpoint: self.endpoint.clone(),
            color: self.color.as_deref().map(format::ColorChoice::from),
            format: self.format.as_deref().map(format::OutputFormat::from),
            timeout: self.timeout,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        return;
    }

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(
        cli.overrides(),
        context::VerbosityLevel::from_count(cli.verbose),
    );

    match cli.mode() {
        Mode::Builders => commands::builders::handle_builders(&ctx),
        Mode::AllImages => commands::images::handle_images(&ctx),
        Mode::Images(names) => commands::image::handle_image_details(&ctx, &names),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
