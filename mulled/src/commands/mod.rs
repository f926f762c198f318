use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, OutputFormat};
use libmulled::{Client, MulledError};
use serde::Serialize;

/// Builders listing (`--builders`)
pub mod builders;

/// Detail view for named images
pub mod image;

/// Listing of every image in the catalog
pub mod images;

/// Create a client for the resolved endpoint
pub fn connect(ctx: &AppContext) -> Result<Client, MulledError> {
    let config = ctx.client_config();
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!(
            "Using endpoint {} (timeout {}s)",
            ctx.config.endpoint, config.timeout_seconds
        ),
    );
    format::print(
        ctx,
        VerbosityLevel::Trace,
        &format!("User-Agent: {}", config.user_agent),
    );
    Client::with_config(&ctx.config.endpoint, config)
}

/// Report a fatal error and terminate with exit code 1
pub fn fail(ctx: &AppContext, err: &dyn std::error::Error) -> ! {
    format::error(ctx, &format::error_chain(err));
    std::process::exit(1);
}

/// Print a record as JSON or YAML; returns false for the pretty format
pub fn print_serialized<T: Serialize + ?Sized>(
    ctx: &AppContext,
    item: &T,
    output: OutputFormat,
) -> bool {
    match format::serialize(item, output) {
        None => false,
        Some(Ok(text)) => {
            if output == OutputFormat::Yaml {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
            true
        }
        Some(Err(e)) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Context pointing at `endpoint` with colors off
#[cfg(test)]
pub(crate) fn test_context(endpoint: &str) -> AppContext {
    let cli = crate::context::CliOverrides {
        endpoint: Some(endpoint.to_string()),
        color: Some(format::ColorChoice::Never),
        ..Default::default()
    };
    AppContext::resolve(crate::config::Config::default(), cli, VerbosityLevel::Normal)
}
