use super::{connect, fail, print_serialized};
use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use crate::table::{self, Line};
use libmulled::format::explicit_versioning_label;
use libmulled::{Builder, Client, Result};

/// Column titles of the builders table
pub const HEADER: [&str; 3] = ["NAME", "HOMEPAGE", "EXPLICIT VERSIONING"];

/// Handle `--builders`: list the build backends in API order
pub fn handle_builders(ctx: &AppContext) {
    let client = connect(ctx).unwrap_or_else(|e| fail(ctx, &e));

    let builders = match load_builders(ctx, &client) {
        Ok(builders) => builders,
        Err(e) => fail(ctx, &e),
    };

    if !print_serialized(ctx, &builders, ctx.config.style.format) {
        println!("{}", render_builders(&builders));
    }
}

/// Fetch `builders.json`
pub fn load_builders(ctx: &AppContext, client: &Client) -> Result<Vec<Builder>> {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Fetching {}", client.resource_url("builders.json")),
    );

    let spinner = format::spinner(ctx, "Fetching builders...");
    let result = client.fetch_builders();
    spinner.finish_and_clear();

    if let Ok(builders) = &result {
        format::print(
            ctx,
            VerbosityLevel::VeryVerbose,
            &format!("Received {} builders", builders.len()),
        );
    }
    result
}

/// Builders table; rows keep the order the API returned
pub fn render_builders(builders: &[Builder]) -> String {
    let lines: Vec<Line> = builders
        .iter()
        .map(|b| {
            Line::cells([
                b.name.as_str(),
                b.homepage.as_str(),
                explicit_versioning_label(b.explicit_versioning),
            ])
        })
        .collect();

    table::render(&HEADER, &lines, table::BUILDER_GAP)
}

#[cfg(test)]
#[path = "builders_tests.rs"]
mod tests;
