use super::{connect, fail, print_serialized};
use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use crate::table::{self, Line};
use libmulled::format::format_stamp;
use libmulled::{Client, ImageSummary, Result};

/// Column titles of the per-image version table
pub const HEADER: [&str; 4] = ["REVISION", "VERSION", "SIZE", "DATE"];

/// Handle named images: fetch and print each one in argument order.
///
/// The first failure ends the process; images already printed stay on screen.
pub fn handle_image_details(ctx: &AppContext, names: &[String]) {
    let client = connect(ctx).unwrap_or_else(|e| fail(ctx, &e));

    for name in names {
        let summary = match load_image(ctx, &client, name) {
            Ok(summary) => summary,
            Err(e) => fail(ctx, &e),
        };

        if !print_serialized(ctx, &summary, ctx.config.style.format) {
            print!("{}", render_image(&summary, name));
        }
    }
}

/// Fetch `images/<name>.json`
pub fn load_image(ctx: &AppContext, client: &Client, name: &str) -> Result<ImageSummary> {
    let path = format!("images/{}.json", name);
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Fetching {}", client.resource_url(&path)),
    );

    let spinner = format::spinner(ctx, &format!("Fetching {}...", name));
    let result = client.fetch_image(name);
    spinner.finish_and_clear();

    if let Ok(summary) = &result {
        format::print(
            ctx,
            VerbosityLevel::VeryVerbose,
            &format!("Received {} versions of {}", summary.versions.len(), name),
        );
    }
    result
}

/// Version rows in API order; a bad date turns its row into the error text
pub fn version_lines(summary: &ImageSummary) -> Vec<Line> {
    summary
        .versions
        .iter()
        .map(|v| match format_stamp(&v.date) {
            Ok(date) => Line::cells([
                v.revision.as_str(),
                v.version.as_str(),
                v.size.as_str(),
                date.as_str(),
            ]),
            Err(e) => Line::Message(e.to_string()),
        })
        .collect()
}

/// Title block, version table and trailing separator for one image.
///
/// `requested` is shown when the document carries no image name.
pub fn render_image(summary: &ImageSummary, requested: &str) -> String {
    let name = if summary.image.is_empty() {
        requested
    } else {
        summary.image.as_str()
    };
    let title = name.to_uppercase();
    let underline = "=".repeat(title.chars().count());
    let versions = table::render(&HEADER, &version_lines(summary), table::IMAGE_GAP);

    format!(
        "\n\n{}\n{}\n\n{}\n\n{}\n\n{}\n\n\n",
        title, underline, summary.homepage, summary.description, versions
    )
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
