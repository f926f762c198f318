use super::{connect, fail, print_serialized};
use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use crate::table::{self, Line};
use libmulled::{Client, ImageCollection, Result};

/// Column titles of the full image listing
pub const HEADER: [&str; 4] = ["PACKAGER", "NAME", "REVISION", "VERSION"];

/// Handle the default mode: every image, one row per published version
pub fn handle_images(ctx: &AppContext) {
    let client = connect(ctx).unwrap_or_else(|e| fail(ctx, &e));

    let images = match load_images(ctx, &client) {
        Ok(images) => images,
        Err(e) => fail(ctx, &e),
    };

    if !print_serialized(ctx, &images, ctx.config.style.format) {
        println!("{}", render_images(&images));
    }
}

/// Fetch `images.json` and order it by packager and image name
pub fn load_images(ctx: &AppContext, client: &Client) -> Result<ImageCollection> {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Fetching {}", client.resource_url("images.json")),
    );

    let spinner = format::spinner(ctx, "Fetching images...");
    let result = client.fetch_images();
    spinner.finish_and_clear();

    let mut images = result?;
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Received {} images", images.len()),
    );

    images.sort();
    Ok(images)
}

/// Flattens the collection into `(packager, image, revision, version)` rows
pub fn image_rows(images: &ImageCollection) -> Vec<Line> {
    images
        .iter()
        .flat_map(|image| {
            image.versions.iter().map(move |v| {
                Line::cells([
                    image.packager.as_str(),
                    image.image.as_str(),
                    v.revision.as_str(),
                    v.version.as_str(),
                ])
            })
        })
        .collect()
}

/// Full listing table in collection order
pub fn render_images(images: &ImageCollection) -> String {
    table::render(&HEADER, &image_rows(images), table::IMAGE_GAP)
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
