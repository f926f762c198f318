//! mulled - client library for the mulled image catalog
//!
//! The mulled API publishes a registry of packaged bioinformatics tools as
//! container-image "recipes". This crate fetches and decodes the three
//! documents the API serves and provides the pieces needed to display them.
//!
//! # Quick Start
//!
//! ```no_run
//! use libmulled::Client;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(libmulled::client::DEFAULT_ENDPOINT)?;
//!
//!     let mut images = client.fetch_images()?;
//!     images.sort();
//!     for image in &images {
//!         println!("{}/{}", image.packager, image.image);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`client`] - blocking HTTP client for the catalog endpoints
//! - [`catalog`] - wire types, JSON decoding and image ordering
//! - [`format`] - display formatting for dates and builder flags
//! - [`error`] - error taxonomy shared by all of the above

#![warn(clippy::all)]

/// Returns the libmulled crate version.
///
/// # Examples
///
/// ```
/// let version = libmulled::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod catalog;
pub mod client;
pub mod error;
pub mod format;

pub use catalog::{Builder, ImageCollection, ImageSummary, VersionEntry};
pub use client::{Client, ClientConfig};
pub use error::{MulledError, Result};
