//! Catalog records served by the mulled API.
//!
//! The API publishes three JSON resources: the full image listing
//! (`images.json`), one document per image (`images/<name>.json`) and the
//! builder list (`builders.json`). The types here mirror those documents
//! field for field. Decoding is lenient about absent data: unknown keys are
//! ignored and missing or `null` fields take their zero value.

use crate::error::{MulledError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;


/// One packaged tool together with its published builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    /// Image identifier, used both for lookup and display
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Channel or maintainer namespace (primary sort key)
    #[serde(default, deserialize_with = "null_as_default")]
    pub packager: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Builds in the order the API lists them
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<VersionEntry>,
}

/// One published build of an image.
///
/// `size` and `date` are display strings; only `date` is ever reparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revision: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    /// RFC 3339 timestamp of the build
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

/// A backend able to build images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    /// Whether the builder requires versions to be pinned explicitly
    #[serde(
        rename = "explicitVersioning",
        default,
        deserialize_with = "null_as_default"
    )]
    pub explicit_versioning: bool,
}

/// Ordered sequence of images as returned by the listing endpoint.
///
/// The order is the API's until [`ImageCollection::sort`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageCollection {
    images: Vec<ImageSummary>,
}

impl ImageCollection {
    /// Wraps a list of images, keeping their order.
    pub fn new(images: Vec<ImageSummary>) -> Self {
        Self { images }
    }

    /// Sorts by packager, then by image name, comparing bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmulled::catalog::{ImageCollection, ImageSummary};
    ///
    /// let image = |packager: &str, name: &str| ImageSummary {
    ///     packager: packager.to_string(),
    ///     image: name.to_string(),
    ///     ..Default::default()
    /// };
    /// let mut images = ImageCollection::new(vec![
    ///     image("linuxbrew", "bwa"),
    ///     image("bioconda", "samtools"),
    ///     image("bioconda", "bwa"),
    /// ]);
    /// images.sort();
    ///
    /// let names: Vec<_> = images.iter().map(|i| i.image.as_str()).collect();
    /// assert_eq!(names, ["bwa", "samtools", "bwa"]);
    /// ```
    pub fn sort(&mut self) {
        self.images.sort_by(compare_images);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageSummary> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn into_inner(self) -> Vec<ImageSummary> {
        self.images
    }
}

impl From<Vec<ImageSummary>> for ImageCollection {
    fn from(images: Vec<ImageSummary>) -> Self {
        Self::new(images)
    }
}

impl<'a> IntoIterator for &'a ImageCollection {
    type Item = &'a ImageSummary;
    type IntoIter = std::slice::Iter<'a, ImageSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Orders two images by `(packager, image)`.
pub fn compare_images(a: &ImageSummary, b: &ImageSummary) -> Ordering {
    a.packager
        .cmp(&b.packager)
        .then_with(|| a.image.cmp(&b.image))
}

/// Decodes the `images.json` listing.
pub fn decode_images(body: &[u8]) -> Result<ImageCollection> {
    decode(body, "image list")
}

/// Decodes a single `images/<name>.json` document.
pub fn decode_image(body: &[u8]) -> Result<ImageSummary> {
    decode(body, "image")
}

/// Decodes the `builders.json` listing.
pub fn decode_builders(body: &[u8]) -> Result<Vec<Builder>> {
    decode(body, "builder list")
}

fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| MulledError::decode_with_source(format!("Failed to decode {}: {}", what, e), e))
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
