//! Display formatting for catalog fields.

use crate::error::{MulledError, Result};
use chrono::DateTime;


/// Layout used for every version date: abbreviated month, space-padded day
/// and wall-clock time, e.g. `Mar  4 10:20:30`.
pub const STAMP_FORMAT: &str = "%b %e %H:%M:%S";

/// Reformats an RFC 3339 timestamp using [`STAMP_FORMAT`].
///
/// The time is shown in the offset carried by the timestamp itself.
///
/// # Examples
///
/// ```
/// use libmulled::format::format_stamp;
///
/// assert_eq!(format_stamp("2018-03-04T10:20:30Z").unwrap(), "Mar  4 10:20:30");
/// assert!(format_stamp("last tuesday").is_err());
/// ```
pub fn format_stamp(raw: &str) -> Result<String> {
    let timestamp =
        DateTime::parse_from_rfc3339(raw).map_err(|e| MulledError::date_format(raw, e))?;
    Ok(timestamp.format(STAMP_FORMAT).to_string())
}

/// Renders the builder `explicitVersioning` flag for a table cell.
///
/// # Examples
///
/// ```
/// use libmulled::format::explicit_versioning_label;
///
/// assert_eq!(explicit_versioning_label(true), "YES");
/// assert_eq!(explicit_versioning_label(false), "");
/// ```
pub fn explicit_versioning_label(explicit: bool) -> &'static str {
    if explicit { "YES" } else { "" }
}
