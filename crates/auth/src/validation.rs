//! Validation helpers and constants for auth entities

use regex::Regex;

/// Maximum organization slug length
pub const MAX_SLUG_LENGTH: usize = 50;

lazy_static::lazy_static! {
    /// Organization slug validation regex
    /// Allows lowercase alphanumeric characters with hyphens
    /// No leading/trailing hyphens, minimum 1 character
    pub static ref ORGANIZATION_SLUG_REGEX: Regex =
        Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap();
}

/// Validate an organization slug
pub fn validate_organization_slug(slug: &str) -> bool {
    if slug.len() > MAX_SLUG_LENGTH {
        return false;
    }

    if !ORGANIZATION_SLUG_REGEX.is_match(slug) {
        return false;
    }

    !slug.contains("--")
}
