//! Syntactic validation of URLs and short codes.
//!
//! Both checks are pure pattern matches: no DNS lookup, no normalization.
//! Bare domains without a scheme (`example.com/path`) are accepted.

use regex::Regex;

/// Maximum stored URL length, matching the `links.url` column width.
pub const MAX_URL_LENGTH: usize = 2048;

/// Optional http(s) scheme, a host with at least one dot, then a tail of
/// URL-safe characters. Character classes are spelled out so that matching
/// stays ASCII-only.
const URL_PATTERN: &str = r"^(?:https?://)?[0-9A-Za-z_.\-]+(?:\.[0-9A-Za-z_.\-]+)+[0-9A-Za-z_\-.~:/?#\[\]@!$&'()*+,;=]+$";

const CODE_PATTERN: &str = r"^[0-9A-Za-z_]{10}$";

/// Compiled URL and short code patterns.
///
/// Built once at startup and shared by reference; never mutated.
#[derive(Debug, Clone)]
pub struct Validator {
    url_pattern: Regex,
    code_pattern: Regex,
}

impl Validator {
    /// Compiles both patterns.
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            url_pattern: Regex::new(URL_PATTERN)?,
            code_pattern: Regex::new(CODE_PATTERN)?,
        })
    }

    /// Returns true if `url` has an accepted URL shape and fits the column.
    pub fn validate_url(&self, url: &str) -> bool {
        url.len() <= MAX_URL_LENGTH && self.url_pattern.is_match(url)
    }

    /// Returns true if `code` is exactly ten characters from `[0-9A-Za-z_]`.
    pub fn validate_code(&self, code: &str) -> bool {
        self.code_pattern.is_match(code)
    }
}
