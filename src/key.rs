//! Cache Key Module
//!
//! Canonical cache keys: a prefix and a sequence of parts joined with `:`.
//! Keys double as the namespace for prefix-scoped clears, so the same codec
//! must be used for writing and invalidating.

use std::fmt::Display;

/// Separator between the prefix and each part.
pub const KEY_DELIMITER: char = ':';

const ESCAPE: char = '\\';

// == Key Generation ==
/// Joins `prefix` and the display form of each part with [`KEY_DELIMITER`].
///
/// Deterministic and pure: the same inputs always produce the same key, and
/// `generate_key("user", ...)` with parts `"id"`, `"abc"` is exactly
/// `"user:id:abc"`. Delimiter and escape characters occurring inside the
/// prefix or a part are backslash-escaped, so distinct part sequences can
/// never collapse to the same key.
pub fn generate_key(prefix: &str, parts: &[&dyn Display]) -> String {
    let mut key = escape_part(prefix);
    for part in parts {
        key.push(KEY_DELIMITER);
        key.push_str(&escape_part(&part.to_string()));
    }
    key
}

/// Backslash-escapes delimiter and escape characters inside one part.
fn escape_part(part: &str) -> String {
    if !part.contains(KEY_DELIMITER) && !part.contains(ESCAPE) {
        return part.to_string();
    }

    let mut escaped = String::with_capacity(part.len() + 2);
    for ch in part.chars() {
        if ch == KEY_DELIMITER || ch == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

// == Key Macro ==
/// Builds a cache key from a prefix and any number of display-able parts.
///
/// ```
/// use memocache::cache_key;
///
/// let key = cache_key!("user", "id", 42);
/// assert_eq!(key, "user:id:42");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr $(, $part:expr)* $(,)?) => {
        $crate::key::generate_key(
            $prefix,
            &[$(&$part as &dyn ::std::fmt::Display),*],
        )
    };
}
