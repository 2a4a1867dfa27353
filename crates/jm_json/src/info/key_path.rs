use alloc::string::String;
use alloc::vec::Vec;

/// The nested-key separator: `->` followed by ASCII GS (`0x1D`).
///
/// Existing documents rely on this exact byte sequence; a plain key never
/// contains it.
pub const KEY_SEPARATOR: &str = "->\u{1D}";

/// Helpers for keys that address nested JSON objects.
///
/// A key `a SEP b SEP c` is written as `{"a": {"b": {"c": value}}}`.
///
/// # Examples
///
/// ```
/// use jm_json::info::KeyPath;
///
/// let key = KeyPath::join(&["user", "address", "city"]);
///
/// assert!(KeyPath::is_nested(&key));
/// assert_eq!(KeyPath::split_first(&key).unwrap().0, "user");
/// assert_eq!(KeyPath::segments(&key).collect::<Vec<_>>(), ["user", "address", "city"]);
/// assert_eq!(KeyPath::display(&key), "user->address->city");
/// ```
pub struct KeyPath;

impl KeyPath {
    /// Joins segments into one key.
    pub fn join(segments: &[&str]) -> String {
        segments.join(KEY_SEPARATOR)
    }

    /// Returns `true` if `key` addresses a nested object.
    #[inline]
    pub fn is_nested(key: &str) -> bool {
        key.contains(KEY_SEPARATOR)
    }

    /// Splits `key` at the first separator.
    ///
    /// Returns `None` for a single-level key.
    #[inline]
    pub fn split_first(key: &str) -> Option<(&str, &str)> {
        key.split_once(KEY_SEPARATOR)
    }

    /// Iterates over the segments of `key`.
    #[inline]
    pub fn segments(key: &str) -> impl Iterator<Item = &str> {
        key.split(KEY_SEPARATOR)
    }

    /// Returns the last segment of `key`.
    pub fn leaf(key: &str) -> &str {
        match key.rsplit_once(KEY_SEPARATOR) {
            Some((_, leaf)) => leaf,
            None => key,
        }
    }

    /// Renders `key` for messages, separators shown as `->`.
    pub fn display(key: &str) -> String {
        KeyPath::segments(key).collect::<Vec<_>>().join("->")
    }
}
