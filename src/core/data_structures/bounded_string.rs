/*!
 * Bounded String
 * Length-capped text fields stored inline when short
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Text field capped at `N` bytes of UTF-8
///
/// Input longer than `N` bytes is cut at the last character boundary that
/// fits, so a field can never grow past its bound and never splits a
/// multi-byte character. Short values (≤23 bytes) stay inline through
/// `smartstring`.
///
/// # Examples
///
/// ```
/// use clinic_records::core::BoundedString;
///
/// let name = BoundedString::<5>::from("Alexandra");
/// assert_eq!(name.as_str(), "Alexa");
/// assert!(name.was_truncated_from("Alexandra"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[repr(transparent)]
pub struct BoundedString<const N: usize> {
    inner: SmartString,
}

impl<const N: usize> BoundedString<N> {
    /// Create an empty field
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: SmartString::new(),
        }
    }

    /// Maximum length in bytes
    #[inline]
    #[must_use]
    pub const fn bound() -> usize {
        N
    }

    /// Get string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Get length in bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True when `original` did not fit and was cut to produce this value
    pub fn was_truncated_from(&self, original: &str) -> bool {
        original.len() > self.len()
    }

    fn truncate_to_bound(s: &str) -> &str {
        if s.len() <= N {
            return s;
        }
        let mut end = N;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

impl<const N: usize> From<&str> for BoundedString<N> {
    #[inline]
    fn from(s: &str) -> Self {
        Self {
            inner: SmartString::from(Self::truncate_to_bound(s)),
        }
    }
}

impl<const N: usize> From<String> for BoundedString<N> {
    #[inline]
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl<const N: usize> From<BoundedString<N>> for String {
    #[inline]
    fn from(s: BoundedString<N>) -> Self {
        s.inner.into()
    }
}

impl<const N: usize> AsRef<str> for BoundedString<N> {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> std::ops::Deref for BoundedString<N> {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_kept() {
        let s = BoundedString::<10>::from("Flu");
        assert_eq!(s, "Flu");
        assert_eq!(s.len(), 3);
        assert!(!s.was_truncated_from("Flu"));
    }

    #[test]
    fn test_long_value_truncated() {
        let s = BoundedString::<4>::from("Measles");
        assert_eq!(s.as_str(), "Meas");
        assert!(s.was_truncated_from("Measles"));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // "é" is two bytes; a 2-byte bound cannot hold "aé"
        let s = BoundedString::<2>::from("aé");
        assert_eq!(s.as_str(), "a");

        let s = BoundedString::<3>::from("aé");
        assert_eq!(s.as_str(), "aé");
    }

    #[test]
    fn test_zero_bound() {
        let s = BoundedString::<0>::from("anything");
        assert!(s.is_empty());
    }

    #[test]
    fn test_deserialize_truncates() {
        let s: BoundedString<3> = serde_json::from_str("\"abcdef\"").unwrap();
        assert_eq!(s, "abc");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"abc\"");
    }
}
