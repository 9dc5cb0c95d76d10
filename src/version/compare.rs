//! Numeric, per-component version comparison
//!
//! Versions are split on a delimiter (`.` by default) and compared component
//! by component:
//! - `10` vs `9`: numeric, so `10` wins
//! - `3b` vs `3a`: numeric prefix first, then the suffix as text
//! - `beta` vs `alpha`: plain text comparison of that component only
//!
//! The shorter version is padded with `0` components, so `1.2` equals `1.2.0`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;

/// Delimiter used when none is given explicitly
pub const DEFAULT_DELIMITER: char = '.';

/// An immutable, parsed version string
#[derive(Debug, Clone)]
pub struct VersionString {
    raw: String,
    components: Vec<String>,
}

impl VersionString {
    /// Parse a `.`-separated version.
    ///
    /// The empty string parses to the all-zero version.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        Self::parse_with_delimiter(raw, DEFAULT_DELIMITER)
    }

    /// Parse a version separated by `delimiter`.
    pub fn parse_with_delimiter(raw: &str, delimiter: char) -> Result<Self, VersionError> {
        if raw.is_empty() {
            return Ok(Self {
                raw: String::new(),
                components: Vec::new(),
            });
        }

        let mut components = Vec::new();
        for (position, component) in raw.split(delimiter).enumerate() {
            if component.is_empty() {
                return Err(VersionError::EmptyComponent {
                    version: raw.to_string(),
                    position,
                });
            }
            if component.chars().any(char::is_whitespace) {
                return Err(VersionError::Whitespace {
                    version: raw.to_string(),
                    component: component.to_string(),
                });
            }
            components.push(component.to_string());
        }

        Ok(Self {
            raw: raw.to_string(),
            components,
        })
    }

    /// The text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    /// Component at `index`, or `"0"` past the end
    fn component_or_zero(&self, index: usize) -> &str {
        self.components.get(index).map_or("0", String::as_str)
    }
}

impl FromStr for VersionString {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|idx| compare_components(self.component_or_zero(idx), other.component_or_zero(idx)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows ordering so that `1.2 == 1.2.0`.
impl PartialEq for VersionString {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionString {}

/// Compare two `.`-separated version strings.
///
/// Returns `None` when either side is malformed.
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let a = VersionString::parse(a).ok()?;
    let b = VersionString::parse(b).ok()?;
    Some(a.cmp(&b))
}

/// Split a component into its leading digits (leading zeros removed) and the
/// remaining suffix. Components that do not start with a digit yield `None`.
fn numeric_parts(component: &str) -> Option<(&str, &str)> {
    let digits_end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    if digits_end == 0 {
        return None;
    }

    let (digits, suffix) = component.split_at(digits_end);
    Some((digits.trim_start_matches('0'), suffix))
}

fn compare_components(a: &str, b: &str) -> Ordering {
    match (numeric_parts(a), numeric_parts(b)) {
        // Digit strings without leading zeros: longer is larger, equal length compares as text
        (Some((a_digits, a_suffix)), Some((b_digits, b_suffix))) => a_digits
            .len()
            .cmp(&b_digits.len())
            .then_with(|| a_digits.cmp(b_digits))
            .then_with(|| a_suffix.cmp(b_suffix)),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.10.0", "1.9.0", Ordering::Greater)]
    #[case("1.9.0", "1.10.0", Ordering::Less)]
    #[case("10", "9", Ordering::Greater)]
    #[case("1.2.3", "1.2.3", Ordering::Equal)]
    #[case("1.2", "1.2.0", Ordering::Equal)] // zero padding
    #[case("1.2", "1.2.0.1", Ordering::Less)]
    #[case("", "0.0.0", Ordering::Equal)] // empty is all zeros
    #[case("", "0.0.1", Ordering::Less)]
    #[case("1.02", "1.2", Ordering::Equal)] // leading zeros are ignored
    #[case("3b", "3a", Ordering::Greater)] // numeric with suffix
    #[case("10a", "9b", Ordering::Greater)]
    #[case("3", "3a", Ordering::Less)]
    #[case("1.beta", "1.alpha", Ordering::Greater)] // text component
    #[case("1.0.99999999999999999999999", "1.0.99999999999999999999998", Ordering::Greater)]
    fn compare_versions_returns_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b), Some(expected));
    }

    #[rstest]
    #[case("1..2")]
    #[case(".1")]
    #[case("1.")]
    #[case("1. 2")]
    fn compare_versions_returns_none_for_malformed(#[case] version: &str) {
        assert_eq!(compare_versions(version, "1.0.0"), None);
        assert_eq!(compare_versions("1.0.0", version), None);
    }

    #[test]
    fn parse_reports_empty_component_position() {
        assert_eq!(
            VersionString::parse("1..2").unwrap_err(),
            VersionError::EmptyComponent {
                version: "1..2".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn parse_with_delimiter_splits_on_custom_delimiter() {
        let version = VersionString::parse_with_delimiter("2-10-1", '-').unwrap();

        assert_eq!(version.components().collect::<Vec<_>>(), ["2", "10", "1"]);
        assert!(version > VersionString::parse_with_delimiter("2-9-5", '-').unwrap());
    }

    #[test]
    fn equal_versions_with_different_padding_are_eq() {
        let short: VersionString = "4.1".parse().unwrap();
        let long: VersionString = "4.1.0.0".parse().unwrap();

        assert_eq!(short, long);
        assert_eq!(short.to_string(), "4.1");
    }
}
