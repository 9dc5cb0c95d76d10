use mutil::version::{VersionRange, VersionString, compare_versions, in_range};
use std::cmp::Ordering;

#[test]
fn ordered_triples_are_in_range() {
    let triples = [
        ("1.0.0", "1.0.0", "1.0.0"),
        ("1.9.0", "1.10.0", "2.0.0"),
        ("9", "10", "11"),
        ("", "0.1", "0.1.1"),
        ("2.0", "2.0.0.1", "2.1"),
        ("10.3.1", "10.3.1b", "10.3.2"),
    ];

    for (min, current, max) in triples {
        assert!(
            in_range(current, min, max),
            "{current} should be within [{min}, {max}]"
        );
    }
}

#[test]
fn bounds_are_inclusive() {
    let (min, max) = ("4.2", "4.10.3");

    assert!(in_range(min, min, max));
    assert!(in_range(max, min, max));
}

#[test]
fn numeric_not_lexicographic() {
    assert!(in_range("1.10.0", "1.9.0", "2.0.0"));
    // (current, min, max) order: a current of 1.9.0 is below the 1.10.0 minimum
    assert!(!in_range("1.9.0", "1.10.0", "2.0.0"));
    assert_eq!(compare_versions("1.10.0", "1.9.0"), Some(Ordering::Greater));
}

#[test]
fn out_of_range_is_false() {
    assert!(!in_range("2.0.0", "1.0.0", "1.9.0"));
    assert!(!in_range("0.9", "1.0.0", "1.9.0"));
}

#[test]
fn malformed_versions_are_never_in_range() {
    assert!(!in_range("1..0", "0", "9"));
    assert!(!in_range("1.0", "0.", "9"));
    assert!(!in_range("1.0", "0", ".9"));
}

#[test]
fn version_range_contains_parsed_versions() {
    let range = VersionRange::parse("15.0", "17.4").unwrap();

    let inside: VersionString = "16.7.10".parse().unwrap();
    let above: VersionString = "17.4.1".parse().unwrap();

    assert!(range.contains(&inside));
    assert!(!range.contains(&above));
}
