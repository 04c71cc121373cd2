//! Tolerant version comparison for capability gates.

use std::cmp::Ordering;

/// Compare two version strings by their leading dotted numeric components,
/// ignoring trailing qualifiers (`10.5.13-MariaDB` compares as `10.5.13`).
/// Missing components count as zero. When either side does not start with a
/// digit the comparison falls back to plain lexical ordering, so it stays
/// total over arbitrary vendor strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (components(a), components(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => a.cmp(b),
    }
}

/// `version >= minimum` under [`compare`] ordering.
pub fn at_least(version: &str, minimum: &str) -> bool {
    compare(version, minimum) != Ordering::Less
}

fn components(version: &str) -> Option<[u64; 3]> {
    if !version.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let mut parts = [0u64; 3];
    for (idx, component) in version.split('.').take(3).enumerate() {
        let digits: String = component.chars().take_while(|c| c.is_ascii_digit()).collect();
        match digits.parse() {
            Ok(n) => parts[idx] = n,
            // Qualifier reached ("13-MariaDB" still parses as 13, but a
            // bare qualifier component ends the numeric prefix).
            Err(_) => break,
        }
    }
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(compare("8.0.0", "8.0.0"), Ordering::Equal);
        assert_eq!(compare("10.2.0", "10.6.0"), Ordering::Less);
        assert_eq!(compare("10.10.1", "10.9.9"), Ordering::Greater);
    }

    #[test]
    fn test_trailing_qualifiers_ignored() {
        assert_eq!(compare("10.5.13-MariaDB", "10.5.13"), Ordering::Equal);
        assert!(at_least("3.25.0-alpha", "3.25.0"));
    }

    #[test]
    fn test_missing_components_are_zero() {
        assert_eq!(compare("8.0", "8.0.0"), Ordering::Equal);
        assert!(at_least("10.6", "10.6.0"));
    }

    #[test]
    fn test_lexical_fallback() {
        assert_eq!(compare("beta", "alpha"), Ordering::Greater);
        assert_eq!(compare("unknown", "8.0.0"), "unknown".cmp("8.0.0"));
    }
}
