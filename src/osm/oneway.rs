//! Oneway classification of ways.

use super::Tags;

/// Returns whether a way with the given tags may only be traveled in one
/// direction.
///
/// Explicit `oneway` values win. Without an explicit value, roundabouts and
/// motorways are implied to be oneway.
pub fn is_oneway(tags: &Tags) -> bool {
    match tags.get("oneway").map(String::as_str) {
        Some("yes" | "true" | "1" | "-1" | "reversible" | "alternating") => true,
        Some("no" | "false" | "0") => false,
        _ => is_implied_oneway(tags),
    }
}

fn is_implied_oneway(tags: &Tags) -> bool {
    matches!(
        tags.get("junction").map(String::as_str),
        Some("roundabout" | "circular")
    ) || matches!(
        tags.get("highway").map(String::as_str),
        Some("motorway" | "motorway_link")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_explicit_oneway() {
        assert!(is_oneway(&tags(&[("oneway", "yes")])));
        assert!(is_oneway(&tags(&[("oneway", "-1")])));
        assert!(!is_oneway(&tags(&[("oneway", "no")])));
        assert!(!is_oneway(&tags(&[])));
        assert!(!is_oneway(&tags(&[("highway", "primary")])));
    }

    #[test]
    fn test_implied_oneway() {
        assert!(is_oneway(&tags(&[("junction", "roundabout")])));
        assert!(is_oneway(&tags(&[("highway", "motorway")])));
        // explicit value overrides the implication
        assert!(!is_oneway(&tags(&[("highway", "motorway"), ("oneway", "no")])));
    }
}
