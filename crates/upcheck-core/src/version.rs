use semver::Version;

/// Strictly-newer comparison under semantic-version ordering.
///
/// Both inputs are normalized leniently before comparison: a leading `v`
/// and surrounding whitespace are ignored, and `2` / `2.1` are padded to a
/// full triple. A version that still fails to parse is never considered
/// newer — the stable release stays authoritative.
#[must_use]
pub fn is_newer(candidate: &str, baseline: &str) -> bool {
    match (parse_lenient(candidate), parse_lenient(baseline)) {
        (Some(candidate), Some(baseline)) => candidate > baseline,
        _ => false,
    }
}

fn parse_lenient(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);

    if let Ok(parsed) = Version::parse(version) {
        return Some(parsed);
    }

    let (core, suffix) = split_core_and_suffix(version);
    let mut parts = core.split('.');
    let major = parts.next()?.parse::<u64>().ok()?;
    let minor = parts.next().and_then(|part| part.parse::<u64>().ok());
    let patch = parts.next().and_then(|part| part.parse::<u64>().ok());

    if parts.next().is_some() {
        return None;
    }

    let normalized = match (minor, patch) {
        (None, None) => format!("{major}.0.0{suffix}"),
        (Some(minor), None) => format!("{major}.{minor}.0{suffix}"),
        (Some(minor), Some(patch)) => format!("{major}.{minor}.{patch}{suffix}"),
        (None, Some(_)) => return None,
    };

    Version::parse(&normalized).ok()
}

fn split_core_and_suffix(version: &str) -> (&str, &str) {
    let suffix_idx = version.find(['-', '+']).unwrap_or(version.len());
    (&version[..suffix_idx], &version[suffix_idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_on_each_component() {
        assert!(is_newer("1.0.1", "1.0.0"));
        assert!(is_newer("1.1.0", "1.0.0"));
        assert!(is_newer("2.0.0", "1.9.9"));
    }

    #[test]
    fn equal_versions_are_not_newer() {
        assert!(!is_newer("2.0.0", "2.0.0"));
        assert!(!is_newer("1.2", "1.2.0"));
    }

    #[test]
    fn older_versions_are_not_newer() {
        assert!(!is_newer("1.0.0", "1.0.1"));
        assert!(!is_newer("0.9.0", "1.0.0"));
    }

    #[test]
    fn partial_versions_are_padded() {
        assert!(is_newer("1.2", "1.1.9"));
        assert!(is_newer("2", "1.99.0"));
    }

    #[test]
    fn prerelease_of_a_higher_core_is_newer() {
        assert!(is_newer("2.1.0-beta", "2.0.0"));
    }

    #[test]
    fn prerelease_ranks_below_its_release() {
        assert!(!is_newer("2.0.0-beta", "2.0.0"));
        assert!(is_newer("2.0.0", "2.0.0-beta.2"));
    }

    #[test]
    fn prerelease_identifiers_order_numerically() {
        assert!(is_newer("1.0.0-beta.10", "1.0.0-beta.2"));
    }

    #[test]
    fn v_prefix_and_whitespace_are_ignored() {
        assert!(is_newer("v2.1.0", " 2.0.0 "));
    }

    #[test]
    fn unparseable_versions_are_never_newer() {
        assert!(!is_newer("latest", "1.0.0"));
        assert!(!is_newer("2.0.0", "garbage"));
        assert!(!is_newer("", ""));
        assert!(!is_newer("1.2.3.4", "1.0.0"));
    }
}
