//! Canonical form for raw domain-like strings.
//!
//! `normalize_domain` lowercases, strips an `http://`/`https://` scheme, drops
//! everything from the first `/` on, and removes a leading `www.`. It never
//! fails; degenerate input yields an empty string that callers filter out.

const SCHEMES: [&str; 2] = ["https://", "http://"];
const WWW: &str = "www.";

fn normalize_once(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut rest = lowered.as_str();
    for scheme in SCHEMES {
        if let Some(stripped) = rest.strip_prefix(scheme) {
            rest = stripped;
            break;
        }
    }

    let host = rest.split('/').next().unwrap_or_default();
    host.strip_prefix(WWW).unwrap_or(host).to_string()
}

/// Maps a raw entry to its canonical domain, or `""` if nothing is left.
///
/// Applied to a fixed point, so inputs such as `www.www.example.com` or
/// `https:// example.com` collapse in one call and the result is idempotent.
pub fn normalize_domain(raw: &str) -> String {
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_scheme_case_path_and_www() {
        assert_eq!(normalize_domain("https://WWW.Example.com/path"), "example.com");
        assert_eq!(normalize_domain("example.com"), "example.com");
        assert_eq!(normalize_domain("HTTP://www.chula.ac.th/"), "chula.ac.th");
        assert_eq!(normalize_domain("  kbank.co.th  "), "kbank.co.th");
    }

    #[test]
    fn test_path_suffix_is_dropped() {
        assert_eq!(normalize_domain("ikea.com/th"), "ikea.com");
        assert_eq!(normalize_domain("apple.com/th?x=1#frag"), "apple.com");
    }

    #[test]
    fn test_degenerate_input_is_empty() {
        assert_eq!(normalize_domain(""), "");
        assert_eq!(normalize_domain("   "), "");
        assert_eq!(normalize_domain("http://"), "");
        assert_eq!(normalize_domain("https:///path"), "");
        assert_eq!(normalize_domain("/only/a/path"), "");
    }

    #[test]
    fn test_no_domain_validation() {
        assert_eq!(normalize_domain("not a domain"), "not a domain");
        assert_eq!(normalize_domain("ftp://files.example"), "ftp:");
    }

    #[test]
    fn test_repeated_prefixes_collapse() {
        assert_eq!(normalize_domain("www.www.example.com"), "example.com");
        assert_eq!(normalize_domain("https:// example.com"), "example.com");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in ".{0,40}") {
            let once = normalize_domain(&raw);
            prop_assert_eq!(normalize_domain(&once), once);
        }

        #[test]
        fn prop_scheme_case_www_and_path_do_not_matter(
            host in "[a-z0-9][a-z0-9-]{0,10}(\\.[a-z]{2,5}){1,2}",
            scheme in prop_oneof![Just(""), Just("http://"), Just("https://"), Just("HTTPS://")],
            www in prop_oneof![Just(""), Just("www."), Just("WWW.")],
            path in prop_oneof![Just(""), Just("/"), Just("/a/b"), Just("/th?q=1")],
        ) {
            let raw = format!("{scheme}{www}{}{path}", host.to_uppercase());
            prop_assert_eq!(normalize_domain(&raw), normalize_domain(&host));
        }
    }
}
