/// Minimal URL splitting utilities
pub struct DomainUtils;

impl DomainUtils {
    /// Split off the scheme, returning (scheme, remainder after "://")
    pub fn split_scheme(url: &str) -> Option<(&str, &str)> {
        let idx = url.find("://")?;
        Some((&url[..idx], &url[idx + 3..]))
    }

    /// Network location of a URL, lower-cased.
    ///
    /// Everything between "://" and the first '/', '?' or '#'. Userinfo and
    /// port are kept, since pattern checks run as substring matches anyway.
    pub fn extract_domain(url: &str) -> String {
        let rest = match Self::split_scheme(url) {
            Some((_, rest)) => rest,
            None => return String::new(),
        };
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        rest[..end].to_lowercase()
    }

    /// Path component of a URL, without query or fragment
    pub fn extract_path(url: &str) -> String {
        let rest = match Self::split_scheme(url) {
            Some((_, rest)) => rest,
            None => return String::new(),
        };
        let after_host = match rest.find(['/', '?', '#']) {
            Some(i) if rest[i..].starts_with('/') => &rest[i..],
            _ => return String::new(),
        };
        let end = after_host.find(['?', '#']).unwrap_or(after_host.len());
        after_host[..end].to_string()
    }

    /// True if the domain contains any entry of the list as a substring
    pub fn contains_any(domain: &str, patterns: &[String]) -> bool {
        let domain_lower = domain.to_lowercase();
        patterns
            .iter()
            .any(|pattern| domain_lower.contains(&pattern.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(
            DomainUtils::extract_domain("http://Fake-Bank.com/verify"),
            "fake-bank.com"
        );
        assert_eq!(
            DomainUtils::extract_domain("https://example.org?x=1"),
            "example.org"
        );
        assert_eq!(
            DomainUtils::extract_domain("http://user@host.net:8080/a"),
            "user@host.net:8080"
        );
        assert_eq!(DomainUtils::extract_domain("no scheme here"), "");
    }

    #[test]
    fn test_extract_path() {
        assert_eq!(
            DomainUtils::extract_path("http://fake-bank.com/verify?id=3"),
            "/verify"
        );
        assert_eq!(DomainUtils::extract_path("http://fake-bank.com"), "");
        assert_eq!(DomainUtils::extract_path("http://fake-bank.com?q=/x"), "");
    }

    #[test]
    fn test_contains_any() {
        let patterns = vec!["fake".to_string(), "scam".to_string()];

        assert!(DomainUtils::contains_any("fake-bank.com", &patterns));
        assert!(DomainUtils::contains_any("MY-SCAM.net", &patterns));
        assert!(!DomainUtils::contains_any("example.com", &patterns));
    }
}
