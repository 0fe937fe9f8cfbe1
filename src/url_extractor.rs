use crate::domain_utils::DomainUtils;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Scheme is matched case-insensitively; the body accepts letters, digits,
/// the `$`..`_` ASCII range, `@ . & +`, `! * \ ( ) ,` and percent-encoded bytes.
const URL_PATTERN: &str =
    r"(?i:https?)://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(\\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedUrl {
    pub url: String,
    pub domain: String,
    pub path: String,
    pub is_secure: bool,
    pub length: usize,
}

impl ExtractedUrl {
    pub fn new(url: &str) -> Self {
        let is_secure = DomainUtils::split_scheme(url)
            .map(|(scheme, _)| scheme.eq_ignore_ascii_case("https"))
            .unwrap_or(false);

        Self {
            url: url.to_string(),
            domain: DomainUtils::extract_domain(url),
            path: DomainUtils::extract_path(url),
            is_secure,
            length: url.chars().count(),
        }
    }
}

pub struct UrlExtractor {
    url_regex: Regex,
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlExtractor {
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(URL_PATTERN).unwrap(),
        }
    }

    /// Greedy, non-overlapping, left-to-right scan. Never touches the network.
    pub fn extract(&self, text: &str) -> Vec<ExtractedUrl> {
        self.url_regex
            .find_iter(text)
            .map(|m| ExtractedUrl::new(m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_url() {
        let extractor = UrlExtractor::new();
        let urls = extractor.extract(
            "URGENT: Your account will be suspended. Click here to verify: http://fake-bank.com/verify",
        );

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "http://fake-bank.com/verify");
        assert_eq!(urls[0].domain, "fake-bank.com");
        assert_eq!(urls[0].path, "/verify");
        assert!(!urls[0].is_secure);
        assert_eq!(urls[0].length, 27);
    }

    #[test]
    fn test_extract_multiple_urls_in_order() {
        let extractor = UrlExtractor::new();
        let urls = extractor.extract("see https://a.example.com and then http://b.example.net/x?y=1");

        let found: Vec<&str> = urls.iter().map(|u| u.url.as_str()).collect();
        assert_eq!(
            found,
            vec!["https://a.example.com", "http://b.example.net/x?y=1"]
        );
        assert!(urls[0].is_secure);
        assert!(!urls[1].is_secure);
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let extractor = UrlExtractor::new();
        let urls = extractor.extract("Go to HTTPS://Secure.Example.com/Login now");

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].url, "HTTPS://Secure.Example.com/Login");
        assert_eq!(urls[0].domain, "secure.example.com");
        assert!(urls[0].is_secure);
    }

    #[test]
    fn test_percent_encoding_and_stop_characters() {
        let extractor = UrlExtractor::new();
        let urls = extractor.extract("http://x.com/a%20b then");
        assert_eq!(urls[0].url, "http://x.com/a%20b");

        // '#' and whitespace are outside the allowed class
        let urls = extractor.extract("http://x.com/page#frag");
        assert_eq!(urls[0].url, "http://x.com/page");
    }

    #[test]
    fn test_no_urls() {
        let extractor = UrlExtractor::new();

        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("Hi, how are you doing today?").is_empty());
        assert!(extractor.extract("ftp://files.example.com").is_empty());
    }
}
