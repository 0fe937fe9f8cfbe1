use super::{SignalDetector, SignalScore};
use crate::config_loader::ReferenceLists;
use crate::domain_utils::DomainUtils;
use crate::url_extractor::ExtractedUrl;

pub const NAME: &str = "suspicious_urls";

pub struct LinkAnalyzer {
    suspicious_domains: Vec<String>,
    domain_patterns: Vec<String>,
    known_domain_weight: f64,
    domain_pattern_weight: f64,
    insecure_scheme_weight: f64,
}

impl Default for LinkAnalyzer {
    fn default() -> Self {
        Self::from_config(&ReferenceLists::default())
    }
}

impl LinkAnalyzer {
    pub fn from_config(lists: &ReferenceLists) -> Self {
        Self {
            suspicious_domains: lists.suspicious_domains.clone(),
            domain_patterns: lists.suspicious_domain_patterns.clone(),
            known_domain_weight: lists.normalization.known_domain_weight,
            domain_pattern_weight: lists.normalization.domain_pattern_weight,
            insecure_scheme_weight: lists.normalization.insecure_scheme_weight,
        }
    }

    /// Raw contribution of a single URL, before averaging
    pub fn score_url(&self, url: &ExtractedUrl) -> f64 {
        let mut score = 0.0;

        if DomainUtils::contains_any(&url.domain, &self.suspicious_domains) {
            score += self.known_domain_weight;
        }

        if DomainUtils::contains_any(&url.domain, &self.domain_patterns) {
            score += self.domain_pattern_weight;
        }

        if !url.is_secure {
            score += self.insecure_scheme_weight;
        }

        score
    }

    /// Mean per-URL score, capped at 1.0. No URLs means no signal.
    pub fn score(&self, urls: &[ExtractedUrl]) -> f64 {
        if urls.is_empty() {
            return 0.0;
        }
        let total: f64 = urls.iter().map(|url| self.score_url(url)).sum();
        (total / urls.len() as f64).min(1.0)
    }
}

impl SignalDetector for LinkAnalyzer {
    fn detect(&self, _text: &str, urls: &[ExtractedUrl]) -> SignalScore {
        let score = self.score(urls);
        log::debug!("{}: {} across {} urls", NAME, score, urls.len());
        SignalScore::with_indicator(NAME, score, "Suspicious URLs detected")
    }

    fn name(&self) -> &str {
        NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bad_domain() {
        let analyzer = LinkAnalyzer::default();
        let url = ExtractedUrl::new("http://fake-bank.com/verify");

        // listed + "fake" pattern + insecure
        assert_eq!(analyzer.score_url(&url), 2.5);
        assert_eq!(analyzer.score(&[url]), 1.0);
    }

    #[test]
    fn test_insecure_benign_url() {
        let analyzer = LinkAnalyzer::default();
        let url = ExtractedUrl::new("http://example.org/news");

        assert_eq!(analyzer.score(&[url]), 0.5);
    }

    #[test]
    fn test_secure_benign_url() {
        let analyzer = LinkAnalyzer::default();
        let url = ExtractedUrl::new("https://www.example.org/");

        assert_eq!(analyzer.score(&[url]), 0.0);
    }

    #[test]
    fn test_uppercase_https_scheme_is_secure() {
        let analyzer = LinkAnalyzer::default();
        let upper = ExtractedUrl::new("HTTPS://www.example.org/");
        let upper_insecure = ExtractedUrl::new("HTTP://www.example.org/");

        assert_eq!(analyzer.score(&[upper]), 0.0);
        assert_eq!(analyzer.score(&[upper_insecure]), 0.5);
    }

    #[test]
    fn test_pattern_only_domain() {
        let analyzer = LinkAnalyzer::default();
        let url = ExtractedUrl::new("https://totally-a-scam.biz/");

        assert_eq!(analyzer.score(&[url]), 1.0);
    }

    #[test]
    fn test_average_across_urls() {
        let analyzer = LinkAnalyzer::default();
        let urls = vec![
            ExtractedUrl::new("https://example.org/"),
            ExtractedUrl::new("http://example.net/"),
        ];

        // (0.0 + 0.5) / 2
        assert_eq!(analyzer.score(&urls), 0.25);
    }

    #[test]
    fn test_no_urls_no_indicator() {
        let analyzer = LinkAnalyzer::default();
        let result = analyzer.detect("http in prose but no link", &[]);

        assert_eq!(result.score, 0.0);
        assert!(result.indicators.is_empty());
    }

    #[test]
    fn test_indicator_text() {
        let analyzer = LinkAnalyzer::default();
        let urls = vec![ExtractedUrl::new("http://example.org/")];
        let result = analyzer.detect("", &urls);

        assert_eq!(
            result.indicators,
            vec!["Suspicious URLs detected (score: 0.5)"]
        );
    }
}
