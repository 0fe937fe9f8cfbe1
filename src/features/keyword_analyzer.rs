use super::{count_substring_hits, SignalDetector, SignalScore};
use crate::config_loader::ReferenceLists;
use crate::url_extractor::ExtractedUrl;

pub const NAME: &str = "suspicious_keywords";

/// Generic phishing vocabulary. The list is long and sparse, so the multiplier
/// lets a handful of hits saturate the signal.
pub struct KeywordAnalyzer {
    keywords: Vec<String>,
    multiplier: f64,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::from_config(&ReferenceLists::default())
    }
}

impl KeywordAnalyzer {
    pub fn new(keywords: Vec<String>, multiplier: f64) -> Self {
        Self {
            keywords,
            multiplier,
        }
    }

    pub fn from_config(lists: &ReferenceLists) -> Self {
        Self::new(
            lists.suspicious_keywords.clone(),
            lists.normalization.keyword_multiplier,
        )
    }

    pub fn score(&self, text: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }
        let hits = count_substring_hits(text, &self.keywords);
        (hits as f64 / self.keywords.len() as f64 * self.multiplier).min(1.0)
    }
}

impl SignalDetector for KeywordAnalyzer {
    fn detect(&self, text: &str, _urls: &[ExtractedUrl]) -> SignalScore {
        let score = self.score(text);
        log::debug!("{}: {}", NAME, score);
        SignalScore::with_indicator(NAME, score, "Suspicious keywords detected")
    }

    fn name(&self) -> &str {
        NAME
    }
}
