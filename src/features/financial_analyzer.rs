use super::{count_substring_hits, SignalDetector, SignalScore};
use crate::config_loader::ReferenceLists;
use crate::url_extractor::ExtractedUrl;

pub const NAME: &str = "financial_keywords";

pub struct FinancialAnalyzer {
    financial_terms: Vec<String>,
    multiplier: f64,
}

impl Default for FinancialAnalyzer {
    fn default() -> Self {
        Self::from_config(&ReferenceLists::default())
    }
}

impl FinancialAnalyzer {
    pub fn new(financial_terms: Vec<String>, multiplier: f64) -> Self {
        Self {
            financial_terms,
            multiplier,
        }
    }

    pub fn from_config(lists: &ReferenceLists) -> Self {
        Self::new(
            lists.financial_keywords.clone(),
            lists.normalization.financial_multiplier,
        )
    }

    pub fn score(&self, text: &str) -> f64 {
        if self.financial_terms.is_empty() {
            return 0.0;
        }
        let hits = count_substring_hits(text, &self.financial_terms);
        (hits as f64 / self.financial_terms.len() as f64 * self.multiplier).min(1.0)
    }
}

impl SignalDetector for FinancialAnalyzer {
    fn detect(&self, text: &str, _urls: &[ExtractedUrl]) -> SignalScore {
        let score = self.score(text);
        log::debug!("{}: {}", NAME, score);
        SignalScore::with_indicator(NAME, score, "Financial keywords detected")
    }

    fn name(&self) -> &str {
        NAME
    }
}
