pub mod financial_analyzer;
pub mod keyword_analyzer;
pub mod link_analyzer;
pub mod urgency_analyzer;

use crate::config_loader::ReferenceLists;
use crate::url_extractor::ExtractedUrl;
use serde::{Deserialize, Serialize};

/// One detector's normalized assessment of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalScore {
    pub detector_name: String,
    pub score: f64,
    pub indicators: Vec<String>,
}

impl SignalScore {
    /// Score is clamped to [0.0, 1.0]
    pub fn new(detector_name: &str, score: f64, indicators: Vec<String>) -> Self {
        Self {
            detector_name: detector_name.to_string(),
            score: score.clamp(0.0, 1.0),
            indicators,
        }
    }

    pub fn zero(detector_name: &str) -> Self {
        Self::new(detector_name, 0.0, Vec::new())
    }

    /// Score with a single indicator, emitted only when the score is nonzero
    pub fn with_indicator(detector_name: &str, score: f64, label: &str) -> Self {
        let score = score.clamp(0.0, 1.0);
        if score > 0.0 {
            Self::new(detector_name, score, vec![format!("{} (score: {:?})", label, score)])
        } else {
            Self::zero(detector_name)
        }
    }
}

/// A pure signal: same text and URLs in, same score out
pub trait SignalDetector: Send + Sync {
    fn detect(&self, text: &str, urls: &[ExtractedUrl]) -> SignalScore;
    fn name(&self) -> &str;
}

/// Counts list entries that occur as case-insensitive substrings of the text
pub fn count_substring_hits(text: &str, terms: &[String]) -> usize {
    let text_lower = text.to_lowercase();
    terms
        .iter()
        .filter(|term| text_lower.contains(term.to_lowercase().as_str()))
        .count()
}

/// The four standard detectors in aggregation order
pub fn default_detectors(lists: &ReferenceLists) -> Vec<Box<dyn SignalDetector>> {
    vec![
        Box::new(keyword_analyzer::KeywordAnalyzer::from_config(lists)),
        Box::new(link_analyzer::LinkAnalyzer::from_config(lists)),
        Box::new(urgency_analyzer::UrgencyAnalyzer::from_config(lists)),
        Box::new(financial_analyzer::FinancialAnalyzer::from_config(lists)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_score_clamped() {
        assert_eq!(SignalScore::new("x", 2.5, Vec::new()).score, 1.0);
        assert_eq!(SignalScore::new("x", -0.3, Vec::new()).score, 0.0);
    }

    #[test]
    fn test_indicator_only_when_nonzero() {
        let score = SignalScore::with_indicator("x", 0.0, "Nothing");
        assert!(score.indicators.is_empty());

        let score = SignalScore::with_indicator("x", 0.4, "Something detected");
        assert_eq!(score.indicators, vec!["Something detected (score: 0.4)"]);

        let score = SignalScore::with_indicator("x", 1.0, "Saturated");
        assert_eq!(score.indicators, vec!["Saturated (score: 1.0)"]);
    }

    #[test]
    fn test_count_substring_hits() {
        let terms = vec!["bank".to_string(), "card".to_string(), "cash".to_string()];

        assert_eq!(count_substring_hits("Your BANK card", &terms), 2);
        assert_eq!(count_substring_hits("bank bank bank", &terms), 1);
        assert_eq!(count_substring_hits("", &terms), 0);
    }

    #[test]
    fn test_default_detector_order() {
        let detectors = default_detectors(&ReferenceLists::default());
        let names: Vec<&str> = detectors.iter().map(|d| d.name()).collect();

        assert_eq!(
            names,
            vec![
                "suspicious_keywords",
                "suspicious_urls",
                "urgency",
                "financial_keywords"
            ]
        );
    }
}
