use super::{SignalDetector, SignalScore};
use crate::config_loader::ReferenceLists;
use crate::url_extractor::ExtractedUrl;
use regex::Regex;

pub const NAME: &str = "urgency";

/// Pressure language: urgency adverbs, expiry, account locks, calls to action
pub struct UrgencyAnalyzer {
    urgency_patterns: Vec<Regex>,
    divisor: f64,
}

impl Default for UrgencyAnalyzer {
    fn default() -> Self {
        Self::from_config(&ReferenceLists::default())
    }
}

impl UrgencyAnalyzer {
    pub fn new(urgency_patterns: Vec<Regex>, divisor: f64) -> Self {
        Self {
            urgency_patterns,
            divisor,
        }
    }

    /// Patterns that fail to compile are skipped with a warning;
    /// `ReferenceLists::validate` rejects them before this point on load.
    pub fn from_config(lists: &ReferenceLists) -> Self {
        let urgency_patterns = lists
            .urgency_patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    log::warn!("Skipping invalid urgency pattern {}: {}", pattern, e);
                    None
                }
            })
            .collect();

        Self::new(urgency_patterns, lists.normalization.urgency_divisor)
    }

    /// Total non-overlapping matches across every family
    pub fn count_matches(&self, text: &str) -> usize {
        let text_lower = text.to_lowercase();
        self.urgency_patterns
            .iter()
            .map(|regex| regex.find_iter(&text_lower).count())
            .sum()
    }

    pub fn score(&self, text: &str) -> f64 {
        (self.count_matches(text) as f64 / self.divisor).min(1.0)
    }
}

impl SignalDetector for UrgencyAnalyzer {
    fn detect(&self, text: &str, _urls: &[ExtractedUrl]) -> SignalScore {
        let score = self.score(text);
        log::debug!("{}: {}", NAME, score);
        SignalScore::with_indicator(NAME, score, "Urgency indicators detected")
    }

    fn name(&self) -> &str {
        NAME
    }
}
