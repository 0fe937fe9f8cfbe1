//! Decision Engine Component
//!
//! Combines detector sub-scores into the phishing score, then derives the
//! verdict and confidence from the distance to the threshold.

use crate::features::SignalScore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionConfig {
    /// Weight per detector name. Every detector the analyzer runs needs an entry.
    pub weights: HashMap<String, f64>,
    /// Verdict is phishing only when the score is strictly above this
    pub phishing_threshold: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        let mut weights = HashMap::new();
        weights.insert("suspicious_keywords".to_string(), 0.3);
        weights.insert("suspicious_urls".to_string(), 0.4);
        weights.insert("urgency".to_string(), 0.2);
        weights.insert("financial_keywords".to_string(), 0.1);

        Self {
            weights,
            phishing_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub phishing_score: f64,
    pub is_phishing: bool,
    pub confidence: f64,
}

pub struct RiskAggregator {
    config: DecisionConfig,
}

impl Default for RiskAggregator {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

impl RiskAggregator {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn weight_for(&self, detector_name: &str) -> Option<f64> {
        self.config.weights.get(detector_name).copied()
    }

    /// Weighted sum in detector order, clamped to [0.0, 1.0]
    pub fn aggregate(&self, scores: &[SignalScore]) -> RiskAssessment {
        let mut total = 0.0_f64;

        for signal in scores {
            let weight = self.weight_for(&signal.detector_name).unwrap_or_else(|| {
                log::warn!("No weight configured for detector {}", signal.detector_name);
                0.0
            });
            total += weight * signal.score;
        }

        let phishing_score = total.clamp(0.0, 1.0);
        let is_phishing = phishing_score > self.config.phishing_threshold;

        RiskAssessment {
            phishing_score,
            is_phishing,
            confidence: self.confidence(phishing_score),
        }
    }

    /// 0.0 at the threshold, 1.0 at either extreme. Not a calibrated probability.
    pub fn confidence(&self, phishing_score: f64) -> f64 {
        ((phishing_score - self.config.phishing_threshold).abs() * 2.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(keyword: f64, url: f64, urgency: f64, financial: f64) -> Vec<SignalScore> {
        vec![
            SignalScore::new("suspicious_keywords", keyword, Vec::new()),
            SignalScore::new("suspicious_urls", url, Vec::new()),
            SignalScore::new("urgency", urgency, Vec::new()),
            SignalScore::new("financial_keywords", financial, Vec::new()),
        ]
    }

    #[test]
    fn test_all_zero_is_confident_legitimate() {
        let aggregator = RiskAggregator::default();
        let result = aggregator.aggregate(&signals(0.0, 0.0, 0.0, 0.0));

        assert_eq!(result.phishing_score, 0.0);
        assert!(!result.is_phishing);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_all_saturated() {
        let aggregator = RiskAggregator::default();
        let result = aggregator.aggregate(&signals(1.0, 1.0, 1.0, 1.0));

        assert!(result.phishing_score > 0.99 && result.phishing_score <= 1.0);
        assert!(result.is_phishing);
        assert!(result.confidence > 0.99);
    }

    #[test]
    fn test_threshold_is_strict() {
        let aggregator = RiskAggregator::default();
        // 0.3 * 1.0 + 0.4 * 0.5
        let result = aggregator.aggregate(&signals(1.0, 0.5, 0.0, 0.0));

        assert_eq!(result.phishing_score, 0.5);
        assert!(!result.is_phishing);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_weights() {
        let aggregator = RiskAggregator::default();

        let result = aggregator.aggregate(&signals(0.0, 1.0, 0.0, 0.0));
        assert_eq!(result.phishing_score, 0.4);
        assert!(!result.is_phishing);

        let result = aggregator.aggregate(&signals(0.0, 0.0, 1.0, 0.0));
        assert_eq!(result.phishing_score, 0.2);
    }

    #[test]
    fn test_sum_is_clamped() {
        let mut config = DecisionConfig::default();
        config.weights.insert("urgency".to_string(), 5.0);
        let aggregator = RiskAggregator::new(config);

        let result = aggregator.aggregate(&signals(1.0, 1.0, 1.0, 1.0));
        assert_eq!(result.phishing_score, 1.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_unweighted_detector_contributes_nothing() {
        let aggregator = RiskAggregator::default();
        let result = aggregator.aggregate(&[SignalScore::new("unknown", 1.0, Vec::new())]);

        assert_eq!(result.phishing_score, 0.0);
    }
}
