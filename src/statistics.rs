use crate::analyzer::SmsAnalyzer;
use crate::components::AnalysisReport;
use crate::error::InputError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A corpus record: message text plus the externally supplied label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMessage {
    pub text: String,
    /// true = phishing
    pub is_phishing: bool,
}

impl LabeledMessage {
    /// Accepts `{"text": "...", "label": ...}` with the label given as
    /// 0/1 (integral floats allowed), true/false, or "phishing"/"legitimate"/"0"/"1".
    /// A non-string `text` is an input error, never coerced.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, InputError> {
        let text = value.get("text").ok_or_else(|| InputError::MissingField {
            field: "text".to_string(),
        })?;
        let text = text.as_str().ok_or_else(|| InputError::not_text(text))?;

        let label = value.get("label").ok_or_else(|| InputError::MissingField {
            field: "label".to_string(),
        })?;
        let is_phishing = parse_label(label).ok_or_else(|| InputError::InvalidLabel {
            found: label.to_string(),
        })?;

        Ok(Self {
            text: text.to_string(),
            is_phishing,
        })
    }
}

fn parse_label(label: &serde_json::Value) -> Option<bool> {
    match label {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(v) if v == 0.0 => Some(false),
            Some(v) if v == 1.0 => Some(true),
            _ => None,
        },
        serde_json::Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "phishing" | "1" => Some(true),
            "legitimate" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Read a JSON-lines corpus. Blank lines are skipped; bad records abort the load.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledMessage>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus: {}", path.display()))?;

    let mut samples = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: invalid JSON", path.display(), line_no + 1))?;
        let sample = LabeledMessage::from_value(&value)
            .with_context(|| format!("{}:{}: invalid record", path.display(), line_no + 1))?;
        samples.push(sample);
    }

    log::info!("Loaded {} labeled messages from {}", samples.len(), path.display());
    Ok(samples)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStats {
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
}

impl EvaluationStats {
    pub fn record(&mut self, expected_phishing: bool, predicted_phishing: bool) {
        match (expected_phishing, predicted_phishing) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    pub fn correct(&self) -> u64 {
        self.true_positives + self.true_negatives
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedMessage {
    pub expected_phishing: bool,
    pub report: AnalysisReport,
}

impl EvaluatedMessage {
    pub fn is_correct(&self) -> bool {
        self.expected_phishing == self.report.is_phishing()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub results: Vec<EvaluatedMessage>,
    pub stats: EvaluationStats,
}

/// Score a labeled corpus across `workers` blocking tasks.
///
/// Analyses share one analyzer with no coordination; results come back in
/// input order. Labels never reach the analyzer.
pub async fn evaluate_corpus(
    analyzer: Arc<SmsAnalyzer>,
    samples: Vec<LabeledMessage>,
    workers: usize,
) -> Result<Evaluation> {
    let workers = workers.max(1);
    let chunk_size = samples.len().div_ceil(workers).max(1);

    let mut handles = Vec::new();
    for chunk in samples.chunks(chunk_size) {
        let analyzer = Arc::clone(&analyzer);
        let chunk = chunk.to_vec();
        handles.push(tokio::task::spawn_blocking(move || {
            chunk
                .into_iter()
                .map(|sample| EvaluatedMessage {
                    report: analyzer.analyze(&sample.text),
                    expected_phishing: sample.is_phishing,
                })
                .collect::<Vec<_>>()
        }));
    }

    let mut results = Vec::with_capacity(samples.len());
    for handle in handles {
        results.extend(handle.await.context("Analysis worker panicked")?);
    }

    let mut stats = EvaluationStats::default();
    for result in &results {
        stats.record(result.expected_phishing, result.report.is_phishing());
    }

    log::info!(
        "Evaluated {} messages with {} workers: accuracy {:.3}",
        stats.total(),
        workers,
        stats.accuracy()
    );

    Ok(Evaluation { results, stats })
}
