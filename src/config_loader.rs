use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Static reference data consulted by the signal detectors.
///
/// The keyword and financial detectors normalize by list length, so every
/// size-dependent list is paired with a declared size in `expected_sizes`.
/// Editing one without the other is rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceLists {
    pub version: u32,
    pub suspicious_keywords: Vec<String>,
    pub suspicious_domains: Vec<String>,
    pub suspicious_domain_patterns: Vec<String>,
    pub urgency_patterns: Vec<String>,
    pub financial_keywords: Vec<String>,
    pub normalization: NormalizationConfig,
    pub expected_sizes: ExpectedSizes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizationConfig {
    /// Keyword hits are scaled as `hits / list_len * keyword_multiplier`
    pub keyword_multiplier: f64,
    /// Financial hits are scaled as `hits / list_len * financial_multiplier`
    pub financial_multiplier: f64,
    /// Urgency matches saturate at this many
    pub urgency_divisor: f64,
    /// Added per URL whose domain is on the known-bad list
    pub known_domain_weight: f64,
    /// Added per URL whose domain contains a suspicious pattern
    pub domain_pattern_weight: f64,
    /// Added per URL not served over https
    pub insecure_scheme_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectedSizes {
    pub suspicious_keywords: usize,
    pub financial_keywords: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            keyword_multiplier: 10.0,
            financial_multiplier: 5.0,
            urgency_divisor: 5.0,
            known_domain_weight: 1.0,
            domain_pattern_weight: 1.0,
            insecure_scheme_weight: 0.5,
        }
    }
}

impl Default for ReferenceLists {
    fn default() -> Self {
        let suspicious_keywords = strings(&[
            "urgent", "immediately", "suspended", "blocked", "verify", "confirm", "click",
            "link", "congratulations", "won", "prize", "claim", "free", "limited", "time",
            "expire", "security", "alert", "warning", "action", "required", "update",
            "payment", "card", "bank", "account", "login", "password", "restore", "secure",
            "compromised", "illegal", "fraud", "scam", "phishing", "malicious", "fake",
            "steal", "hack",
        ]);

        let suspicious_domains = strings(&[
            "fake-bank.com",
            "scam-lottery.com",
            "fake-visa.com",
            "phishing-site.com",
            "fake-paypal.com",
            "scam-bank.com",
            "fake-shipping.com",
            "fake-irs.com",
            "fake-netflix.com",
            "fake-amazon.com",
            "scam-telecom.com",
            "fake-loan.com",
            "phishing-email.com",
            "fake-prize.com",
            "scam-insurance.com",
            "fake-ssa.com",
            "fake-crypto.com",
            "scam-debt.com",
            "fake-google.com",
            "fake-medicare.com",
        ]);

        let urgency_patterns = strings(&[
            r"\b(urgent|immediately|asap|right now|hurry|quick|fast)\b",
            r"\b(expire|expired|expiring|deadline|limited time)\b",
            r"\b(suspended|blocked|locked|frozen|terminated)\b",
            r"\b(action required|immediate action|act now)\b",
        ]);

        let financial_keywords = strings(&[
            "payment", "card", "bank", "account", "money", "cash", "dollar", "credit",
            "debit", "transaction", "transfer", "deposit", "withdraw", "balance",
            "statement", "bill", "invoice", "refund", "charge",
        ]);

        Self {
            version: 1,
            expected_sizes: ExpectedSizes {
                suspicious_keywords: suspicious_keywords.len(),
                financial_keywords: financial_keywords.len(),
            },
            suspicious_keywords,
            suspicious_domains,
            suspicious_domain_patterns: strings(&["fake", "scam", "phishing"]),
            urgency_patterns,
            financial_keywords,
            normalization: NormalizationConfig::default(),
        }
    }
}

impl ReferenceLists {
    /// Check internal consistency before the lists are handed to detectors
    pub fn validate(&self) -> Result<()> {
        if self.suspicious_keywords.is_empty() {
            bail!("suspicious_keywords must not be empty");
        }
        if self.financial_keywords.is_empty() {
            bail!("financial_keywords must not be empty");
        }
        if self.suspicious_keywords.len() != self.expected_sizes.suspicious_keywords {
            bail!(
                "suspicious_keywords has {} entries but expected_sizes declares {}; \
                 resizing the list rescales the keyword signal and needs a version bump",
                self.suspicious_keywords.len(),
                self.expected_sizes.suspicious_keywords
            );
        }
        if self.financial_keywords.len() != self.expected_sizes.financial_keywords {
            bail!(
                "financial_keywords has {} entries but expected_sizes declares {}; \
                 resizing the list rescales the financial signal and needs a version bump",
                self.financial_keywords.len(),
                self.expected_sizes.financial_keywords
            );
        }
        let n = &self.normalization;
        if !(n.urgency_divisor.is_finite() && n.urgency_divisor > 0.0) {
            bail!(
                "normalization.urgency_divisor must be a positive finite number, got {}",
                n.urgency_divisor
            );
        }
        for (name, value) in [
            ("keyword_multiplier", n.keyword_multiplier),
            ("financial_multiplier", n.financial_multiplier),
            ("known_domain_weight", n.known_domain_weight),
            ("domain_pattern_weight", n.domain_pattern_weight),
            ("insecure_scheme_weight", n.insecure_scheme_weight),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                bail!("normalization.{} must be a non-negative finite number, got {}", name, value);
            }
        }
        for pattern in &self.urgency_patterns {
            Regex::new(pattern).with_context(|| format!("Invalid urgency pattern: {}", pattern))?;
        }
        Ok(())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a reference list file without checking its consistency
    pub fn read_reference_lists<P: AsRef<Path>>(path: P) -> Result<ReferenceLists> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference lists: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse reference lists: {}", path.display()))
    }

    pub fn load_reference_lists<P: AsRef<Path>>(path: P) -> Result<ReferenceLists> {
        let path = path.as_ref();
        let lists = Self::read_reference_lists(path)?;
        lists
            .validate()
            .with_context(|| format!("Invalid reference lists: {}", path.display()))?;

        log::info!(
            "Loaded reference lists v{} from {} ({} keywords, {} domains, {} urgency patterns, {} financial terms)",
            lists.version,
            path.display(),
            lists.suspicious_keywords.len(),
            lists.suspicious_domains.len(),
            lists.urgency_patterns.len(),
            lists.financial_keywords.len()
        );
        Ok(lists)
    }

    /// Load from `path` if given, otherwise fall back to the compiled-in lists
    pub fn load_or_default(path: Option<&str>) -> Result<ReferenceLists> {
        match path {
            Some(path) => Self::load_reference_lists(path),
            None => {
                log::debug!("No reference list file given, using built-in defaults");
                Ok(ReferenceLists::default())
            }
        }
    }

    pub fn save_reference_lists<P: AsRef<Path>>(lists: &ReferenceLists, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(lists).context("Failed to serialize reference lists")?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write reference lists: {}", path.display()))?;
        Ok(())
    }
}
