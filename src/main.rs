use clap::{Arg, Command};
use log::LevelFilter;
use sms_phish_score::config_loader::{ConfigLoader, ReferenceLists};
use sms_phish_score::statistics::{evaluate_corpus, load_corpus};
use sms_phish_score::{AnalysisReport, SmsAnalyzer};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let matches = Command::new("sms-phish-score")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deterministic, explainable phishing risk scoring for SMS messages")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Reference lists file (YAML); built-in lists are used when omitted"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default reference lists to FILE")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the reference lists and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .help("Score a single message")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Score every line of FILE as a separate message")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("evaluate")
                .long("evaluate")
                .value_name("FILE")
                .help("Evaluate against a JSON-lines corpus of {\"text\", \"label\"} records")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("workers")
                .short('w')
                .long("workers")
                .value_name("N")
                .help("Parallel workers for --evaluate")
                .value_parser(clap::value_parser!(usize))
                .default_value("4"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit reports as JSON lines")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-detector scores")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        match ConfigLoader::save_reference_lists(&ReferenceLists::default(), generate_path) {
            Ok(()) => println!("✅ Default reference lists written to {generate_path}"),
            Err(e) => {
                eprintln!("❌ {e:#}");
                process::exit(1);
            }
        }
        return;
    }

    let config_path = matches.get_one::<String>("config").map(String::as_str);

    if matches.get_flag("test-config") {
        println!("🔍 Testing reference lists...");
        let lists = match config_path {
            Some(path) => match ConfigLoader::read_reference_lists(path) {
                Ok(lists) => lists,
                Err(e) => {
                    println!("❌ {e:#}");
                    process::exit(1);
                }
            },
            None => ReferenceLists::default(),
        };
        match lists.validate() {
            Ok(()) => {
                println!("  Version: {}", lists.version);
                println!("  Suspicious keywords: {}", lists.suspicious_keywords.len());
                println!("  Suspicious domains: {}", lists.suspicious_domains.len());
                println!("  Urgency patterns: {}", lists.urgency_patterns.len());
                println!("  Financial keywords: {}", lists.financial_keywords.len());
                println!("✅ Reference lists validated");
            }
            Err(e) => {
                println!("❌ Validation failed: {e:#}");
                process::exit(1);
            }
        }
        return;
    }

    let lists = match ConfigLoader::load_or_default(config_path) {
        Ok(lists) => lists,
        Err(e) => {
            eprintln!("Error loading reference lists: {e:#}");
            process::exit(1);
        }
    };

    let analyzer = match SmsAnalyzer::from_reference_lists(&lists) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Error building analyzer: {e:#}");
            process::exit(1);
        }
    };
    let as_json = matches.get_flag("json");

    if let Some(corpus_path) = matches.get_one::<String>("evaluate") {
        let workers = *matches.get_one::<usize>("workers").unwrap_or(&4);
        run_evaluation(analyzer, corpus_path, workers, as_json).await;
        return;
    }

    if let Some(message) = matches.get_one::<String>("message") {
        print_report(&analyzer.analyze(message), as_json);
        return;
    }

    if let Some(path) = matches.get_one::<String>("file") {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading {path}: {e}");
                process::exit(1);
            }
        };
        for line in bytes.split(|b| *b == b'\n') {
            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }
            print_report(&analyzer.analyze_bytes(line), as_json);
        }
        return;
    }

    eprintln!("Nothing to do: pass --message, --file or --evaluate (see --help)");
    process::exit(2);
}

async fn run_evaluation(analyzer: SmsAnalyzer, corpus_path: &str, workers: usize, as_json: bool) {
    let samples = match load_corpus(corpus_path) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("Error loading corpus: {e:#}");
            process::exit(1);
        }
    };

    let evaluation = match evaluate_corpus(Arc::new(analyzer), samples, workers).await {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("Evaluation failed: {e:#}");
            process::exit(1);
        }
    };

    if as_json {
        match serde_json::to_string(&evaluation.stats) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize statistics: {e}"),
        }
        return;
    }

    let stats = &evaluation.stats;
    println!("📊 Evaluation Results");
    println!("═══════════════════════════════════════");
    println!("  Messages: {}", stats.total());
    println!(
        "  Correct:  {}/{} ({:.1}%)",
        stats.correct(),
        stats.total(),
        stats.accuracy() * 100.0
    );
    println!("  ├─ True positives:  {}", stats.true_positives);
    println!("  ├─ False positives: {}", stats.false_positives);
    println!("  ├─ True negatives:  {}", stats.true_negatives);
    println!("  └─ False negatives: {}", stats.false_negatives);
    println!("  Precision: {:.3}", stats.precision());
    println!("  Recall:    {:.3}", stats.recall());

    let misses: Vec<_> = evaluation.results.iter().filter(|r| !r.is_correct()).collect();
    if !misses.is_empty() {
        println!();
        println!("❌ Misclassified ({}):", misses.len());
        for miss in misses.iter().take(20) {
            println!(
                "  • [{:.3}] expected {} : {}",
                miss.report.phishing_score(),
                if miss.expected_phishing { "phishing" } else { "legitimate" },
                truncate_string(miss.report.text(), 60)
            );
        }
    }
}

fn print_report(report: &AnalysisReport, as_json: bool) {
    if as_json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize report: {e}"),
        }
        return;
    }

    let icon = if report.is_phishing() { "🚨" } else { "✅" };
    println!("{} {}", icon, truncate_string(report.text(), 60));
    println!("  Verdict:    {}", report.label());
    println!("  Score:      {:.3}", report.phishing_score());
    println!("  Confidence: {:.3}", report.confidence());
    if !report.extracted_urls().is_empty() {
        println!("  URLs:       {}", report.urls().join(", "));
    }
    for indicator in report.indicators() {
        println!("  • {indicator}");
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
