#![allow(clippy::uninlined_format_args)]

use sms_phish_score::SmsAnalyzer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("{}", "=".repeat(60));
    println!("Scoring sample SMS messages");
    println!("{}", "=".repeat(60));

    let analyzer = SmsAnalyzer::new();

    // (message, expected phishing)
    let samples = [
        ("URGENT: Your account will be suspended. Click here to verify: http://fake-bank.com/verify", true),
        ("Hi, how are you doing today? Hope you're well.", false),
        ("Your credit card has been blocked. Verify now: http://fake-visa.com", true),
        ("Thanks for the meeting yesterday. Let's follow up next week.", false),
        ("Congratulations! You've won $1000. Claim now: http://scam-lottery.com", true),
        ("Don't forget about dinner tonight at 7 PM.", false),
        ("Your PayPal account is limited. Restore access: http://fake-paypal.com/restore", true),
        ("The weather is beautiful today. Perfect for a walk.", false),
    ];

    let mut correct = 0;
    for (i, (message, expected)) in samples.iter().enumerate() {
        let report = analyzer.analyze(message);
        let is_correct = report.is_phishing() == *expected;
        if is_correct {
            correct += 1;
        }

        println!();
        println!("Test {}:", i + 1);
        println!("Message: {}", message);
        println!(
            "Expected: {}",
            if *expected { "phishing" } else { "legitimate" }
        );
        println!("Predicted: {}", report.label());
        println!("Score: {:.3}", report.phishing_score());
        println!("Confidence: {:.3}", report.confidence());
        println!("Correct: {}", if is_correct { "✓" } else { "✗" });
        if !report.indicators().is_empty() {
            println!("Indicators: {}", report.indicators().join(", "));
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!(
        "Correct predictions: {}/{} ({:.1}%)",
        correct,
        samples.len(),
        correct as f64 / samples.len() as f64 * 100.0
    );
    println!("{}", "=".repeat(60));

    Ok(())
}
