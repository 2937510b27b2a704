//! Proctor CLI - a stand-in for the course submission form.
//!
//! Reads a title and a price from stdin (the two form fields), builds a
//! course candidate and checks it against the validation registry. Exits
//! non-zero when the input is rejected.

use proctor::catalog::Course;
use proctor::config::Config;
use proctor::validation;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load rule-set configuration
    let args: Vec<String> = env::args().collect();
    let config_path = if args.len() > 1 {
        args[1].as_str()
    } else {
        "proctor.toml"
    };

    {
        let mut registry = validation::global().write();

        if Path::new(config_path).exists() {
            info!("🔧 Loading rule sets from: {}", config_path);

            let config = match Config::from_file(config_path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("❌ Failed to load config: {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = config.validate() {
                eprintln!("❌ Configuration validation failed: {}", e);
                std::process::exit(1);
            }

            config.apply(&mut registry);
        } else {
            debug!("No rule-set file at {}, using built-in rules", config_path);
            Course::register_rules(&mut registry);
        }

        info!(
            "✅ Registry ready: {} rule(s) for {} type(s)",
            registry.rule_count(),
            registry.type_ids().len()
        );
    }

    // The form: two text fields
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let title = match read_field(&mut lines, "Title: ") {
        Some(value) => value,
        None => return,
    };
    let price = match read_field(&mut lines, "Price: ") {
        Some(value) => parse_form_number(&value),
        None => return,
    };

    let course = Course::new(title, price);
    let registry = validation::global().read();

    if !registry.validate(&course.to_candidate()) {
        eprintln!("Invalid input, please try again!");
        std::process::exit(1);
    }

    println!("{:?}", course);
}

/// Prompt for and read one form field
fn read_field(
    lines: &mut impl Iterator<Item = Result<String, io::Error>>,
    prompt: &str,
) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

/// Coerce a form field to a number: empty reads as zero, unparsable text
/// as NaN. Either way a `positive` rule will reject it.
fn parse_form_number(value: &str) -> f64 {
    if value.is_empty() {
        0.0
    } else {
        value.parse::<f64>().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_number() {
        assert_eq!(parse_form_number("10"), 10.0);
        assert_eq!(parse_form_number("2.5"), 2.5);
        assert_eq!(parse_form_number(""), 0.0);
        assert!(parse_form_number("ten").is_nan());
    }
}
