use crate::config::cli::{Command, OutputFormat};
use crate::config::toml_config::SquawkConfig;
use crate::core::generator::CodeGenerator;
use crate::core::self_check::{SelfCheck, SuiteReport};
use crate::core::validator::check;
use crate::domain::model::SquawkCode;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// Rendered command output plus the process exit code it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub output: String,
    pub exit_code: i32,
}

impl CommandOutcome {
    fn new(output: String, success: bool) -> Self {
        Self {
            output,
            exit_code: if success { 0 } else { 1 },
        }
    }
}

#[derive(Debug, Serialize)]
struct Verdict<'a> {
    code: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

pub fn dispatch(command: Option<&Command>, config: &SquawkConfig) -> Result<CommandOutcome> {
    match command {
        None | Some(Command::CheckSelf { .. }) => Ok(run_self_check(config)),
        Some(Command::Generate { format, .. }) => run_generate(config, *format),
        Some(Command::Validate { codes, format }) => run_validate(codes, *format),
    }
}

pub fn run_self_check(config: &SquawkConfig) -> CommandOutcome {
    let generator = CodeGenerator::with_seed(config.self_check.seed);
    let report = SelfCheck::new(generator)
        .with_digit_iterations(config.self_check.digit_iterations)
        .with_sample_size(config.self_check.sample_size)
        .run();

    if report.all_passed() {
        tracing::info!("✅ All {} scenarios passed", report.outcomes.len());
    } else {
        tracing::error!(
            "❌ {} of {} scenarios failed",
            report.outcomes.len() - report.passed_count(),
            report.outcomes.len()
        );
    }

    CommandOutcome::new(render_report(&report), report.all_passed())
}

pub fn render_report(report: &SuiteReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let mark = if outcome.passed { "✓" } else { "✗" };
        let _ = writeln!(out, "{} {}: {}", mark, outcome.name, outcome.detail);
    }
    let _ = writeln!(
        out,
        "{} passed, {} failed",
        report.passed_count(),
        report.outcomes.len() - report.passed_count()
    );
    out
}

pub fn run_generate(config: &SquawkConfig, format: OutputFormat) -> Result<CommandOutcome> {
    let mut generator = CodeGenerator::with_seed(config.generator.seed);
    let codes = if config.generator.assignable_only {
        generator.assignable_batch(config.generator.count)
    } else {
        generator.batch(config.generator.count)
    };
    tracing::debug!("Generated {} codes", codes.len());

    let output = match format {
        OutputFormat::Text => codes.iter().fold(String::new(), |mut out, code| {
            let _ = writeln!(out, "{}", code);
            out
        }),
        OutputFormat::Json => serde_json::to_string_pretty(&codes)? + "\n",
    };

    Ok(CommandOutcome::new(output, true))
}

pub fn run_validate(codes: &[String], format: OutputFormat) -> Result<CommandOutcome> {
    let verdicts: Vec<Verdict<'_>> = codes
        .iter()
        .map(|code| {
            let result: std::result::Result<SquawkCode, _> = check(code);
            if let Err(rejection) = &result {
                tracing::debug!("Rejected {:?}: {}", code, rejection);
            }
            Verdict {
                code,
                valid: result.is_ok(),
                reason: result.err().map(|r| r.to_string()),
            }
        })
        .collect();

    let all_valid = verdicts.iter().all(|v| v.valid);

    let output = match format {
        OutputFormat::Text => verdicts.iter().fold(String::new(), |mut out, v| {
            let _ = match &v.reason {
                None => writeln!(out, "{}: valid", v.code),
                Some(reason) => writeln!(out, "{:?}: invalid, {}", v.code, reason),
            };
            out
        }),
        OutputFormat::Json => serde_json::to_string_pretty(&verdicts)? + "\n",
    };

    Ok(CommandOutcome::new(output, all_valid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> SquawkConfig {
        let mut config = SquawkConfig::default();
        config.generator.seed = Some(2024);
        config.generator.count = 25;
        config.self_check.seed = Some(2024);
        config
    }

    #[test]
    fn test_self_check_exits_zero() {
        let outcome = run_self_check(&seeded_config());
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.output.contains("7 passed, 0 failed"));
        assert!(outcome.output.contains("distinct codes out of 1000 attempts"));
    }

    #[test]
    fn test_generate_text_is_one_code_per_line() {
        let outcome = run_generate(&seeded_config(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = outcome.output.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| l.parse::<SquawkCode>().is_ok()));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let a = run_generate(&seeded_config(), OutputFormat::Text).unwrap();
        let b = run_generate(&seeded_config(), OutputFormat::Text).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_json_and_assignable() {
        let mut config = seeded_config();
        config.generator.assignable_only = true;
        config.generator.count = 300;

        let outcome = run_generate(&config, OutputFormat::Json).unwrap();
        let codes: Vec<SquawkCode> = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(codes.len(), 300);
        assert!(codes.iter().all(|c| c.is_assignable()));
    }

    #[test]
    fn test_validate_mixed_input_fails() {
        let codes = vec!["1234".to_string(), "7500".to_string(), "ABCD".to_string()];
        let outcome = run_validate(&codes, OutputFormat::Text).unwrap();

        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.output.contains("1234: valid"));
        assert!(outcome.output.contains("\"7500\": invalid, 7500 (hijack) is reserved"));
        assert!(outcome.output.contains("\"ABCD\": invalid"));
    }

    #[test]
    fn test_validate_json() {
        let codes = vec!["0000".to_string(), "123".to_string()];
        let outcome = run_validate(&codes, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();

        assert_eq!(parsed[0]["valid"], true);
        assert!(parsed[0].get("reason").is_none());
        assert_eq!(parsed[1]["valid"], false);
        assert_eq!(parsed[1]["reason"], "expected 4 characters, found 3");
    }

    #[test]
    fn test_dispatch_defaults_to_self_check() {
        let outcome = dispatch(None, &seeded_config()).unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.output.contains("emergency code exclusion"));
    }
}
