//! Runtime scenario suite.
//!
//! Exercises the generator and validator against fixed and random inputs
//! and collects one outcome per scenario. A failing scenario never stops
//! the ones after it.

use crate::core::generator::CodeGenerator;
use crate::core::validator::is_valid;
use crate::domain::model::{SquawkCode, CODE_LEN, RESERVED_CODES};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

pub const ACCEPTED_SAMPLES: [&str; 4] = ["0000", "1234", "7777", "0123"];
pub const REJECTED_SAMPLES: [&str; 5] = ["8888", "9999", "ABCD", "123", "12345"];
pub const ODD_SAMPLES: [&str; 5] = ["", "   ", "７５００", "äöü߀", "\u{1F6E9}\u{1F6E9}"];

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl ScenarioOutcome {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<ScenarioOutcome>,
    pub sample_size: usize,
    pub distinct_codes: usize,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }
}

/// Scenario suite over an injected code source.
pub struct SelfCheck<R> {
    generator: CodeGenerator<R>,
    digit_iterations: usize,
    sample_size: usize,
}

impl<R: Rng> SelfCheck<R> {
    pub fn new(generator: CodeGenerator<R>) -> Self {
        Self {
            generator,
            digit_iterations: 100,
            sample_size: 1000,
        }
    }

    pub fn with_digit_iterations(mut self, iterations: usize) -> Self {
        self.digit_iterations = iterations;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn run(&mut self) -> SuiteReport {
        tracing::info!("Running squawk code self-check");

        let mut outcomes = vec![
            self.code_length(),
            self.valid_digits(),
            reserved_exclusion(),
            accepted_samples(),
            rejected_samples(),
            odd_input(),
        ];

        let distinct = self.distinct_count();
        outcomes.push(ScenarioOutcome::pass(
            "distinct codes",
            format!(
                "generated {} distinct codes out of {} attempts",
                distinct, self.sample_size
            ),
        ));

        for outcome in &outcomes {
            if outcome.passed {
                tracing::debug!("✓ {}: {}", outcome.name, outcome.detail);
            } else {
                tracing::warn!("✗ {}: {}", outcome.name, outcome.detail);
            }
        }

        SuiteReport {
            outcomes,
            sample_size: self.sample_size,
            distinct_codes: distinct,
        }
    }

    fn code_length(&mut self) -> ScenarioOutcome {
        let code = self.generator.next_code();
        let len = code.as_str().chars().count();
        if len == CODE_LEN {
            ScenarioOutcome::pass("code length", format!("{} has {} digits", code, len))
        } else {
            ScenarioOutcome::fail("code length", format!("expected 4, got {}", len))
        }
    }

    fn valid_digits(&mut self) -> ScenarioOutcome {
        let bad: Vec<SquawkCode> = (0..self.digit_iterations)
            .map(|_| self.generator.next_code())
            .filter(|code| !code.as_str().chars().all(|c| ('0'..='7').contains(&c)))
            .collect();

        if bad.is_empty() {
            ScenarioOutcome::pass(
                "valid digits",
                format!("{} iterations", self.digit_iterations),
            )
        } else {
            ScenarioOutcome::fail("valid digits", format!("invalid digits in {:?}", bad))
        }
    }

    fn distinct_count(&mut self) -> usize {
        let seen: HashSet<SquawkCode> = (0..self.sample_size)
            .map(|_| self.generator.next_code())
            .collect();
        seen.len()
    }
}

fn expect_verdicts(name: &'static str, samples: &[&str], expected: bool) -> ScenarioOutcome {
    let wrong: Vec<&str> = samples
        .iter()
        .copied()
        .filter(|code| is_valid(code) != expected)
        .collect();

    if wrong.is_empty() {
        ScenarioOutcome::pass(name, format!("{} samples", samples.len()))
    } else {
        let verdict = if expected { "accepted" } else { "rejected" };
        ScenarioOutcome::fail(name, format!("should be {}: {:?}", verdict, wrong))
    }
}

fn reserved_exclusion() -> ScenarioOutcome {
    expect_verdicts("emergency code exclusion", &RESERVED_CODES, false)
}

fn accepted_samples() -> ScenarioOutcome {
    expect_verdicts("valid code format", &ACCEPTED_SAMPLES, true)
}

fn rejected_samples() -> ScenarioOutcome {
    expect_verdicts("invalid code format", &REJECTED_SAMPLES, false)
}

fn odd_input() -> ScenarioOutcome {
    expect_verdicts("arbitrary text", &ODD_SAMPLES, false)
}
