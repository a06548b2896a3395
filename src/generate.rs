use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::fixture::{Input, MatchRecord, TestCase};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("at least one input string is required")]
    NoInputs,
}

/// Compile `pattern` for multi-line scanning.
///
/// Both the generator and the benchmark runner go through this function, so a
/// fixture is always replayed with the same configuration it was recorded
/// under. Only the pattern source is persisted in a fixture document.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).multi_line(true).build()
}

/// Run `pattern` against every input and record all matches per input.
///
/// The pattern is compiled once; each input is scanned to exhaustion, every
/// application resuming after the previous match's end.
pub fn generate(pattern: &str, inputs: &[String]) -> Result<TestCase, GenerateError> {
    if inputs.is_empty() {
        return Err(GenerateError::NoInputs);
    }

    let regex = compile(pattern).map_err(|source| GenerateError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;

    let inputs = inputs
        .iter()
        .map(|text| Input {
            text: text.clone(),
            matches: scan(&regex, text),
        })
        .collect();

    Ok(TestCase {
        pattern: pattern.to_owned(),
        inputs,
    })
}

fn scan(regex: &Regex, text: &str) -> Vec<MatchRecord> {
    regex
        .captures_iter(text)
        .map(|caps| {
            caps.iter()
                .map(|group| group.map(|m| m.as_str().to_owned()))
                .collect()
        })
        .collect()
}
