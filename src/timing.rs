use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::fixture::{self, FixtureError, TestCase};
use crate::generate;

/// Directory scanned for fixture documents.
pub const FIXTURE_DIR: &str = "fixtures";

/// Text file read in full for the large-input phase.
pub const LARGE_INPUT_PATH: &str = "data/large.txt";

/// Illustrative patterns timed against the large input: a trivial literal,
/// an email matcher, a URL matcher, and an IPv4 matcher.
const LARGE_INPUT_PATTERNS: [&str; 4] = [
    "the",
    r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
    r"https?://[^\s]+",
    r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b",
];

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Time every fixture document under `dir`.
///
/// For each test case the pattern compile is timed, then each input is
/// scanned with the full match sequence materialized before the clock stops.
/// Files without a `.json` extension are ignored. Documents are visited in
/// host enumeration order; the order is not sorted and may vary between runs.
pub fn run_suite(dir: &Path) -> Result<Duration, BenchError> {
    let entries = fs::read_dir(dir).map_err(|source| BenchError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut total = Duration::ZERO;
    for entry in entries {
        let entry = entry.map_err(|source| BenchError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }
        total += run_document(&path)?;
    }

    Ok(total)
}

fn run_document(path: &Path) -> Result<Duration, BenchError> {
    let cases = fixture::load_document(path)?;

    let mut total = Duration::ZERO;
    for case in &cases {
        total += run_case(case)?;
    }
    debug!(
        path = %path.display(),
        cases = cases.len(),
        elapsed_us = total.as_micros() as u64,
        "timed fixture document"
    );

    Ok(total)
}

fn run_case(case: &TestCase) -> Result<Duration, BenchError> {
    let (compiled, mut total) = timed(|| generate::compile(&case.pattern));
    let regex = compiled.map_err(|source| BenchError::Pattern {
        pattern: case.pattern.clone(),
        source,
    })?;

    for input in &case.inputs {
        let (matches, elapsed) = timed(|| regex.captures_iter(&input.text).collect::<Vec<_>>());
        black_box(matches);
        total += elapsed;
    }

    Ok(total)
}

/// Time the built-in patterns against the full contents of the file at
/// `path`. Compilation is not timed in this phase; each scan is.
pub fn run_large_input(path: &Path) -> Result<Duration, BenchError> {
    let text = fs::read_to_string(path).map_err(|source| BenchError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut total = Duration::ZERO;
    for pattern in LARGE_INPUT_PATTERNS {
        let regex = generate::compile(pattern).map_err(|source| BenchError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        let (matches, elapsed) = timed(|| regex.find_iter(&text).collect::<Vec<_>>());
        debug!(
            pattern,
            matches = matches.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "timed large-input pattern"
        );
        black_box(matches);
        total += elapsed;
    }

    Ok(total)
}

/// Run `f` and measure its wall-clock duration.
///
/// The closure's value is returned alongside the duration so a timed scan
/// must materialize its result; a lazy iterator left unconsumed would make
/// the measurement meaningless.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
