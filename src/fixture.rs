use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One match produced by a single application of a pattern: the full matched
/// text at index 0, followed by each capture group value. A group that did
/// not participate in the match is `None` and serializes as JSON `null`.
pub type MatchRecord = Vec<Option<String>>;

/// A subject string together with every match the pattern produced on it,
/// in scan order. A pattern that never matched leaves `matches` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub text: String,
    pub matches: Vec<MatchRecord>,
}

/// A regex pattern plus its sample inputs and recorded match results.
///
/// `pattern` holds only the source text; flags are not persisted and must be
/// re-supplied by whoever compiles it (see [`crate::generate::compile`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub pattern: String,
    pub inputs: Vec<Input>,
}

/// A fixture document is a flat JSON array of test cases.
pub type Document = Vec<TestCase>;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed fixture {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Read and parse one fixture document.
pub fn load_document(path: &Path) -> Result<Document, FixtureError> {
    let raw = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.display().to_string(),
        source,
    })
}
