//! Tooling for timing regular-expression matching against JSON fixture
//! documents: a generator that records the matches a pattern produces on
//! sample inputs, and a runner that measures compile and scan time over a
//! directory of such fixtures.

pub mod fixture;
pub mod generate;
pub mod timing;

pub use fixture::{Document, Input, MatchRecord, TestCase};
pub use generate::generate;
