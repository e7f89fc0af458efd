//! Builds and parses Elasticsearch "function_score" queries

#[macro_use]
extern crate log;
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

pub mod query;
pub mod raw;
pub mod function_score;
pub mod query_parser;

pub use query::{Query, Filter, ScoreFunction};
pub use raw::{RawQuery, RawScoreFunction};
pub use function_score::FunctionScoreQuery;
pub use function_score::function::FunctionScoreFunction;
pub use function_score::weight::{Weighting, Weight};
pub use function_score::mode::{FunctionScoreError, score_mode, boost_mode};
pub use query_parser::{QueryParseError, parse};
