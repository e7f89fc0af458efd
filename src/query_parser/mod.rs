//! Parses function score queries written in Elasticsearch Query DSL
//!
//! Sub-queries, filters and score functions are not interpreted. They are
//! kept as raw JSON so the parsed builder renders them back out unchanged.

pub mod utils;
pub mod function_score_query;

use std::error::Error;
use std::fmt;

use serde_json::Value as Json;

use function_score::FunctionScoreQuery;


#[derive(Debug, PartialEq)]
pub enum QueryParseError {
    UnrecognisedQueryType(String),
    UnrecognisedKey(String),
    ExpectedObject,
    ExpectedArray,
    ExpectedString,
    ExpectedFloat,
    ExpectedSingleKey,
    ExpectedScoreFunction,
    ConflictingKeys(String, String),
}


impl fmt::Display for QueryParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QueryParseError::UnrecognisedQueryType(ref query_type) => write!(f, "unrecognised query type {:?}", query_type),
            QueryParseError::UnrecognisedKey(ref key) => write!(f, "unrecognised key {:?}", key),
            QueryParseError::ExpectedObject => write!(f, "expected object"),
            QueryParseError::ExpectedArray => write!(f, "expected array"),
            QueryParseError::ExpectedString => write!(f, "expected string"),
            QueryParseError::ExpectedFloat => write!(f, "expected number"),
            QueryParseError::ExpectedSingleKey => write!(f, "expected object with a single key"),
            QueryParseError::ExpectedScoreFunction => write!(f, "expected a score function"),
            QueryParseError::ConflictingKeys(ref a, ref b) => write!(f, "{:?} cannot be used together with {:?}", a, b),
        }
    }
}


impl Error for QueryParseError {}


fn get_query_parser(query_name: &str) -> Option<fn(&Json) -> Result<FunctionScoreQuery, QueryParseError>> {
    match query_name {
        "function_score" => Some(function_score_query::parse),
        _ => None
    }
}


/// Parses a `{"function_score": {...}}` document
pub fn parse(json: &Json) -> Result<FunctionScoreQuery, QueryParseError> {
    let object = json.as_object().ok_or(QueryParseError::ExpectedObject)?;

    let (query_type, inner) = match object.iter().next() {
        Some(entry) if object.len() == 1 => entry,
        _ => return Err(QueryParseError::ExpectedSingleKey),
    };

    match get_query_parser(query_type) {
        Some(parse) => parse(inner),
        None => Err(QueryParseError::UnrecognisedQueryType(query_type.clone())),
    }
}
