//! Parses "function_score" queries

use serde_json::Value as Json;

use query::ScoreFunction;
use raw::{RawQuery, RawScoreFunction};
use function_score::FunctionScoreQuery;
use function_score::function::FunctionScoreFunction;
use function_score::weight::Weight;
use query_parser::QueryParseError;
use query_parser::utils::{parse_string, parse_float, parse_object, parse_array};


/// Score functions that may appear directly in the query when there is only
/// one of them
const SCORE_FUNCTION_NAMES: &'static [&'static str] = &[
    "script_score",
    "random_score",
    "field_value_factor",
    "gauss",
    "linear",
    "exp",
];


fn parse_function(json: &Json) -> Result<FunctionScoreFunction, QueryParseError> {
    let object = parse_object(json)?;

    let mut filter = None;
    let mut weight = None;
    let mut score_function: Option<RawScoreFunction> = None;

    for (key, value) in object.iter() {
        match key.as_str() {
            "filter" => {
                parse_object(value)?;
                filter = Some(RawQuery::new(value.clone()));
            }
            "weight" => {
                weight = Some(Weight::new(parse_float(value)?));
            }
            name => {
                // Anything else names the score function, which there can
                // only be one of
                if score_function.is_some() {
                    return Err(QueryParseError::ExpectedSingleKey);
                }

                score_function = Some(RawScoreFunction::new(name, value.clone()));
            }
        }
    }

    let mut function = match score_function {
        Some(score_function) => FunctionScoreFunction::new(score_function),
        None => return Err(QueryParseError::ExpectedScoreFunction),
    };

    if let Some(filter) = filter {
        function = function.filter(filter);
    }

    if let Some(weight) = weight {
        function = function.weight(weight);
    }

    Ok(function)
}


pub fn parse(json: &Json) -> Result<FunctionScoreQuery, QueryParseError> {
    let object = parse_object(json)?;

    if object.contains_key("query") && object.contains_key("filter") {
        return Err(QueryParseError::ConflictingKeys("query".to_string(), "filter".to_string()));
    }

    let mut query = FunctionScoreQuery::new();
    let mut functions = None;
    let mut score_function: Option<RawScoreFunction> = None;

    for (key, value) in object.iter() {
        match key.as_str() {
            "query" => {
                parse_object(value)?;
                query = query.query(RawQuery::new(value.clone()));
            }
            "filter" => {
                parse_object(value)?;
                query = query.filter(RawQuery::new(value.clone()));
            }
            "functions" => {
                let mut parsed = Vec::new();
                for function in parse_array(value)?.iter() {
                    parsed.push(parse_function(function)?);
                }

                functions = Some(parsed);
            }
            "score_mode" => {
                query = query.score_mode(parse_string(value)?);
            }
            "boost_mode" => {
                query = query.boost_mode(parse_string(value)?);
            }
            "max_boost" => {
                query = query.max_boost(parse_float(value)? as f32);
            }
            "boost" => {
                query = query.boost(parse_float(value)? as f32);
            }
            "min_score" => {
                query = query.min_score(parse_float(value)? as f32);
            }
            name if SCORE_FUNCTION_NAMES.contains(&name) => {
                if let Some(ref existing) = score_function {
                    return Err(QueryParseError::ConflictingKeys(existing.name().to_string(), name.to_string()));
                }

                score_function = Some(RawScoreFunction::new(name, value.clone()));
            }
            _ => {
                debug!("unrecognised key in function_score query: {:?}", key);
                return Err(QueryParseError::UnrecognisedKey(key.clone()));
            }
        }
    }

    match (score_function, functions) {
        (Some(score_function), Some(_)) => {
            Err(QueryParseError::ConflictingKeys(score_function.name().to_string(), "functions".to_string()))
        }
        (Some(score_function), None) => Ok(query.add_score_func(score_function)),
        (None, Some(functions)) => {
            Ok(functions.into_iter().fold(query, |query, function| query.add_function(function)))
        }
        (None, None) => Ok(query),
    }
}
