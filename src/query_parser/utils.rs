use serde_json::{Map, Value as Json};

use query_parser::QueryParseError;


pub fn parse_string(json: &Json) -> Result<String, QueryParseError> {
    match *json {
        Json::String(ref string) => Ok(string.clone()),
        _ => Err(QueryParseError::ExpectedString),
    }
}


pub fn parse_float(json: &Json) -> Result<f64, QueryParseError> {
    match *json {
        Json::Number(ref number) => {
            match number.as_f64() {
                Some(val) => Ok(val),
                None => Err(QueryParseError::ExpectedFloat),
            }
        }
        _ => Err(QueryParseError::ExpectedFloat),
    }
}


pub fn parse_object(json: &Json) -> Result<&Map<String, Json>, QueryParseError> {
    json.as_object().ok_or(QueryParseError::ExpectedObject)
}


pub fn parse_array(json: &Json) -> Result<&Vec<Json>, QueryParseError> {
    json.as_array().ok_or(QueryParseError::ExpectedArray)
}
