//! Accepted values for "score_mode" and "boost_mode"
//!
//! The builder passes modes through untouched. These lists are only consulted
//! by `FunctionScoreQuery::validate`.

use std::error::Error;
use std::fmt;


pub mod score_mode {
    pub const MULTIPLY: &'static str = "multiply";
    pub const SUM: &'static str = "sum";
    pub const AVG: &'static str = "avg";
    pub const FIRST: &'static str = "first";
    pub const MAX: &'static str = "max";
    pub const MIN: &'static str = "min";

    pub const ALL: &'static [&'static str] = &[MULTIPLY, SUM, AVG, FIRST, MAX, MIN];
}


pub mod boost_mode {
    pub const MULTIPLY: &'static str = "multiply";
    pub const REPLACE: &'static str = "replace";
    pub const SUM: &'static str = "sum";
    pub const AVG: &'static str = "avg";
    pub const MAX: &'static str = "max";
    pub const MIN: &'static str = "min";

    pub const ALL: &'static [&'static str] = &[MULTIPLY, REPLACE, SUM, AVG, MAX, MIN];
}


#[derive(Debug, Clone, PartialEq)]
pub enum FunctionScoreError {
    InvalidScoreMode(String),
    InvalidBoostMode(String),
    NonFiniteValue(&'static str),
}


impl fmt::Display for FunctionScoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FunctionScoreError::InvalidScoreMode(ref mode) => write!(f, "invalid score_mode {:?}", mode),
            FunctionScoreError::InvalidBoostMode(ref mode) => write!(f, "invalid boost_mode {:?}", mode),
            FunctionScoreError::NonFiniteValue(name) => write!(f, "{} must be a finite number", name),
        }
    }
}


impl Error for FunctionScoreError {}


/// Empty means unset, which is always accepted
pub fn check_score_mode(mode: &str) -> Result<(), FunctionScoreError> {
    if mode.is_empty() || score_mode::ALL.contains(&mode) {
        Ok(())
    } else {
        Err(FunctionScoreError::InvalidScoreMode(mode.to_string()))
    }
}


pub fn check_boost_mode(mode: &str) -> Result<(), FunctionScoreError> {
    if mode.is_empty() || boost_mode::ALL.contains(&mode) {
        Ok(())
    } else {
        Err(FunctionScoreError::InvalidBoostMode(mode.to_string()))
    }
}
