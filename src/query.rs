//! Capabilities that a function score query composes
//!
//! The function score builder never looks inside the things it wraps. Each
//! one only has to know how to render itself as a piece of Query DSL.

use std::fmt::Debug;

use serde_json::Value as Json;


/// A query whose matches get their score modified
pub trait Query: Debug {
    fn source(&self) -> Json;
}


/// A filter, either restricting the base set of documents or scoping a
/// single score function
pub trait Filter: Debug {
    fn source(&self) -> Json;
}


/// Computes a score adjustment for each matched document
///
/// `name` is the key the function is serialized under (eg. "random_score",
/// "field_value_factor", "gauss").
pub trait ScoreFunction: Debug {
    fn name(&self) -> &str;
    fn source(&self) -> Json;
}
