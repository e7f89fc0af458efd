//! Builds "function_score" queries
//!
//! A function score query wraps a query (or a filter) and modifies the score
//! of the documents it matches with one or more score functions. This can be
//! useful if, for example, a score function is expensive to compute and it is
//! sufficient to run it on a filtered set of documents.
//!
//! Every configuration method consumes the builder and returns the updated
//! one, so calls chain. Clone a builder to branch off a variant without
//! affecting the original.

pub mod function;
pub mod weight;
pub mod mode;

use std::rc::Rc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

use query::{Query, Filter, ScoreFunction};
use function_score::function::FunctionScoreFunction;
use function_score::weight::Weighting;
use function_score::mode::{FunctionScoreError, check_score_mode, check_boost_mode};


/// Renders an f32 by its shortest decimal form, so 0.1f32 is written as 0.1
/// rather than its widened f64 value. Non-finite values become null
fn float_to_json(value: f32) -> Json {
    value.to_string().parse::<f64>().ok()
        .and_then(Number::from_f64)
        .map_or(Json::Null, Json::Number)
}


#[derive(Debug, Clone, Default)]
pub struct FunctionScoreQuery {
    query: Option<Rc<dyn Query>>,
    filter: Option<Rc<dyn Filter>>,
    functions: Vec<FunctionScoreFunction>,
    score_mode: String,
    boost_mode: String,
    max_boost: Option<f32>,
    boost: Option<f32>,
    min_score: Option<f32>,
}


impl FunctionScoreQuery {
    pub fn new() -> FunctionScoreQuery {
        FunctionScoreQuery::default()
    }

    /// Sets the base query. Replaces any filter set previously
    #[inline]
    pub fn query<Q: Query + 'static>(mut self, query: Q) -> FunctionScoreQuery {
        self.query = Some(Rc::new(query));
        self.filter = None;
        self
    }

    /// Sets the base filter. Replaces any query set previously
    #[inline]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> FunctionScoreQuery {
        self.query = None;
        self.filter = Some(Rc::new(filter));
        self
    }

    /// Adds a score function that only applies to documents matching `filter`
    pub fn add<F, S>(self, filter: F, score_function: S) -> FunctionScoreQuery
        where F: Filter + 'static,
              S: ScoreFunction + 'static
    {
        self.add_function(FunctionScoreFunction::new(score_function).filter(filter))
    }

    pub fn add_score_func<S: ScoreFunction + 'static>(self, score_function: S) -> FunctionScoreQuery {
        self.add_function(FunctionScoreFunction::new(score_function))
    }

    pub fn add_score_func_with_weight<S, W>(self, score_function: S, weight: W) -> FunctionScoreQuery
        where S: ScoreFunction + 'static,
              W: Weighting + 'static
    {
        self.add_function(FunctionScoreFunction::new(score_function).weight(weight))
    }

    #[inline]
    pub fn add_function(mut self, function: FunctionScoreFunction) -> FunctionScoreQuery {
        self.functions.push(function);
        self
    }

    /// How the scores of the functions are combined. An empty string unsets it
    #[inline]
    pub fn score_mode<M: Into<String>>(mut self, score_mode: M) -> FunctionScoreQuery {
        self.score_mode = score_mode.into();
        self
    }

    /// How the combined function score is combined with the query score. An
    /// empty string unsets it
    #[inline]
    pub fn boost_mode<M: Into<String>>(mut self, boost_mode: M) -> FunctionScoreQuery {
        self.boost_mode = boost_mode.into();
        self
    }

    #[inline]
    pub fn max_boost(mut self, max_boost: f32) -> FunctionScoreQuery {
        self.max_boost = Some(max_boost);
        self
    }

    #[inline]
    pub fn boost(mut self, boost: f32) -> FunctionScoreQuery {
        self.boost = Some(boost);
        self
    }

    #[inline]
    pub fn min_score(mut self, min_score: f32) -> FunctionScoreQuery {
        self.min_score = Some(min_score);
        self
    }

    pub fn functions(&self) -> &[FunctionScoreFunction] {
        &self.functions
    }

    /// Checks the score and boost modes against the values the search
    /// server accepts
    ///
    /// Also rejects NaN and infinite boosts and min scores.
    /// `source` never calls this; an unchecked query is still serialized.
    pub fn validate(&self) -> Result<(), FunctionScoreError> {
        check_score_mode(&self.score_mode)?;
        check_boost_mode(&self.boost_mode)?;

        let modifiers = [("max_boost", self.max_boost), ("boost", self.boost), ("min_score", self.min_score)];
        for &(name, value) in modifiers.iter() {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(FunctionScoreError::NonFiniteValue(name));
                }
            }
        }

        Ok(())
    }

    pub fn source(&self) -> Json {
        let mut query = Map::new();

        if let Some(ref base_query) = self.query {
            query.insert("query".to_string(), base_query.source());
        } else if let Some(ref filter) = self.filter {
            query.insert("filter".to_string(), filter.source());
        }

        // A single unfiltered function can be put directly in the query
        // instead of in a one element "functions" array
        if self.functions.len() == 1 && !self.functions[0].has_filter() {
            let score_function = self.functions[0].score_function();
            trace!("collapsing single score function {:?}", score_function.name());
            query.insert(score_function.name().to_string(), score_function.source());
        } else {
            let functions = self.functions.iter()
                .map(|function| function.source())
                .collect::<Vec<_>>();
            query.insert("functions".to_string(), Json::Array(functions));
        }

        if !self.score_mode.is_empty() {
            query.insert("score_mode".to_string(), Json::String(self.score_mode.clone()));
        }

        if !self.boost_mode.is_empty() {
            query.insert("boost_mode".to_string(), Json::String(self.boost_mode.clone()));
        }

        if let Some(max_boost) = self.max_boost {
            query.insert("max_boost".to_string(), float_to_json(max_boost));
        }

        if let Some(boost) = self.boost {
            query.insert("boost".to_string(), float_to_json(boost));
        }

        if let Some(min_score) = self.min_score {
            query.insert("min_score".to_string(), float_to_json(min_score));
        }

        let mut source = Map::new();
        source.insert("function_score".to_string(), Json::Object(query));
        Json::Object(source)
    }
}


impl Serialize for FunctionScoreQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source().serialize(serializer)
    }
}
