//! A single entry in the "functions" array of a function score query

use std::rc::Rc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value as Json};

use query::{Filter, ScoreFunction};
use function_score::weight::Weighting;


#[derive(Debug, Clone)]
pub struct FunctionScoreFunction {
    filter: Option<Rc<dyn Filter>>,
    score_function: Rc<dyn ScoreFunction>,
    weight: Option<Rc<dyn Weighting>>,
}


impl FunctionScoreFunction {
    pub fn new<S: ScoreFunction + 'static>(score_function: S) -> FunctionScoreFunction {
        FunctionScoreFunction {
            filter: None,
            score_function: Rc::new(score_function),
            weight: None,
        }
    }

    /// Only apply the score function to documents matching this filter
    #[inline]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> FunctionScoreFunction {
        self.filter = Some(Rc::new(filter));
        self
    }

    #[inline]
    pub fn weight<W: Weighting + 'static>(mut self, weight: W) -> FunctionScoreFunction {
        self.weight = Some(Rc::new(weight));
        self
    }

    #[inline]
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    #[inline]
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    pub fn name(&self) -> &str {
        self.score_function.name()
    }

    pub fn score_function(&self) -> &dyn ScoreFunction {
        &*self.score_function
    }

    pub fn source(&self) -> Json {
        let mut source = Map::new();

        if let Some(ref filter) = self.filter {
            source.insert("filter".to_string(), filter.source());
        }

        source.insert(self.score_function.name().to_string(), self.score_function.source());

        if let Some(ref weight) = self.weight {
            source.insert("weight".to_string(), weight.source());
        }

        Json::Object(source)
    }
}


impl Serialize for FunctionScoreFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source().serialize(serializer)
    }
}
