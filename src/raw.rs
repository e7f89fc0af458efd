//! Pass-through queries, filters and score functions
//!
//! These wrap a JSON document that is already in Query DSL form. They are
//! what the parser produces, and are handy for plugging an existing snippet
//! into a builder.

use serde_json::Value as Json;

use query::{Query, Filter, ScoreFunction};


#[derive(Debug, Clone, PartialEq)]
pub struct RawQuery(pub Json);


impl RawQuery {
    pub fn new(json: Json) -> RawQuery {
        RawQuery(json)
    }
}


impl Query for RawQuery {
    fn source(&self) -> Json {
        self.0.clone()
    }
}


impl Filter for RawQuery {
    fn source(&self) -> Json {
        self.0.clone()
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct RawScoreFunction {
    name: String,
    source: Json,
}


impl RawScoreFunction {
    pub fn new<N: Into<String>>(name: N, source: Json) -> RawScoreFunction {
        RawScoreFunction {
            name: name.into(),
            source: source,
        }
    }
}


impl ScoreFunction for RawScoreFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> Json {
        self.source.clone()
    }
}


#[cfg(test)]
mod tests {
    use query::{Query, Filter, ScoreFunction};

    use super::{RawQuery, RawScoreFunction};

    #[test]
    fn test_raw_query_source() {
        let query = RawQuery::new(json!({
            "term": {
                "title": "foo"
            }
        }));

        assert_eq!(Query::source(&query), json!({"term": {"title": "foo"}}));
        assert_eq!(Filter::source(&query), json!({"term": {"title": "foo"}}));
    }

    #[test]
    fn test_raw_score_function() {
        let function = RawScoreFunction::new("random_score", json!({"seed": 1}));

        assert_eq!(function.name(), "random_score");
        assert_eq!(function.source(), json!({"seed": 1}));
    }
}
