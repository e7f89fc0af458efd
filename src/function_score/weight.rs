use std::fmt::Debug;

use serde_json::Value as Json;


/// Scales the output of a single score function before it is combined with
/// the others
///
/// Whatever a weighting renders must be accepted in the "weight" position of
/// a function entry. For `Weight` that is a plain number.
pub trait Weighting: Debug {
    fn source(&self) -> Json;
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    value: f64,
}


impl Weight {
    pub fn new(weight: f64) -> Weight {
        Weight {
            value: weight,
        }
    }

    #[inline]
    pub fn value(mut self, weight: f64) -> Weight {
        self.value = weight;
        self
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.value
    }
}


impl Weighting for Weight {
    fn source(&self) -> Json {
        Json::from(self.value)
    }
}
