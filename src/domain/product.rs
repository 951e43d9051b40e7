use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// only `id` is guaranteed; a NULL cell in the store travels as `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
}

/// A numeric price. Whole amounts are written as integers (`250`), everything
/// else as a float (`19.9`), both on the wire and when displayed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(pub f64);

impl Price {
    fn as_whole(&self) -> Option<i64> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            Some(value as i64)
        } else {
            None
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_whole() {
            Some(whole) => write!(f, "{}", whole),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Price)
    }
}
