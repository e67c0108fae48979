use core_types::AllocationSlice;
use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object with typed values that keeps its keys in document order.
///
/// Allocation order decides which donut arcs sit next to each other, so the
/// service's key order has to survive deserialization. This relies on
/// serde_json's `preserve_order` feature for the intermediate `Map`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>", bound(deserialize = "V: DeserializeOwned"))]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: DeserializeOwned> TryFrom<Map<String, Value>> for OrderedMap<V> {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(key, value)| Ok((key, serde_json::from_value(value)?)))
            .collect()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Percent per asset category, e.g. `{"Equity": 65, "Debt": 25, "Hybrid": 10}`.
pub type Allocation = OrderedMap<f64>;

impl Allocation {
    /// The allocation as donut slices, in the order the service sent them.
    pub fn to_slices(&self) -> Vec<AllocationSlice> {
        self.iter()
            .map(|(label, percent)| AllocationSlice::new(label, *percent))
            .collect()
    }
}

/// The body of `POST /recommend-funds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Monthly SIP amount.
    pub sip: f64,
    pub years: u32,
    pub goal: String,
}

/// A single recommended scheme.
///
/// Besides its name and sub-category, a fund carries whichever numeric metric
/// the service ranked by; its key is given by `RecommendationResponse::metric_used`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundEntry {
    pub scheme_name: String,
    pub sub_category: String,
    #[serde(flatten)]
    pub metrics: Map<String, Value>,
}

impl FundEntry {
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).and_then(Value::as_f64)
    }
}

/// The response from a successful `POST /recommend-funds` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub investment_horizon: String,
    pub risk_profile: String,
    pub allocation: Allocation,
    /// Funds per category, in the order the service sent them.
    pub recommended_funds: OrderedMap<Vec<FundEntry>>,
    pub metric_used: String,
}
