//! Spending profiles and the JSON-backed profile store.

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{collections::HashMap, fmt, fs, marker::PhantomData, path::Path};

use crate::errors::SpendingError;

/// Inclusive bounds for a category's random amount draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Weekly spending plan plus per-category amount bounds.
///
/// Both mappings keep the document order of the profile file: the plan is
/// walked in that order during generation, and the amount-range key set is
/// the default category pool for random spendings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingProfile {
    #[serde(deserialize_with = "ordered_pairs", serialize_with = "as_map")]
    pub spending_per_day: Vec<(String, u32)>,
    #[serde(deserialize_with = "ordered_pairs", serialize_with = "as_map")]
    pub amount_ranges: Vec<(String, AmountRange)>,
}

impl SpendingProfile {
    pub fn new() -> Self {
        Self {
            spending_per_day: Vec::new(),
            amount_ranges: Vec::new(),
        }
    }

    pub fn with_day(mut self, day: impl Into<String>, target: u32) -> Self {
        self.spending_per_day.push((day.into(), target));
        self
    }

    pub fn with_range(mut self, category: impl Into<String>, min: f64, max: f64) -> Self {
        self.amount_ranges
            .push((category.into(), AmountRange::new(min, max)));
        self
    }

    /// Looks up the amount bounds for a category.
    pub fn amount_range(&self, category: &str) -> Result<AmountRange, SpendingError> {
        self.amount_ranges
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, range)| *range)
            .ok_or_else(|| SpendingError::UnknownCategory(category.to_string()))
    }

    /// Category names in document order.
    pub fn category_names(&self) -> Vec<String> {
        self.amount_ranges
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl Default for SpendingProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Collection of named profiles, loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileStore {
    profiles: HashMap<String, SpendingProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpendingError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, profile: SpendingProfile) {
        self.profiles.insert(name.into(), profile);
    }

    pub fn get(&self, name: &str) -> Result<&SpendingProfile, SpendingError> {
        self.profiles
            .get(name)
            .ok_or_else(|| SpendingError::ProfileNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// JSON objects deserialize through MapAccess in document order; collecting
// into a pair vector keeps that order where a sorted map would not.
fn ordered_pairs<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct PairsVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of names to values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor(PhantomData))
}

fn as_map<S, V>(pairs: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (name, value) in pairs {
        map.serialize_entry(name, value)?;
    }
    map.end()
}
