use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single variant record as served by `/visualizer/variants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Descriptor such as `A123C`, or `A123C+D234E` for compound variants.
    pub mutation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wild_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutant: Option<String>,
    #[serde(default)]
    pub properties: PropertyValues,
}

impl Mutation {
    pub fn new(mutation: impl Into<String>) -> Self {
        Self {
            id: None,
            mutation: mutation.into(),
            position: None,
            wild_type: None,
            mutant: None,
            properties: PropertyValues::default(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Option<f64>) -> Self {
        self.properties.insert(name, value);
        self
    }
}

/// Property measurements of a variant, kept in the order the backend sent them.
///
/// The first entry decides the default property of a view, so the wire
/// order matters and a sorted map would lose it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyValues(Vec<(String, Option<f64>)>);

impl PropertyValues {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| *value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(key, _)| key == name)
    }

    /// Inserts or replaces a value. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<f64>) {
        let name = name.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PropertyValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for PropertyValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropertyVisitor;

        impl<'de> Visitor<'de> for PropertyVisitor {
            type Value = PropertyValues;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of property names to numbers or null")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PropertyValues::default())
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = PropertyValues::default();
                while let Some((key, value)) = access.next_entry::<String, Option<f64>>()? {
                    values.insert(key, value);
                }
                Ok(values)
            }
        }

        deserializer.deserialize_any(PropertyVisitor)
    }
}

/// Payload of `/visualizer/parent-sequence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentSequenceData {
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub sequence: String,
}

fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One chart row for the currently selected property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationChartData {
    /// 1-based position of the first substitution in the descriptor.
    pub mutation_position: usize,
    pub value: Option<f64>,
    pub mutated_amino_acid: Vec<char>,
    pub original_amino_acid: Option<char>,
}
