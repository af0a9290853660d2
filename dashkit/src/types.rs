use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::DashError;

/// Attendee name -> interaction count, in document order.
pub type CountMap = IndexMap<String, u64>;

/// Student name -> raw session mapping. Session values are interpreted
/// row by row so one bad value never rejects the whole document.
pub type SpecialStudents = IndexMap<String, Value>;

/// Root payload of `output.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient")]
    pub aggregate: Option<ViewData>,

    #[serde(default, deserialize_with = "lenient_blocks")]
    pub by_date: IndexMap<String, ViewData>,

    #[serde(default, deserialize_with = "lenient")]
    pub special_students: SpecialStudents,
}

/// Counts for one view: the aggregate or a single date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewData {
    #[serde(default, deserialize_with = "lenient_counts")]
    pub interaction_counts: CountMap,

    #[serde(default, deserialize_with = "lenient")]
    pub non_participants: Vec<String>,

    #[serde(default, deserialize_with = "lenient_counts")]
    pub participation_over_time: CountMap,

    #[serde(default, deserialize_with = "lenient")]
    pub total_participants: u64,

    #[serde(default, deserialize_with = "lenient")]
    pub total_non_participants: u64,
}

impl Document {
    pub fn from_json(body: &str) -> Result<Self, DashError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn has_date(&self, key: &str) -> bool {
        self.by_date.contains_key(key)
    }
}

/// Falls back to the empty form of a field when it is present but has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!("Malformed field replaced by its empty form: {}", e);
            Ok(T::default())
        }
    }
}

/// Entries of a JSON object, in document order. Anything else is treated as empty.
fn object_entries<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(entries) => Ok(entries),
        other => {
            warn!("Expected an object, found {}; using an empty map", other);
            Ok(Map::new())
        }
    }
}

/// Keeps every well-formed count. A bad value drops only its own pair.
fn lenient_counts<'de, D>(deserializer: D) -> Result<CountMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(object_entries(deserializer)?
        .into_iter()
        .filter_map(|(name, count)| match count.as_u64() {
            Some(count) => Some((name, count)),
            None => {
                warn!("Dropping malformed count {} for {}", count, name);
                None
            }
        })
        .collect())
}

/// A date block with the wrong shape becomes an empty view; its siblings are untouched.
fn lenient_blocks<'de, D>(deserializer: D) -> Result<IndexMap<String, ViewData>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(object_entries(deserializer)?
        .into_iter()
        .map(|(date, block)| {
            let data = serde_json::from_value(block).unwrap_or_else(|e| {
                warn!("Malformed block for {} replaced by an empty view: {}", date, e);
                ViewData::default()
            });
            (date, data)
        })
        .collect())
}
