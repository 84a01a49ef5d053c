use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One activity as delivered by the upstream `GET /activities` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u64,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Not clamped: an over-subscribed activity goes negative.
    pub fn spots_left(&self) -> i64 {
        let max = i64::try_from(self.max_participants).unwrap_or(i64::MAX);
        max.saturating_sub(self.participants.len() as i64)
    }
}

/// An activity together with the name it is keyed by in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedActivity {
    pub name: String,
    pub activity: Activity,
}

/// The full set of activities, in the order the upstream delivered them.
///
/// Deserialized from a JSON object keyed by activity name. Key order is kept
/// (serde_json is built with `preserve_order`), and every value must have the
/// exact `Activity` shape, otherwise the whole catalog is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Catalog {
    activities: Vec<NamedActivity>,
}

impl Catalog {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedActivity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.activity)
    }
}

impl TryFrom<Map<String, Value>> for Catalog {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let activities = map
            .into_iter()
            .map(|(name, value)| {
                let activity = serde_json::from_value::<Activity>(value)?;
                Ok(NamedActivity { name, activity })
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;
        Ok(Self { activities })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a NamedActivity;
    type IntoIter = std::slice::Iter<'a, NamedActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}
