use std::ops::Index;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use crate::domain::Activity;

/// Read-only copy of an activity handed out by list operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySnapshot {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivitySnapshot {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

/// Snapshot of the whole catalog in insertion order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityCatalog {
    entries: Vec<(String, ActivitySnapshot)>,
}

#[allow(dead_code)]
impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&ActivitySnapshot> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, snapshot)| snapshot)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivitySnapshot)> {
        self.entries.iter().map(|(name, snapshot)| (name.as_str(), snapshot))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|activity| (activity.name.clone(), ActivitySnapshot::from(activity)))
            .collect();
        Self { entries }
    }
}

impl Index<&str> for ActivityCatalog {
    type Output = ActivitySnapshot;

    fn index(&self, name: &str) -> &ActivitySnapshot {
        match self.get(name) {
            Some(snapshot) => snapshot,
            None => panic!("no activity named {name:?}"),
        }
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, snapshot) in &self.entries {
            map.serialize_entry(name, snapshot)?;
        }
        map.end()
    }
}

/// Confirmation returned by a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self { message: format!("Signed up {email} for {activity}") }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self { message: format!("Unregistered {email} from {activity}") }
    }
}
