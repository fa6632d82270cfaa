use serde::{Deserialize, Serialize};

/// Master list of every scene expected to contain grass.
///
/// Injected into the aggregation run as a value; scenes listed here always
/// appear in the report, even before any log mentions them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneCatalog(Vec<String>);

impl SceneCatalog {
    pub fn new(scene_names: Vec<String>) -> Self {
        Self(scene_names)
    }

    pub fn scene_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for SceneCatalog {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
