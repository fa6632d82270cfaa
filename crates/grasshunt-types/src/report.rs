use crate::state::GrassState;
use serde::{Deserialize, Serialize};

/// Counters shared by every rollup scope (a player, a scene, or everything).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrassTotals {
    /// Distinct locations recorded in the scope
    pub grass_seen: usize,
    /// Locations marked for removal but not confirmed removed
    pub grass_should_be_cut: usize,
    /// Locations confirmed removed
    pub grass_cut: usize,
    /// Locations whose removal was logged without a discovery, implying an
    /// incomplete log upload
    pub missing_discoveries: usize,
}

impl GrassTotals {
    /// Whether every location seen has reached at least should-be-cut.
    pub fn is_cleared(&self) -> bool {
        self.grass_seen <= self.grass_cut + self.grass_should_be_cut
    }
}

/// Rollup for one player across all their uploaded logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub name: String,
    #[serde(flatten)]
    pub totals: GrassTotals,
}

/// Rollup for one scene across all players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSummary {
    pub name: String,
    #[serde(flatten)]
    pub totals: GrassTotals,
    pub cleared: bool,
}

impl SceneSummary {
    pub fn new(name: impl Into<String>, totals: GrassTotals) -> Self {
        let cleared = totals.is_cleared();
        Self {
            name: name.into(),
            totals,
            cleared,
        }
    }

    /// Zero row for a catalog scene with no observed data yet. Never
    /// cleared: nothing has been looked at there.
    pub fn unobserved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            totals: GrassTotals::default(),
            cleared: false,
        }
    }
}

/// One recorded grass location with its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrassRecord {
    pub address: String,
    pub state: GrassState,
}

/// Complete output of one log-processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub players: Vec<PlayerSummary>,
    /// Sorted: uncleared scenes first, then name ascending
    pub scenes: Vec<SceneSummary>,
    pub grass: Vec<GrassRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_formula() {
        let mut totals = GrassTotals {
            grass_seen: 3,
            grass_should_be_cut: 1,
            grass_cut: 2,
            missing_discoveries: 0,
        };
        assert!(totals.is_cleared());

        totals.grass_cut = 1;
        assert!(!totals.is_cleared());
    }

    #[test]
    fn summary_fields_serialize_camel_case() {
        let summary = PlayerSummary {
            name: "alice".to_string(),
            totals: GrassTotals {
                grass_seen: 1,
                grass_should_be_cut: 0,
                grass_cut: 1,
                missing_discoveries: 0,
            },
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "alice");
        assert_eq!(json["grassSeen"], 1);
        assert_eq!(json["grassShouldBeCut"], 0);
        assert_eq!(json["grassCut"], 1);
        assert_eq!(json["missingDiscoveries"], 0);
    }

    #[test]
    fn unobserved_scene_is_not_cleared() {
        let scene = SceneSummary::unobserved("Meadow");
        assert!(!scene.cleared);
        assert_eq!(scene.totals, GrassTotals::default());
    }
}
