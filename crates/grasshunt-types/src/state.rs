use crate::event::EventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of one grass location.
///
/// The ordering is the state machine: merging observations keeps the
/// maximum, so repeated or reordered log uploads converge to the highest
/// state ever seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrassState {
    Uncut,
    ShouldBeCut,
    Cut,
}

impl GrassState {
    pub fn from_kind(kind: EventKind) -> Self {
        match kind {
            EventKind::Discovered => Self::Uncut,
            EventKind::PseudoCut => Self::ShouldBeCut,
            EventKind::Cut => Self::Cut,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Uncut => "UNCUT",
            Self::ShouldBeCut => "SHOULD_BE_CUT",
            Self::Cut => "CUT",
        }
    }
}

impl fmt::Display for GrassState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_totally_ordered() {
        assert!(GrassState::Uncut < GrassState::ShouldBeCut);
        assert!(GrassState::ShouldBeCut < GrassState::Cut);
    }

    #[test]
    fn kind_maps_one_to_one() {
        assert_eq!(GrassState::from_kind(EventKind::Discovered), GrassState::Uncut);
        assert_eq!(
            GrassState::from_kind(EventKind::PseudoCut),
            GrassState::ShouldBeCut
        );
        assert_eq!(GrassState::from_kind(EventKind::Cut), GrassState::Cut);
    }

    #[test]
    fn serialized_names_match_display() {
        let json = serde_json::to_string(&GrassState::ShouldBeCut).unwrap();
        assert_eq!(json, "\"SHOULD_BE_CUT\"");
        assert_eq!(GrassState::ShouldBeCut.to_string(), "SHOULD_BE_CUT");
    }
}
