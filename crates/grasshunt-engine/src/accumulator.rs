use grasshunt_types::{AddressKey, EventKind, GrassAddress, GrassEvent, GrassState, GrassTotals};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// One recorded location: the representative address (whose `z` is the one
/// displayed) plus the highest state observed so far.
#[derive(Debug, Clone)]
pub struct GrassEntry {
    pub address: GrassAddress,
    pub state: GrassState,
}

/// Per-scope state over every grass location mentioned in that scope's logs.
///
/// One instance covers one scope: the global run, or a single player. States
/// only ever move up the lifecycle; raw logs repeat and reorder events across
/// uploaded files, and the accumulator converges to the highest observed
/// state regardless of arrival order.
#[derive(Debug, Default)]
pub struct GrassStateAccumulator {
    states: HashMap<AddressKey, GrassEntry>,

    // It's possible to see grass cut without it ever being discovered. That
    // means a log file is missing from what the player uploaded, so the
    // rollups flag it.
    discovered: HashSet<AddressKey>,
}

impl GrassStateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_event(&mut self, event: GrassEvent) {
        let key = event.address.key();

        if event.kind == EventKind::Discovered {
            self.discovered.insert(key.clone());
        }

        let candidate = GrassState::from_kind(event.kind);
        match self.states.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(GrassEntry {
                    address: event.address,
                    state: candidate,
                });
            }
            Entry::Occupied(mut slot) => {
                // Only an upgrade replaces the entry; the upgrading event's
                // address becomes the representative, so its z is the one
                // shown later.
                if candidate > slot.get().state {
                    slot.insert(GrassEntry {
                        address: event.address,
                        state: candidate,
                    });
                }
            }
        }
    }

    pub fn has_data(&self) -> bool {
        !self.states.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &GrassEntry> {
        self.states.values()
    }

    /// Ungrouped rollup across every recorded location in this scope.
    pub fn totals(&self) -> GrassTotals {
        let mut totals = GrassTotals::default();
        for (key, entry) in &self.states {
            tally(&mut totals, entry.state, self.discovered.contains(key));
        }
        totals
    }

    /// Rollup grouped by a key derived from each location's address.
    /// Group order is arbitrary; callers sort.
    pub fn sums_by<K, F>(&self, key_fn: F) -> Vec<(K, GrassTotals)>
    where
        K: Eq + Hash,
        F: Fn(&GrassAddress) -> K,
    {
        let mut sums: HashMap<K, GrassTotals> = HashMap::new();
        for (key, entry) in &self.states {
            let group = sums.entry(key_fn(&entry.address)).or_default();
            tally(group, entry.state, self.discovered.contains(key));
        }
        sums.into_iter().collect()
    }
}

fn tally(totals: &mut GrassTotals, state: GrassState, discovered: bool) {
    totals.grass_seen += 1;
    match state {
        GrassState::ShouldBeCut => totals.grass_should_be_cut += 1,
        GrassState::Cut => totals.grass_cut += 1,
        GrassState::Uncut => {}
    }
    if !discovered {
        totals.missing_discoveries += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grasshunt_types::Coord;

    fn event(kind: EventKind, scene: &str, grass: &str, z: f64) -> GrassEvent {
        GrassEvent {
            kind,
            address: GrassAddress::new(
                scene,
                grass,
                Coord::new(1.0),
                Coord::new(2.0),
                Coord::new(z),
            ),
        }
    }

    #[test]
    fn state_is_max_of_observed_regardless_of_order() {
        use EventKind::*;

        let orderings: [[EventKind; 3]; 6] = [
            [Discovered, PseudoCut, Cut],
            [Discovered, Cut, PseudoCut],
            [PseudoCut, Discovered, Cut],
            [PseudoCut, Cut, Discovered],
            [Cut, Discovered, PseudoCut],
            [Cut, PseudoCut, Discovered],
        ];

        for ordering in orderings {
            let mut accumulator = GrassStateAccumulator::new();
            for kind in ordering {
                accumulator.take_event(event(kind, "Glade", "Tall", 3.0));
            }

            let entries: Vec<_> = accumulator.entries().collect();
            assert_eq!(entries.len(), 1, "ordering: {ordering:?}");
            assert_eq!(entries[0].state, GrassState::Cut, "ordering: {ordering:?}");
        }
    }

    #[test]
    fn repeated_events_are_idempotent() {
        let mut accumulator = GrassStateAccumulator::new();
        for _ in 0..3 {
            accumulator.take_event(event(EventKind::Cut, "Glade", "Tall", 3.0));
        }

        let totals = accumulator.totals();
        assert_eq!(totals.grass_seen, 1);
        assert_eq!(totals.grass_cut, 1);
    }

    #[test]
    fn differing_z_is_the_same_location_and_upgrade_wins_the_display() {
        let mut accumulator = GrassStateAccumulator::new();
        accumulator.take_event(event(EventKind::Discovered, "Glade", "Tall", 1.0));
        accumulator.take_event(event(EventKind::Cut, "Glade", "Tall", 2.0));

        let entries: Vec<_> = accumulator.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].state, GrassState::Cut);
        assert_eq!(entries[0].address.to_string(), "Glade/Tall (1, 2, 2)");
    }

    #[test]
    fn downgrade_does_not_replace_the_representative() {
        let mut accumulator = GrassStateAccumulator::new();
        accumulator.take_event(event(EventKind::Cut, "Glade", "Tall", 5.0));
        accumulator.take_event(event(EventKind::Discovered, "Glade", "Tall", 9.0));

        let entries: Vec<_> = accumulator.entries().collect();
        assert_eq!(entries[0].state, GrassState::Cut);
        assert_eq!(entries[0].address.z.value(), 5.0);

        // the late discovery still cleared the missing-discovery flag
        assert_eq!(accumulator.totals().missing_discoveries, 0);
    }

    #[test]
    fn cut_without_discovery_is_flagged() {
        let mut accumulator = GrassStateAccumulator::new();
        accumulator.take_event(event(EventKind::Cut, "Glade", "Tall", 3.0));
        accumulator.take_event(event(EventKind::PseudoCut, "Glade", "Short", 3.0));
        accumulator.take_event(event(EventKind::Discovered, "Meadow", "Wide", 3.0));

        let totals = accumulator.totals();
        assert_eq!(totals.grass_seen, 3);
        assert_eq!(totals.missing_discoveries, 2);
    }

    #[test]
    fn has_data_flips_on_first_event() {
        let mut accumulator = GrassStateAccumulator::new();
        assert!(!accumulator.has_data());

        accumulator.take_event(event(EventKind::Discovered, "Glade", "Tall", 3.0));
        assert!(accumulator.has_data());
    }

    #[test]
    fn sums_by_groups_on_the_derived_key() {
        let mut accumulator = GrassStateAccumulator::new();
        accumulator.take_event(event(EventKind::Discovered, "Glade", "Tall", 3.0));
        accumulator.take_event(event(EventKind::Cut, "Glade", "Short", 3.0));
        accumulator.take_event(event(EventKind::Cut, "Meadow", "Wide", 3.0));

        let mut groups = accumulator.sums_by(|address| address.scene_name.clone());
        groups.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Glade");
        assert_eq!(groups[0].1.grass_seen, 2);
        assert_eq!(groups[0].1.grass_cut, 1);
        assert_eq!(groups[0].1.missing_discoveries, 1);
        assert_eq!(groups[1].0, "Meadow");
        assert_eq!(groups[1].1.grass_cut, 1);
    }
}
