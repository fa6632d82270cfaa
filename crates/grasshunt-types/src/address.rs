use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseFloatError;
use std::str::FromStr;

/// Single reported coordinate of a grass location.
///
/// Wraps the parsed number with lawful `Eq`/`Hash` over the bit pattern
/// (negative zero normalized). The event grammar admits no NaN, and the
/// default float formatting prints `1` for inputs entered as `1` and `1.5`
/// for `1.5`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coord(f64);

impl Coord {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    fn canonical_bits(&self) -> u64 {
        // -0 and 0 are the same reported position
        if self.0 == 0.0 {
            0.0f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Coord {}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.canonical_bits());
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Coord {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Address of one grass location as reported in player logs.
///
/// The `z` coordinate is part of the record but not of the identity: it
/// varies with a reload of the containing area, so two sightings of the
/// same grass can disagree on it. Use [`GrassAddress::key`] wherever the
/// address acts as a map or set key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrassAddress {
    pub scene_name: String,
    pub grass_name: String,
    pub x: Coord,
    pub y: Coord,
    pub z: Coord,
}

impl GrassAddress {
    pub fn new(
        scene_name: impl Into<String>,
        grass_name: impl Into<String>,
        x: Coord,
        y: Coord,
        z: Coord,
    ) -> Self {
        Self {
            scene_name: scene_name.into(),
            grass_name: grass_name.into(),
            x,
            y,
            z,
        }
    }

    /// Identity of this location: everything but `z`.
    pub fn key(&self) -> AddressKey {
        AddressKey {
            scene_name: self.scene_name.clone(),
            grass_name: self.grass_name.clone(),
            x: self.x,
            y: self.y,
        }
    }
}

impl fmt::Display for GrassAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}, {}, {})",
            self.scene_name, self.grass_name, self.x, self.y, self.z
        )
    }
}

/// Derived equality/hash key for a [`GrassAddress`], excluding `z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKey {
    scene_name: String,
    grass_name: String,
    x: Coord,
    y: Coord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(z: f64) -> GrassAddress {
        GrassAddress::new(
            "Glade",
            "Tall",
            Coord::new(1.0),
            Coord::new(2.0),
            Coord::new(z),
        )
    }

    #[test]
    fn key_ignores_z() {
        assert_eq!(address(3.0).key(), address(4.0).key());
    }

    #[test]
    fn key_distinguishes_positions() {
        let a = address(3.0);
        let mut b = address(3.0);
        b.x = Coord::new(1.5);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn display_keeps_integer_coordinates_short() {
        assert_eq!(address(4.0).to_string(), "Glade/Tall (1, 2, 4)");
    }

    #[test]
    fn display_keeps_fractional_coordinates() {
        let a = GrassAddress::new(
            "Glade",
            "Tall",
            Coord::new(-1.5),
            Coord::new(2.0),
            Coord::new(0.25),
        );
        assert_eq!(a.to_string(), "Glade/Tall (-1.5, 2, 0.25)");
    }

    #[test]
    fn negative_zero_is_zero() {
        let a = Coord::new(0.0);
        let b = Coord::new(-0.0);
        assert_eq!(a, b);
    }
}
