use crate::models::JurisdictionBounds;
use crate::processors::bucketing::Candidate;
use crate::utils::coordinates::manhattan_distance;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    North,
    South,
    East,
    West,
    Center,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::North => "north",
            Slot::South => "south",
            Slot::East => "east",
            Slot::West => "west",
            Slot::Center => "center",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The five representative observations chosen for one jurisdiction.
///
/// Slots may point at the same observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSelection<'a> {
    pub north: Candidate<'a>,
    pub south: Candidate<'a>,
    pub east: Candidate<'a>,
    pub west: Candidate<'a>,
    pub center: Candidate<'a>,
}

impl<'a> StateSelection<'a> {
    fn filled_with(candidate: Candidate<'a>) -> Self {
        Self {
            north: candidate,
            south: candidate,
            east: candidate,
            west: candidate,
            center: candidate,
        }
    }

    pub fn slots(&self) -> [(Slot, Candidate<'a>); 5] {
        [
            (Slot::North, self.north),
            (Slot::South, self.south),
            (Slot::East, self.east),
            (Slot::West, self.west),
            (Slot::Center, self.center),
        ]
    }

    /// One price per slot whose occupant has a positive 100LL price.
    ///
    /// An observation filling several slots is counted once per slot.
    pub fn sample_prices(&self) -> Vec<f64> {
        self.slots()
            .iter()
            .filter_map(|(_, candidate)| candidate.observation.sample_price())
            .collect()
    }
}

/// Picks the north/south/east/west-most observations and the one closest to
/// the center of the jurisdiction's bounding box.
///
/// Longitudes are compared as plain numbers, so for boxes that straddle the
/// antimeridian (western Aleutians) "east" and "west" are approximate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtremalSelector;

impl ExtremalSelector {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` only for an empty candidate list.
    pub fn select<'a>(
        &self,
        bounds: &JurisdictionBounds,
        candidates: &[Candidate<'a>],
    ) -> Option<StateSelection<'a>> {
        let first = *candidates.first()?;
        let mut selection = StateSelection::filled_with(first);

        let (center_lat, center_lon) = bounds.center();
        let mut best_center_distance = f64::INFINITY;

        for candidate in candidates {
            let Some((lat, lon)) = candidate.position() else {
                continue;
            };

            // A slot still holding a coordinate-less fallback yields to the
            // first positioned candidate.
            if selection.north.position().map_or(true, |(n, _)| lat > n) {
                selection.north = *candidate;
            }
            if selection.south.position().map_or(true, |(s, _)| lat < s) {
                selection.south = *candidate;
            }
            if selection.east.position().map_or(true, |(_, e)| lon > e) {
                selection.east = *candidate;
            }
            if selection.west.position().map_or(true, |(_, w)| lon < w) {
                selection.west = *candidate;
            }

            let distance = manhattan_distance(lat, lon, center_lat, center_lon);
            if distance < best_center_distance {
                best_center_distance = distance;
                selection.center = *candidate;
            }
        }

        Some(selection)
    }
}
