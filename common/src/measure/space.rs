use std::fmt;
use std::str::FromStr;

use crate::error::{CapacityError, Field, SpecError, ensure_positive};
use crate::measure::{Dimensions, FitPolicy};

/// The carrying space of a hold, trailer or compartment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Space {
    /// Limited on each axis.
    Box(Dimensions),
    /// Limited by total volume only.
    Volume(f64),
}

impl Space {
    pub fn volume(volume: f64) -> Result<Self, CapacityError> {
        Ok(Space::Volume(ensure_positive(Field::Volume, volume)?))
    }

    /// Rejects a volume written as a literal that is not strictly positive.
    pub fn validate(&self) -> Result<(), CapacityError> {
        match self {
            Space::Box(_) => Ok(()),
            Space::Volume(volume) => ensure_positive(Field::Volume, *volume).map(|_| ()),
        }
    }

    pub fn capacity(&self) -> f64 {
        match self {
            Space::Box(dimensions) => dimensions.volume(),
            Space::Volume(volume) => *volume,
        }
    }

    /// Returns `true` if a box of `candidate` dimensions fits into this space.
    pub fn fits(&self, candidate: &Dimensions, policy: FitPolicy) -> bool {
        match self {
            Space::Box(limit) => limit.contains(candidate, policy),
            Space::Volume(limit) => policy.admits(candidate.volume(), *limit),
        }
    }

    /// One of `parts` equal sections of this space.
    ///
    /// Boxes are cut along their length so every section keeps the full width and height.
    pub fn divide(&self, parts: u32) -> Self {
        match self {
            Space::Box(dimensions) => Space::Box(dimensions.split_length(parts)),
            Space::Volume(volume) => Space::Volume(volume / f64::from(parts)),
        }
    }
}

impl From<Dimensions> for Space {
    fn from(dimensions: Dimensions) -> Self {
        Space::Box(dimensions)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Box(dimensions) => write!(f, "{dimensions}"),
            Space::Volume(volume) => write!(f, "{volume}m3"),
        }
    }
}

impl FromStr for Space {
    type Err = SpecError;

    /// Parses either `LxWxH` or a bare volume such as `42.5` (an `m3` suffix is allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(['x', 'X']) {
            return Ok(Space::Box(s.parse()?));
        }

        let volume: f64 = s
            .strip_suffix("m3")
            .unwrap_or(s)
            .parse()
            .map_err(|_| SpecError::Number(s.to_string()))?;

        Ok(Space::volume(volume)?)
    }
}
