use std::fmt;
use std::str::FromStr;

use crate::error::{CapacityError, Field, SpecError, ensure_positive};
use crate::measure::FitPolicy;

/// Length, width and height of a box, all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, CapacityError> {
        Ok(Self {
            length: ensure_positive(Field::Length, length)?,
            width: ensure_positive(Field::Width, width)?,
            height: ensure_positive(Field::Height, height)?,
        })
    }

    /// Builds dimensions from literals already known to be positive.
    pub(crate) const fn known(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns `true` if `other` can be placed inside `self`.
    ///
    /// Axes are compared pairwise; rotating `other` is not considered.
    pub fn contains(&self, other: &Dimensions, policy: FitPolicy) -> bool {
        policy.admits(other.length, self.length)
            && policy.admits(other.width, self.width)
            && policy.admits(other.height, self.height)
    }

    /// Returns `true` if the footprint (length and width) of `other` fits on `self`.
    pub fn footprint_holds(&self, other: &Dimensions, policy: FitPolicy) -> bool {
        policy.admits(other.length, self.length) && policy.admits(other.width, self.width)
    }

    /// Splits the box into `parts` equal sections along its length.
    pub(crate) fn split_length(&self, parts: u32) -> Self {
        Self {
            length: self.length / f64::from(parts),
            ..*self
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = SpecError;

    /// Parses `LxWxH`, e.g. `4.5x1.8x1.4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let axes: Vec<&str> = s.trim().split(['x', 'X']).collect();
        let [length, width, height] = axes.as_slice() else {
            return Err(SpecError::Dimensions(s.to_string()));
        };

        let parse = |axis: &str| -> Result<f64, SpecError> {
            axis.trim()
                .parse::<f64>()
                .map_err(|_| SpecError::Dimensions(s.to_string()))
        };

        Ok(Dimensions::new(parse(length)?, parse(width)?, parse(height)?)?)
    }
}
