use std::fmt;

use crate::error::{CapacityError, Field, ensure_positive};
use crate::measure::Dimensions;
use crate::vehicle::Cargo;

/// Cargo that is not a vehicle: a crate, a container, a piano.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    name: String,
    weight: f64,
    dimensions: Dimensions,
}

impl Parcel {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        dimensions: Dimensions,
    ) -> Result<Self, CapacityError> {
        Ok(Self {
            name: name.into(),
            weight: ensure_positive(Field::Weight, weight)?,
            dimensions,
        })
    }
}

impl Cargo for Parcel {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}t, {})", self.name, self.weight, self.dimensions)
    }
}
