use std::fmt;

use crate::measure::Dimensions;
use crate::vehicle::{Cargo, Carrier, Parcel};

/// Anything resolved from a spec string: a carrier or a plain parcel.
#[derive(Debug, Clone, PartialEq)]
pub enum Load {
    Carrier(Carrier),
    Parcel(Parcel),
}

impl Load {
    pub fn as_carrier(&self) -> Option<&Carrier> {
        match self {
            Load::Carrier(carrier) => Some(carrier),
            Load::Parcel(_) => None,
        }
    }
}

impl Cargo for Load {
    fn name(&self) -> &str {
        match self {
            Load::Carrier(carrier) => carrier.name(),
            Load::Parcel(parcel) => parcel.name(),
        }
    }

    fn weight(&self) -> f64 {
        match self {
            Load::Carrier(carrier) => carrier.weight(),
            Load::Parcel(parcel) => parcel.weight(),
        }
    }

    fn dimensions(&self) -> &Dimensions {
        match self {
            Load::Carrier(carrier) => carrier.dimensions(),
            Load::Parcel(parcel) => parcel.dimensions(),
        }
    }
}

impl From<Carrier> for Load {
    fn from(carrier: Carrier) -> Self {
        Load::Carrier(carrier)
    }
}

impl From<Parcel> for Load {
    fn from(parcel: Parcel) -> Self {
        Load::Parcel(parcel)
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Carrier(carrier) => write!(f, "{carrier}"),
            Load::Parcel(parcel) => write!(f, "{parcel}"),
        }
    }
}
