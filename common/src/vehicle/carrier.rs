use std::fmt;

use tracing::trace;

use crate::error::{CapacityError, Field, ensure_positive};
use crate::measure::{Dimensions, Space};
use crate::vehicle::{Capacity, Cargo, Kind};

const TARDIS_WEIGHT: f64 = 0.01;
const TARDIS_DIMENSIONS: Dimensions = Dimensions::known(1.5, 1.5, 2.5);

// Own stowage of the vehicles that never take cargo aboard
const BASKET_WEIGHT: f64 = 0.1;
const BASKET: Dimensions = Dimensions::known(0.2, 0.1, 0.1);
const TRUNK_WEIGHT: f64 = 0.2;
const TRUNK: Dimensions = Dimensions::known(0.5, 0.5, 0.5);
const CATCH_WEIGHT: f64 = 0.2;
const FISH_HOLD: Dimensions = Dimensions::known(3.0, 1.0, 0.5);

/// A vehicle that may carry cargo.
///
/// Built once through one of the constructors below and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Carrier {
    name: String,
    kind: Kind,
    weight: f64,
    dimensions: Dimensions,
    capacity: Capacity,
}

impl Carrier {
    /// Creates a carrier with an arbitrary capacity rule.
    ///
    /// Fails for [`Kind::Parcel`], for a non-positive own weight and for any
    /// capacity limit [`Capacity::validate`] rejects.
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        weight: f64,
        dimensions: Dimensions,
        capacity: Capacity,
    ) -> Result<Self, CapacityError> {
        if kind == Kind::Parcel {
            return Err(CapacityError::NotACarrier { kind });
        }
        capacity.validate()?;

        let carrier = Self {
            name: name.into(),
            kind,
            weight: ensure_positive(Field::Weight, weight)?,
            dimensions,
            capacity,
        };
        trace!(name = %carrier.name, kind = ?carrier.kind, capacity = %carrier.capacity, "carrier built");
        Ok(carrier)
    }

    /// Its baskets hold 100 kg of shopping, never another vehicle.
    pub fn bicycle(weight: f64, dimensions: Dimensions) -> Result<Self, CapacityError> {
        let baskets = Capacity::Stowage {
            max_weight: BASKET_WEIGHT,
            space: Space::Box(BASKET),
        };
        Self::new("Bicycle", Kind::Bicycle, weight, dimensions, baskets)
    }

    /// Carries other vehicles on its roof, up to `max_weight`.
    pub fn car(
        name: impl Into<String>,
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
    ) -> Result<Self, CapacityError> {
        Self::new(name, Kind::Car, weight, dimensions, Capacity::roof(max_weight)?)
    }

    pub fn bolid(weight: f64, dimensions: Dimensions) -> Result<Self, CapacityError> {
        let trunk = Capacity::Stowage {
            max_weight: TRUNK_WEIGHT,
            space: Space::Box(TRUNK),
        };
        Self::new("Bolid", Kind::Bolid, weight, dimensions, trunk)
    }

    pub fn wagon(
        weight: f64,
        dimensions: Dimensions,
        max_trailer_weight: f64,
        trailer: impl Into<Space>,
    ) -> Result<Self, CapacityError> {
        let capacity = Capacity::hold(max_trailer_weight, trailer)?;
        Self::new("Wagon", Kind::Wagon, weight, dimensions, capacity)
    }

    /// 10 kg, the size of a police box, endless inside.
    pub fn tardis() -> Self {
        Self {
            name: String::from("Tardis"),
            kind: Kind::Tardis,
            weight: TARDIS_WEIGHT,
            dimensions: TARDIS_DIMENSIONS,
            capacity: Capacity::Unbounded,
        }
    }

    pub fn ship(
        name: impl Into<String>,
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
        hold: impl Into<Space>,
    ) -> Result<Self, CapacityError> {
        Self::new(name, Kind::Ship, weight, dimensions, Capacity::beam(max_weight, hold)?)
    }

    pub fn fish_boat(weight: f64, dimensions: Dimensions) -> Result<Self, CapacityError> {
        let catch = Capacity::Stowage {
            max_weight: CATCH_WEIGHT,
            space: Space::Box(FISH_HOLD),
        };
        Self::new("Fish boat", Kind::FishBoat, weight, dimensions, catch)
    }

    /// Cargo travels in containers of `container` size below deck.
    pub fn super_tanker(
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
        container: impl Into<Space>,
    ) -> Result<Self, CapacityError> {
        let capacity = Capacity::beam(max_weight, container)?;
        Self::new("Super tanker", Kind::SuperTanker, weight, dimensions, capacity)
    }

    pub fn aircraft_carrier(
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
        hangar: Dimensions,
    ) -> Result<Self, CapacityError> {
        let capacity = Capacity::deck_or_hold(max_weight, hangar)?;
        Self::new("Aircraft carrier", Kind::AircraftCarrier, weight, dimensions, capacity)
    }

    /// `max_weight` and `space` are totals over all `wagons`.
    pub fn train(
        name: impl Into<String>,
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
        space: impl Into<Space>,
        wagons: u32,
    ) -> Result<Self, CapacityError> {
        let capacity = Capacity::compartments(max_weight, space, wagons)?;
        Self::new(name, Kind::Train, weight, dimensions, capacity)
    }

    /// Tank wagons take up to `max_weight` of liquid in `tanks`, never vehicles.
    pub fn oil_train(
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
        tanks: impl Into<Space>,
    ) -> Result<Self, CapacityError> {
        let capacity = Capacity::stowage(max_weight, tanks)?;
        Self::new("Oil train", Kind::OilTrain, weight, dimensions, capacity)
    }

    pub fn passenger_train(
        weight: f64,
        dimensions: Dimensions,
        max_weight: f64,
        space: impl Into<Space>,
        cars: u32,
    ) -> Result<Self, CapacityError> {
        let capacity = Capacity::compartments(max_weight, space, cars)?;
        Self::new("Passenger train", Kind::PassengerTrain, weight, dimensions, capacity)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn capacity(&self) -> &Capacity {
        &self.capacity
    }
}

impl Cargo for Carrier {
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

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}t, {})", self.name, self.weight, self.dimensions)
    }
}
