//! # Default Fleet
//!
//! One ready-made instance per [`Kind`], used whenever a spec string names a
//! kind without describing it.

use haulr_common::error::CapacityError;
use haulr_common::measure::{Dimensions, Space};
use haulr_common::vehicle::spec::VehicleSpec;
use haulr_common::vehicle::{Carrier, Kind, Load, Parcel};

/// Builds the default instance of `kind`.
pub fn by_kind(kind: Kind) -> Result<Load, CapacityError> {
    let load: Load = match kind {
        Kind::Bicycle => Carrier::bicycle(0.015, Dimensions::new(1.8, 0.6, 1.1)?)?.into(),
        Kind::Car => Carrier::car("Sedan", 1.4, Dimensions::new(4.6, 1.8, 1.45)?, 0.1)?.into(),
        Kind::Bolid => Carrier::bolid(0.75, Dimensions::new(5.6, 2.0, 0.95)?)?.into(),
        Kind::Wagon => Carrier::wagon(
            9.0,
            Dimensions::new(12.0, 2.5, 3.8)?,
            20.0,
            Dimensions::new(9.0, 2.4, 2.6)?,
        )?
        .into(),
        Kind::Tardis => Carrier::tardis().into(),
        Kind::Ship => Carrier::ship(
            "Cargo ship",
            8_000.0,
            Dimensions::new(150.0, 25.0, 20.0)?,
            12_000.0,
            Dimensions::new(120.0, 22.0, 12.0)?,
        )?
        .into(),
        Kind::FishBoat => Carrier::fish_boat(12.0, Dimensions::new(14.0, 4.5, 3.0)?)?.into(),
        Kind::SuperTanker => Carrier::super_tanker(
            60_000.0,
            Dimensions::new(330.0, 58.0, 30.0)?,
            250_000.0,
            // 40 ft container
            Dimensions::new(12.2, 2.44, 2.59)?,
        )?
        .into(),
        Kind::AircraftCarrier => Carrier::aircraft_carrier(
            100_000.0,
            Dimensions::new(333.0, 77.0, 76.0)?,
            20_000.0,
            Dimensions::new(210.0, 33.0, 8.0)?,
        )?
        .into(),
        Kind::Train => Carrier::train(
            "Freight train",
            150.0,
            Dimensions::new(300.0, 3.2, 4.5)?,
            1_200.0,
            Dimensions::new(280.0, 2.9, 3.0)?,
            20,
        )?
        .into(),
        Kind::OilTrain => Carrier::oil_train(
            180.0,
            Dimensions::new(250.0, 3.2, 4.3)?,
            3_000.0,
            Space::volume(3_500.0)?,
        )?
        .into(),
        Kind::PassengerTrain => Carrier::passenger_train(
            320.0,
            Dimensions::new(200.0, 3.4, 4.2)?,
            80.0,
            Space::Box(Dimensions::new(180.0, 2.8, 2.2)?),
            8,
        )?
        .into(),
        Kind::Parcel => Parcel::new("Crate", 0.3, Dimensions::new(1.2, 0.8, 1.0)?)?.into(),
    };
    Ok(load)
}

/// Every default instance, in [`Kind::ALL`] order.
pub fn defaults() -> Result<Vec<Load>, CapacityError> {
    Kind::ALL.into_iter().map(by_kind).collect()
}

/// Turns a parsed spec into a load, filling presets from the default fleet.
pub fn resolve(spec: VehicleSpec) -> Result<Load, CapacityError> {
    match spec {
        VehicleSpec::Preset(kind) => by_kind(kind),
        VehicleSpec::Custom(load) => Ok(load),
    }
}
