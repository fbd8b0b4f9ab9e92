//! # Vehicle Spec Strings
//!
//! Command-line description of a carrier or parcel.
//!
//! A spec is a colon separated list starting with the vehicle kind:
//! * **Preset**: just the kind, e.g. `wagon` or `tardis`.
//! * **No cargo**: `bicycle|bolid|fishboat|parcel:W:LxWxH`.
//! * **Roof**: `car:W:LxWxH:MAXW`.
//! * **Hold**: `wagon|ship|tanker|aircraft-carrier|oiltrain:W:LxWxH:MAXW:SPACE`
//!   (the oil train's `SPACE` is its tanks, which never take cargo).
//! * **Compartments**: `train|passenger-train:W:LxWxH:MAXW:SPACE:COUNT`.
//!
//! `SPACE` is `LxWxH` or a bare volume in cubic metres. The aircraft carrier's
//! hangar must be given as `LxWxH`.

use std::str::FromStr;

use crate::error::SpecError;
use crate::measure::{Dimensions, Space};
use crate::vehicle::{Carrier, Kind, Load, Parcel};

/// A parsed spec string.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleSpec {
    /// Only the kind was given; the caller supplies a default instance.
    Preset(Kind),
    /// Fully described load.
    Custom(Load),
}

impl FromStr for VehicleSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').map(str::trim).collect();
        let keyword: &str = fields.first().copied().unwrap_or_default();
        if keyword.is_empty() {
            return Err(SpecError::Empty);
        }

        let kind: Kind =
            Kind::from_keyword(keyword).ok_or_else(|| SpecError::UnknownKind(keyword.to_string()))?;

        if fields.len() == 1 {
            return Ok(VehicleSpec::Preset(kind));
        }

        parse_custom(kind, &fields[1..]).map(VehicleSpec::Custom)
    }
}

fn parse_custom(kind: Kind, fields: &[&str]) -> Result<Load, SpecError> {
    let expected: &'static str = expected_fields(kind);
    let wrong_count = || SpecError::FieldCount {
        kind: kind.keyword(),
        expected,
        got: fields.len() + 1,
    };

    let load: Load = match (kind, fields) {
        (Kind::Bicycle, [weight, dims]) => Carrier::bicycle(number(weight)?, dims.parse()?)?.into(),
        (Kind::Bolid, [weight, dims]) => Carrier::bolid(number(weight)?, dims.parse()?)?.into(),
        (Kind::FishBoat, [weight, dims]) => {
            Carrier::fish_boat(number(weight)?, dims.parse()?)?.into()
        }
        (Kind::Parcel, [weight, dims]) => {
            Parcel::new("Parcel", number(weight)?, dims.parse()?)?.into()
        }
        (Kind::Car, [weight, dims, max_weight]) => {
            Carrier::car("Car", number(weight)?, dims.parse()?, number(max_weight)?)?.into()
        }
        (Kind::Wagon, [weight, dims, max_weight, space]) => Carrier::wagon(
            number(weight)?,
            dims.parse()?,
            number(max_weight)?,
            space.parse::<Space>()?,
        )?
        .into(),
        (Kind::Ship, [weight, dims, max_weight, space]) => Carrier::ship(
            "Ship",
            number(weight)?,
            dims.parse()?,
            number(max_weight)?,
            space.parse::<Space>()?,
        )?
        .into(),
        (Kind::SuperTanker, [weight, dims, max_weight, space]) => Carrier::super_tanker(
            number(weight)?,
            dims.parse()?,
            number(max_weight)?,
            space.parse::<Space>()?,
        )?
        .into(),
        (Kind::OilTrain, [weight, dims, max_weight, tanks]) => Carrier::oil_train(
            number(weight)?,
            dims.parse()?,
            number(max_weight)?,
            tanks.parse::<Space>()?,
        )?
        .into(),
        (Kind::AircraftCarrier, [weight, dims, max_weight, hangar]) => Carrier::aircraft_carrier(
            number(weight)?,
            dims.parse()?,
            number(max_weight)?,
            hangar.parse::<Dimensions>()?,
        )?
        .into(),
        (Kind::Train, [weight, dims, max_weight, space, count]) => Carrier::train(
            "Train",
            number(weight)?,
            dims.parse()?,
            number(max_weight)?,
            space.parse::<Space>()?,
            count_of(count)?,
        )?
        .into(),
        (Kind::PassengerTrain, [weight, dims, max_weight, space, count]) => {
            Carrier::passenger_train(
                number(weight)?,
                dims.parse()?,
                number(max_weight)?,
                space.parse::<Space>()?,
                count_of(count)?,
            )?
            .into()
        }
        _ => return Err(wrong_count()),
    };

    Ok(load)
}

/// Field count (kind included) accepted for each kind, as shown in error messages.
fn expected_fields(kind: Kind) -> &'static str {
    match kind {
        Kind::Tardis => "1",
        Kind::Bicycle | Kind::Bolid | Kind::FishBoat | Kind::Parcel => "1 or 3",
        Kind::Car => "1 or 4",
        Kind::Wagon | Kind::Ship | Kind::SuperTanker | Kind::AircraftCarrier | Kind::OilTrain => {
            "1 or 5"
        }
        Kind::Train | Kind::PassengerTrain => "1 or 6",
    }
}

fn number(s: &str) -> Result<f64, SpecError> {
    s.parse::<f64>().map_err(|_| SpecError::Number(s.to_string()))
}

fn count_of(s: &str) -> Result<u32, SpecError> {
    s.parse::<u32>().map_err(|_| SpecError::Number(s.to_string()))
}
