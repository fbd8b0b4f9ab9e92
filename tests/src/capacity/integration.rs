#![cfg(test)]
use std::str::FromStr;

use haulr_common::error::SpecError;
use haulr_common::measure::FitPolicy;
use haulr_common::vehicle::spec::VehicleSpec;
use haulr_common::vehicle::{Carrier, Kind, Load};
use haulr_core::{Refusal, assess, can_carry, fleet};

fn load(spec: &str) -> Load {
    let spec = VehicleSpec::from_str(spec).expect("valid spec");
    fleet::resolve(spec).expect("valid vehicle")
}

fn carrier(spec: &str) -> Carrier {
    match load(spec) {
        Load::Carrier(carrier) => carrier,
        Load::Parcel(parcel) => panic!("expected a carrier, got {parcel}"),
    }
}

/*************************************************************
                  Default fleet scenarios
**************************************************************/

#[test]
fn tardis_carries_the_largest_vehicle() {
    let tardis = carrier("tardis");
    assert!(can_carry(&tardis, &load("aircraft-carrier"), FitPolicy::Strict));
    assert!(can_carry(&tardis, &load("tanker"), FitPolicy::Strict));
}

#[test]
fn vehicles_without_storage_carry_nothing() {
    let crate_ = load("parcel");
    // Small enough for any basket or trunk, still refused
    let pebble = load("parcel:0.001:0.01x0.01x0.01");
    for kind in ["bicycle", "bolid", "fishboat", "oiltrain"] {
        let vehicle = carrier(kind);
        for cargo in [&crate_, &pebble] {
            assert_eq!(
                assess(&vehicle, cargo, FitPolicy::Inclusive).refusal(),
                Some(Refusal::NoCapacity),
                "{kind}"
            );
        }
        assert!(vehicle.capacity().max_weight().is_some(), "{kind}");
    }
}

#[test]
fn car_takes_a_bicycle_on_its_roof() {
    let car = carrier("car");
    assert!(can_carry(&car, &load("bicycle"), FitPolicy::Inclusive));
    // Too heavy for a roof rack
    assert!(!can_carry(&car, &load("bolid"), FitPolicy::Inclusive));
}

#[test]
fn wagon_trailer_takes_cars() {
    let wagon = carrier("wagon");
    assert!(can_carry(&wagon, &load("car"), FitPolicy::Inclusive));
    assert!(can_carry(&wagon, &load("bolid"), FitPolicy::Inclusive));
    assert!(!can_carry(&wagon, &load("fishboat"), FitPolicy::Inclusive));
}

#[test]
fn tanker_containers_take_cars_but_not_wagons() {
    let tanker = carrier("tanker");
    assert!(can_carry(&tanker, &load("car"), FitPolicy::Inclusive));
    assert!(matches!(
        assess(&tanker, &load("wagon"), FitPolicy::Inclusive).refusal(),
        Some(Refusal::Oversize { .. })
    ));
}

#[test]
fn aircraft_carrier_uses_deck_or_hangar() {
    let carrier = carrier("aircraft-carrier");
    assert!(can_carry(&carrier, &load("wagon"), FitPolicy::Inclusive));
    // Longer than the hangar, fine on deck
    assert!(can_carry(&carrier, &load("train"), FitPolicy::Inclusive));
    assert!(can_carry(&carrier, &load("ship"), FitPolicy::Inclusive));
    // 60000t is over the limit
    assert!(!can_carry(&carrier, &load("tanker"), FitPolicy::Inclusive));
}

#[test]
fn trains_split_capacity_across_wagons() {
    let freight = carrier("train");
    // One wagon is 14x2.9x3 and takes 60t
    assert!(can_carry(&freight, &load("bolid"), FitPolicy::Inclusive));
    assert!(!can_carry(&freight, &load("wagon"), FitPolicy::Inclusive));

    let passenger = carrier("passenger-train");
    assert!(can_carry(&passenger, &load("bicycle"), FitPolicy::Inclusive));
    assert!(matches!(
        assess(&passenger, &load("fishboat"), FitPolicy::Inclusive).refusal(),
        Some(Refusal::Overweight { .. })
    ));
}

/*************************************************************
                  Custom specs and fit policy
**************************************************************/

#[test]
fn snug_fit_depends_on_policy() {
    // Trailer exactly the size of the default car
    let wagon = carrier("wagon:9:12x2.5x3.8:20:4.6x1.8x1.45");
    let car = load("car");

    assert!(can_carry(&wagon, &car, FitPolicy::Inclusive));
    assert_eq!(
        assess(&wagon, &car, FitPolicy::Strict).refusal(),
        Some(Refusal::Oversize {
            space: "4.6x1.8x1.45".parse().unwrap()
        })
    );
}

#[test]
fn ship_refuses_cargo_wider_than_hull() {
    // Hold wider than the hull itself
    let ship = carrier("ship:500:60x10x5:800:50x12x4");
    assert!(can_carry(&ship, &load("parcel:10:10x9x3"), FitPolicy::Inclusive));
    assert_eq!(
        assess(&ship, &load("parcel:10:10x11x3"), FitPolicy::Inclusive).refusal(),
        Some(Refusal::TooWide {
            width: 11.0,
            limit: 10.0
        })
    );
}

#[test]
fn volume_limited_train() {
    // 4 wagons of 10 m3 and 5t each
    let train = carrier("train:100:50x3x4:20:40:4");
    assert!(can_carry(&train, &load("parcel:5:10x1x1"), FitPolicy::Inclusive));
    assert!(!can_carry(&train, &load("parcel:5:10x1x1"), FitPolicy::Strict));
    assert!(!can_carry(&train, &load("parcel:5.1:1x1x1"), FitPolicy::Strict));
}

#[test]
fn worked_example() {
    let carrier = carrier("wagon:1:3x3x3:1:2x2x2");
    assert!(can_carry(&carrier, &load("parcel:0.5:1x1x1"), FitPolicy::Inclusive));
    assert!(!can_carry(&carrier, &load("parcel:1.5:1x1x1"), FitPolicy::Inclusive));
}

#[test]
fn presets_match_fleet() {
    for kind in Kind::ALL {
        assert_eq!(load(kind.keyword()), fleet::by_kind(kind).unwrap());
    }
}

#[test]
fn invalid_specs_are_reported() {
    assert!(matches!(
        VehicleSpec::from_str("wagon:0:12x2.5x3.8:20:9x2.4x2.6"),
        Err(SpecError::Invalid(_))
    ));
    assert!(matches!(
        VehicleSpec::from_str("wagon:9:12x2.5x3.8:20"),
        Err(SpecError::FieldCount { .. })
    ));
}
