use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// Pedal driven, carries things in baskets only.
    Bicycle,
    /// Carries other vehicles on its roof.
    Car,
    /// Racing car, no trunk.
    Bolid,
    /// Carries cargo in a trailer.
    Wagon,
    /// Bigger on the inside. Carries anything.
    Tardis,
    /// Cargo cannot be wider than the hull.
    Ship,
    FishBoat,
    /// Carries cargo in containers below deck.
    SuperTanker,
    /// Carries vehicles on deck or in the hangar.
    AircraftCarrier,
    /// Carries cargo split across equal wagons.
    Train,
    /// Cylindrical tank wagons, liquids only.
    OilTrain,
    PassengerTrain,
    /// Plain cargo that is not a vehicle.
    Parcel,
}

impl Kind {
    pub const ALL: [Kind; 13] = [
        Kind::Bicycle,
        Kind::Car,
        Kind::Bolid,
        Kind::Wagon,
        Kind::Tardis,
        Kind::Ship,
        Kind::FishBoat,
        Kind::SuperTanker,
        Kind::AircraftCarrier,
        Kind::Train,
        Kind::OilTrain,
        Kind::PassengerTrain,
        Kind::Parcel,
    ];

    /// Keyword used in spec strings.
    pub fn keyword(self) -> &'static str {
        match self {
            Kind::Bicycle => "bicycle",
            Kind::Car => "car",
            Kind::Bolid => "bolid",
            Kind::Wagon => "wagon",
            Kind::Tardis => "tardis",
            Kind::Ship => "ship",
            Kind::FishBoat => "fishboat",
            Kind::SuperTanker => "tanker",
            Kind::AircraftCarrier => "aircraft-carrier",
            Kind::Train => "train",
            Kind::OilTrain => "oiltrain",
            Kind::PassengerTrain => "passenger-train",
            Kind::Parcel => "parcel",
        }
    }

    /// Parses a keyword or one of its aliases (case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword.trim().to_ascii_lowercase().as_str() {
            "bicycle" | "bike" => Kind::Bicycle,
            "car" => Kind::Car,
            "bolid" | "racecar" => Kind::Bolid,
            "wagon" => Kind::Wagon,
            "tardis" => Kind::Tardis,
            "ship" => Kind::Ship,
            "fishboat" | "boat" => Kind::FishBoat,
            "tanker" | "supertanker" => Kind::SuperTanker,
            "aircraft-carrier" | "carrier" => Kind::AircraftCarrier,
            "train" => Kind::Train,
            "oiltrain" => Kind::OilTrain,
            "passenger-train" => Kind::PassengerTrain,
            "parcel" => Kind::Parcel,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Kind::Bicycle => "Bicycle",
            Kind::Car => "Car",
            Kind::Bolid => "Bolid",
            Kind::Wagon => "Wagon",
            Kind::Tardis => "Tardis",
            Kind::Ship => "Ship",
            Kind::FishBoat => "Fish boat",
            Kind::SuperTanker => "Super tanker",
            Kind::AircraftCarrier => "Aircraft carrier",
            Kind::Train => "Train",
            Kind::OilTrain => "Oil train",
            Kind::PassengerTrain => "Passenger train",
            Kind::Parcel => "Parcel",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_keyword(kind.keyword()), Some(kind));
        }
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!(Kind::from_keyword("BIKE"), Some(Kind::Bicycle));
        assert_eq!(Kind::from_keyword(" Carrier "), Some(Kind::AircraftCarrier));
        assert_eq!(Kind::from_keyword("SuperTanker"), Some(Kind::SuperTanker));
        assert_eq!(Kind::from_keyword("submarine"), None);
    }
}
