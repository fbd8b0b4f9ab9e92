use colored::*;
use haulr_common::vehicle::{Cargo, Load};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn load_to_details(load: &Load) -> Vec<Detail> {
    let kind: String = match load {
        Load::Carrier(carrier) => carrier.kind().to_string(),
        Load::Parcel(_) => String::from("Parcel"),
    };

    let mut details: Vec<Detail> = vec![
        (String::from("Kind"), kind.normal()),
        (
            String::from("Weight"),
            format!("{}t", load.weight()).color(colors::WEIGHT),
        ),
        (
            String::from("Size"),
            load.dimensions().to_string().color(colors::DIMENSIONS),
        ),
        (
            String::from("Volume"),
            format!("{:.2}m3", load.dimensions().volume()).color(colors::DIMENSIONS),
        ),
    ];

    if let Some(carrier) = load.as_carrier() {
        details.push((
            String::from("Carries"),
            carrier.capacity().to_string().color(colors::TEXT_DEFAULT),
        ));
    }

    details
}
