//! # Vehicles and Cargo
//!
//! A [`Carrier`] is a vehicle with its own weight and dimensions plus a
//! [`Capacity`] describing what it can take aboard. Anything with a weight and
//! dimensions is [`Cargo`]: carriers themselves (a car on a ship) and plain
//! [`Parcel`]s.
//!
//! Vehicle categories are flat. Each [`Kind`] maps to one [`Capacity`] variant
//! instead of a chain of subtypes overriding each other.

mod capacity;
mod carrier;
mod kind;
mod load;
mod parcel;
pub mod spec;

pub use capacity::Capacity;
pub use carrier::Carrier;
pub use kind::Kind;
pub use load::Load;
pub use parcel::Parcel;

use crate::measure::Dimensions;

/// Something that can be loaded onto a carrier.
pub trait Cargo {
    fn name(&self) -> &str;
    /// Weight in tonnes.
    fn weight(&self) -> f64;
    fn dimensions(&self) -> &Dimensions;
}
