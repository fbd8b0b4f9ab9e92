//! # Measures
//!
//! Physical quantities a carrier is checked against. Lengths are metres,
//! volumes cubic metres, weights tonnes.

mod dimensions;
mod policy;
mod space;

pub use dimensions::Dimensions;
pub use policy::FitPolicy;
pub use space::Space;
