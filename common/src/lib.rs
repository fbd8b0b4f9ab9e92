//! # Haulr Common
//!
//! Value objects shared by every crate in the workspace.
//!
//! * [`measure`]: dimensions, carrying space and the fit policy.
//! * [`vehicle`]: carriers, parcels and the capacity each carrier offers.
//! * [`error`]: construction and parsing errors.
//! * [`config`]: runtime options chosen on the command line.

pub mod config;
pub mod error;
pub mod measure;
pub mod vehicle;
