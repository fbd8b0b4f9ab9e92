//! # Haulr Core
//!
//! * [`capacity`]: the containment rules deciding whether a carrier takes a cargo.
//! * [`fleet`]: a default instance of every vehicle kind.
//! * [`matrix`]: every carrier assessed against every other load.

pub mod capacity;
pub mod fleet;
pub mod matrix;

pub use capacity::{Assessment, Refusal, assess, can_carry, fits};
