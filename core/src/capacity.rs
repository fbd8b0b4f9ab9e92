//! The **Capacity Model**.
//!
//! Decides whether a [`Carrier`] can take a piece of [`Cargo`] aboard. Every
//! carrier's [`Capacity`] variant selects one rule from the table in
//! [`assess`]; there is no per-vehicle override chain.
//!
//! Weight is always compared inclusively (`cargo <= limit`). Dimensional checks
//! follow the [`FitPolicy`] passed by the caller.

use std::fmt;

use haulr_common::measure::{Dimensions, FitPolicy, Space};
use haulr_common::vehicle::{Capacity, Cargo, Carrier};
use tracing::debug;

/// Why a carrier refused its cargo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refusal {
    /// The carrier cannot carry anything.
    NoCapacity,
    /// Heavier than the limit (of one compartment, for compartment carriers).
    Overweight { weight: f64, limit: f64 },
    /// Does not fit the carrying space (of one compartment, for compartment carriers).
    Oversize { space: Space },
    /// Wider than the carrier's own beam.
    TooWide { width: f64, limit: f64 },
    /// Footprint larger than the roof it would ride on.
    Overhang { roof: Dimensions },
    /// Fits neither on deck nor in the hold.
    NoRoom,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::NoCapacity => f.write_str("carrier has no cargo capacity"),
            Refusal::Overweight { weight, limit } => {
                write!(f, "too heavy: {weight}t exceeds {limit}t")
            }
            Refusal::Oversize { space } => write!(f, "does not fit into {space}"),
            Refusal::TooWide { width, limit } => {
                write!(f, "too wide: {width}m exceeds the {limit}m beam")
            }
            Refusal::Overhang { roof } => write!(f, "overhangs the {roof} roof"),
            Refusal::NoRoom => f.write_str("fits neither on deck nor in the hold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Assessment {
    Accepted,
    Refused(Refusal),
}

impl Assessment {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Assessment::Accepted)
    }

    pub fn refusal(&self) -> Option<Refusal> {
        match self {
            Assessment::Accepted => None,
            Assessment::Refused(refusal) => Some(*refusal),
        }
    }
}

impl From<Result<(), Refusal>> for Assessment {
    fn from(result: Result<(), Refusal>) -> Self {
        match result {
            Ok(()) => Assessment::Accepted,
            Err(refusal) => Assessment::Refused(refusal),
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assessment::Accepted => f.write_str("can carry"),
            Assessment::Refused(refusal) => write!(f, "cannot carry: {refusal}"),
        }
    }
}

/// Returns `true` if a box of `candidate` dimensions fits into `limit`.
///
/// Box limits are compared axis by axis without reordering; volume limits
/// compare the candidate's volume.
pub fn fits(limit: &Space, candidate: &Dimensions, policy: FitPolicy) -> bool {
    limit.fits(candidate, policy)
}

/// Returns `true` if `carrier` can take `cargo` aboard.
pub fn can_carry<C>(carrier: &Carrier, cargo: &C, policy: FitPolicy) -> bool
where
    C: Cargo + ?Sized,
{
    assess(carrier, cargo, policy).is_accepted()
}

/// Decides whether `carrier` can take `cargo` aboard and, if not, why.
///
/// | capacity       | rule                                                       |
/// |----------------|------------------------------------------------------------|
/// | `None`         | never                                                      |
/// | `Stowage`      | never                                                      |
/// | `Unbounded`    | always                                                     |
/// | `Hold`         | weight, then fit into the space                            |
/// | `Roof`         | weight, then footprint fits the carrier's own footprint    |
/// | `Beam`         | `Hold`, then no wider than the carrier                     |
/// | `Compartments` | `Hold` against one of N equal shares of weight and space   |
/// | `DeckOrHold`   | weight, then deck footprint or hold fit                    |
pub fn assess<C>(carrier: &Carrier, cargo: &C, policy: FitPolicy) -> Assessment
where
    C: Cargo + ?Sized,
{
    let verdict: Result<(), Refusal> = match *carrier.capacity() {
        Capacity::None | Capacity::Stowage { .. } => Err(Refusal::NoCapacity),
        Capacity::Unbounded => Ok(()),
        Capacity::Hold { max_weight, space } => hold(max_weight, &space, cargo, policy),
        Capacity::Roof { max_weight } => roof(carrier.dimensions(), max_weight, cargo, policy),
        Capacity::Beam { max_weight, space } => hold(max_weight, &space, cargo, policy)
            .and_then(|()| beam(carrier.dimensions(), cargo, policy)),
        Capacity::Compartments {
            max_weight,
            space,
            count,
        } => hold(
            max_weight / f64::from(count),
            &space.divide(count),
            cargo,
            policy,
        ),
        Capacity::DeckOrHold {
            max_weight,
            hold: hangar,
        } => deck_or_hold(carrier.dimensions(), max_weight, &hangar, cargo, policy),
    };

    let assessment = Assessment::from(verdict);
    debug!(
        target: "haulr::capacity",
        carrier = carrier.name(),
        cargo = cargo.name(),
        %policy,
        %assessment,
        "cargo assessed"
    );
    assessment
}

fn weight<C: Cargo + ?Sized>(limit: f64, cargo: &C) -> Result<(), Refusal> {
    let weight: f64 = cargo.weight();
    if weight <= limit {
        Ok(())
    } else {
        Err(Refusal::Overweight { weight, limit })
    }
}

fn hold<C: Cargo + ?Sized>(
    max_weight: f64,
    space: &Space,
    cargo: &C,
    policy: FitPolicy,
) -> Result<(), Refusal> {
    weight(max_weight, cargo)?;
    if fits(space, cargo.dimensions(), policy) {
        Ok(())
    } else {
        Err(Refusal::Oversize { space: *space })
    }
}

fn roof<C: Cargo + ?Sized>(
    own: &Dimensions,
    max_weight: f64,
    cargo: &C,
    policy: FitPolicy,
) -> Result<(), Refusal> {
    weight(max_weight, cargo)?;
    if own.footprint_holds(cargo.dimensions(), policy) {
        Ok(())
    } else {
        Err(Refusal::Overhang { roof: *own })
    }
}

fn beam<C: Cargo + ?Sized>(own: &Dimensions, cargo: &C, policy: FitPolicy) -> Result<(), Refusal> {
    let width: f64 = cargo.dimensions().width();
    if policy.admits(width, own.width()) {
        Ok(())
    } else {
        Err(Refusal::TooWide {
            width,
            limit: own.width(),
        })
    }
}

fn deck_or_hold<C: Cargo + ?Sized>(
    own: &Dimensions,
    max_weight: f64,
    hold: &Dimensions,
    cargo: &C,
    policy: FitPolicy,
) -> Result<(), Refusal> {
    weight(max_weight, cargo)?;
    let on_deck: bool = own.footprint_holds(cargo.dimensions(), policy);
    let in_hold: bool = hold.contains(cargo.dimensions(), policy);
    if on_deck || in_hold {
        Ok(())
    } else {
        Err(Refusal::NoRoom)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
