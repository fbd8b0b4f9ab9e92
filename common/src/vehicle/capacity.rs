use std::fmt;

use crate::error::{CapacityError, Field, Reason, ensure_positive};
use crate::measure::{Dimensions, Space};

/// What a carrier can take aboard and the rule deciding it.
///
/// Each variant holds only the limits its rule reads. Weights are tonnes.
/// Values written as literals are checked by [`Capacity::validate`] when a
/// carrier is built from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capacity {
    /// Carries nothing.
    None,
    /// Carries anything.
    Unbounded,
    /// Has room for its own goods (baskets, a trunk, nets, tanks) but never
    /// takes cargo aboard.
    Stowage { max_weight: f64, space: Space },
    /// Cargo must not exceed `max_weight` and must fit `space`.
    Hold { max_weight: f64, space: Space },
    /// Cargo rides on top; its footprint must fit the carrier's own footprint.
    Roof { max_weight: f64 },
    /// As [`Capacity::Hold`], and cargo may not be wider than the carrier itself.
    Beam { max_weight: f64, space: Space },
    /// The weight and space are shared by `count` equal compartments and the
    /// cargo has to fit a single one.
    Compartments {
        max_weight: f64,
        space: Space,
        count: u32,
    },
    /// Cargo goes on deck (footprint fits the carrier's own footprint) or into
    /// the `hold`.
    DeckOrHold { max_weight: f64, hold: Dimensions },
}

impl Capacity {
    pub fn stowage(max_weight: f64, space: impl Into<Space>) -> Result<Self, CapacityError> {
        Capacity::Stowage {
            max_weight,
            space: space.into(),
        }
        .validated()
    }

    pub fn hold(max_weight: f64, space: impl Into<Space>) -> Result<Self, CapacityError> {
        Capacity::Hold {
            max_weight,
            space: space.into(),
        }
        .validated()
    }

    pub fn roof(max_weight: f64) -> Result<Self, CapacityError> {
        Capacity::Roof { max_weight }.validated()
    }

    pub fn beam(max_weight: f64, space: impl Into<Space>) -> Result<Self, CapacityError> {
        Capacity::Beam {
            max_weight,
            space: space.into(),
        }
        .validated()
    }

    pub fn compartments(
        max_weight: f64,
        space: impl Into<Space>,
        count: u32,
    ) -> Result<Self, CapacityError> {
        Capacity::Compartments {
            max_weight,
            space: space.into(),
            count,
        }
        .validated()
    }

    pub fn deck_or_hold(max_weight: f64, hold: Dimensions) -> Result<Self, CapacityError> {
        Capacity::DeckOrHold { max_weight, hold }.validated()
    }

    /// Checks every limit: weights and volumes strictly positive and finite,
    /// at least one compartment.
    pub fn validate(&self) -> Result<(), CapacityError> {
        if let Capacity::Compartments { count: 0, .. } = self {
            return Err(CapacityError::InvalidParameter {
                field: Field::Compartments,
                reason: Reason::NotPositive,
                value: 0.0,
            });
        }
        if let Some(max_weight) = self.max_weight() {
            ensure_positive(Field::MaxWeight, max_weight)?;
        }
        match self.space() {
            Some(space) => space.validate(),
            None => Ok(()),
        }
    }

    fn validated(self) -> Result<Self, CapacityError> {
        self.validate()?;
        Ok(self)
    }

    /// Total weight limit, if the rule has one.
    pub fn max_weight(&self) -> Option<f64> {
        match self {
            Capacity::None | Capacity::Unbounded => None,
            Capacity::Stowage { max_weight, .. }
            | Capacity::Hold { max_weight, .. }
            | Capacity::Roof { max_weight }
            | Capacity::Beam { max_weight, .. }
            | Capacity::Compartments { max_weight, .. }
            | Capacity::DeckOrHold { max_weight, .. } => Some(*max_weight),
        }
    }

    /// Total carrying space, if the rule has one.
    pub fn space(&self) -> Option<Space> {
        match self {
            Capacity::Stowage { space, .. }
            | Capacity::Hold { space, .. }
            | Capacity::Beam { space, .. }
            | Capacity::Compartments { space, .. } => Some(*space),
            Capacity::DeckOrHold { hold, .. } => Some(Space::Box(*hold)),
            Capacity::None | Capacity::Unbounded | Capacity::Roof { .. } => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Capacity::None => "none",
            Capacity::Unbounded => "unbounded",
            Capacity::Stowage { .. } => "own stowage only",
            Capacity::Hold { .. } => "hold",
            Capacity::Roof { .. } => "roof",
            Capacity::Beam { .. } => "hold within beam",
            Capacity::Compartments { .. } => "compartments",
            Capacity::DeckOrHold { .. } => "deck or hold",
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::None | Capacity::Unbounded => f.write_str(self.label()),
            Capacity::Roof { max_weight } => write!(f, "roof, {max_weight}t"),
            Capacity::Stowage { max_weight, space }
            | Capacity::Hold { max_weight, space }
            | Capacity::Beam { max_weight, space } => {
                write!(f, "{}, {max_weight}t in {space}", self.label())
            }
            Capacity::Compartments {
                max_weight,
                space,
                count,
            } => write!(f, "{count} compartments, {max_weight}t in {space}"),
            Capacity::DeckOrHold { max_weight, hold } => {
                write!(f, "deck or hold, {max_weight}t, hold {hold}")
            }
        }
    }
}
