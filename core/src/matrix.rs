//! # Load Matrix
//!
//! Assesses every carrier in a set of loads against every other load.
//! Rows are independent, so they are evaluated in parallel.

use haulr_common::measure::FitPolicy;
use haulr_common::vehicle::{Carrier, Load};
use rayon::prelude::*;
use tracing::debug;

use crate::capacity::{Assessment, assess};

pub struct LoadMatrix {
    loads: Vec<Load>,
    /// `cells[i][j]` is `loads[i]` carrying `loads[j]`.
    ///
    /// `None` on the diagonal and on rows whose load is not a carrier.
    cells: Vec<Vec<Option<Assessment>>>,
}

impl LoadMatrix {
    pub fn compute(loads: Vec<Load>, policy: FitPolicy) -> Self {
        let cells: Vec<Vec<Option<Assessment>>> = loads
            .par_iter()
            .enumerate()
            .map(|(i, load)| match load.as_carrier() {
                Some(carrier) => row(i, carrier, &loads, policy),
                None => vec![None; loads.len()],
            })
            .collect();

        let matrix = Self { loads, cells };
        debug!(
            loads = matrix.loads.len(),
            accepted = matrix.accepted_count(),
            "load matrix computed"
        );
        matrix
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Assessment of `loads[carrier]` carrying `loads[cargo]`.
    pub fn get(&self, carrier: usize, cargo: usize) -> Option<Assessment> {
        self.cells.get(carrier)?.get(cargo).copied().flatten()
    }

    /// Every `(carrier, cargo)` pair that was accepted, in row order.
    pub fn accepted(&self) -> impl Iterator<Item = (&Load, &Load)> {
        self.cells.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_some_and(|a| a.is_accepted()))
                .map(move |(j, _)| (&self.loads[i], &self.loads[j]))
        })
    }

    /// Number of pairs that were assessed at all.
    pub fn assessed_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn accepted_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some_and(|a| a.is_accepted()))
            .count()
    }
}

fn row(index: usize, carrier: &Carrier, loads: &[Load], policy: FitPolicy) -> Vec<Option<Assessment>> {
    loads
        .iter()
        .enumerate()
        .map(|(j, cargo)| (j != index).then(|| assess(carrier, cargo, policy)))
        .collect()
}
