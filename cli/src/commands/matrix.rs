use std::time::Instant;

use colored::*;
use haulr_common::config::Config;
use haulr_common::vehicle::spec::VehicleSpec;
use haulr_common::vehicle::{Cargo, Load};
use haulr_core::fleet;
use haulr_core::matrix::LoadMatrix;
use tracing::debug;

use crate::terminal::{colors, print};

pub fn matrix(vehicles: Vec<VehicleSpec>, cfg: &Config) -> anyhow::Result<()> {
    let loads: Vec<Load> = if vehicles.is_empty() {
        fleet::defaults()?
    } else {
        vehicles
            .into_iter()
            .map(fleet::resolve)
            .collect::<Result<Vec<Load>, _>>()?
    };

    if loads.len() < 2 {
        anyhow::bail!("the matrix needs at least two vehicles, got {}", loads.len());
    }

    if cfg.quiet == 0 {
        print::print_status(format!("Assessing {} vehicles with {} fit", loads.len(), cfg.policy));
    }

    let start_time: Instant = Instant::now();
    let matrix: LoadMatrix = LoadMatrix::compute(loads, cfg.policy);
    debug!(
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "matrix ready"
    );

    if matrix.accepted_count() == 0 {
        print::no_results();
        return Ok(());
    }

    for (carrier, cargo) in matrix.accepted() {
        print::verdict(carrier.name(), cargo.name(), true, "");
    }

    if cfg.quiet == 0 {
        print_summary(&matrix);
    }

    Ok(())
}

fn print_summary(matrix: &LoadMatrix) {
    let accepted: ColoredString = format!("{} pairings", matrix.accepted_count()).bold().green();
    let assessed: ColoredString = format!("{} checks", matrix.assessed_count()).bold().yellow();
    let output: ColoredString =
        format!("Matrix complete: {accepted} out of {assessed}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&format!("{output}"));
}
