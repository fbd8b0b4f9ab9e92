use haulr_common::config::Config;
use haulr_common::vehicle::spec::VehicleSpec;
use haulr_common::vehicle::{Cargo, Load};
use haulr_core::{Assessment, assess, fleet};
use tracing::debug;

use crate::terminal::{format, print};

pub fn check(carrier: VehicleSpec, cargo: VehicleSpec, cfg: &Config) -> anyhow::Result<()> {
    let carrier: Load = fleet::resolve(carrier)?;
    let cargo: Load = fleet::resolve(cargo)?;

    let Some(vehicle) = carrier.as_carrier() else {
        anyhow::bail!("'{}' is a parcel and cannot carry anything", carrier.name());
    };

    debug!(carrier = %carrier, cargo = %cargo, policy = %cfg.policy, "checking");
    let assessment: Assessment = assess(vehicle, &cargo, cfg.policy);

    if cfg.quiet < 2 {
        for (idx, load) in [&carrier, &cargo].into_iter().enumerate() {
            print::tree_head(idx, load.name());
            print::as_tree_one_level(format::load_to_details(load));
        }
        print::fat_separator();
    }

    let detail: String = match assessment {
        Assessment::Accepted => format!("fits ({} fit)", cfg.policy),
        Assessment::Refused(refusal) => refusal.to_string(),
    };
    print::verdict(carrier.name(), cargo.name(), assessment.is_accepted(), &detail);

    Ok(())
}
