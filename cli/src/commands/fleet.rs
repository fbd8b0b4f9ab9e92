use colored::*;
use haulr_common::config::Config;
use haulr_common::vehicle::{Cargo, Load};
use haulr_core::fleet;

use crate::terminal::{colors, format, print};

pub fn fleet(cfg: &Config) -> anyhow::Result<()> {
    let loads: Vec<Load> = fleet::defaults()?;

    for (idx, load) in loads.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(load.name()),
            _ => {
                print::tree_head(idx, load.name());
                print::as_tree_one_level(format::load_to_details(load));
            }
        }
    }

    if cfg.quiet == 0 {
        let count: ColoredString = format!("{} vehicles", loads.len()).bold().green();
        print::fat_separator();
        print::centerln(&format!("{}", format!("Default fleet: {count}").color(colors::TEXT_DEFAULT)));
    }

    Ok(())
}
