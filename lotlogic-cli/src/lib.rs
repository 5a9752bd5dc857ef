use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;

use lotlogic::io::ext_repr::ExtSite;
use lotlogic::io::import::import_site;
use lotlogic::planning::{SitePlan, SitePlanner};

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// A site together with the plan derived from it
#[derive(Clone, Debug)]
pub struct PlannedSite {
    pub ext_site: ExtSite,
    pub plan: SitePlan,
}

/// Imports and plans every site in parallel.
/// The results are in the same order as `ext_sites`, a failing site does not affect the others.
pub fn plan_all(ext_sites: Vec<ExtSite>, planner: &SitePlanner) -> Vec<Result<PlannedSite>> {
    ext_sites
        .into_par_iter()
        .map(|ext_site| {
            let site = import_site(&ext_site)?;
            let plan = planner
                .plan(&site)
                .with_context(|| format!("could not plan site {}", ext_site.id))?;
            info!(
                "[PLAN] site {} planned in {:.3}s since start",
                ext_site.id,
                EPOCH.elapsed().as_secs_f64()
            );
            Ok(PlannedSite { ext_site, plan })
        })
        .collect()
}
