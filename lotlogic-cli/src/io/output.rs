use serde::{Deserialize, Serialize};

use lotlogic::io::ext_repr::{ExtSite, ExtSitePlan};
use lotlogic::util::PlannerConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    pub site: ExtSite,
    pub plan: ExtSitePlan,
    pub config: PlannerConfig,
}
