use serde::{Deserialize, Serialize};

use lotlogic::io::svg::SvgDrawOptions;
use lotlogic::util::PlannerConfig;

/// Configuration of the command line tool
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct CliConfig {
    /// Configuration of the planning engine
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
