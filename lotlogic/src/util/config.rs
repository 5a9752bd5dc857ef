use serde::{Deserialize, Serialize};

use crate::projection::ProjectionKind;

///Configuration of the [`SitePlanner`](crate::planning::SitePlanner)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    ///Bounds of the containment correction applied to house footprints
    #[serde(default)]
    pub shrink: ShrinkConfig,
    ///Determinant below which two offset edge-lines are considered parallel
    #[serde(default = "default_parallel_tolerance")]
    pub parallel_tolerance: f64,
    ///Planar projection used for all metric computations
    #[serde(default)]
    pub projection: ProjectionKind,
    ///How per-side length values are assigned to the parcel edges
    #[serde(default)]
    pub label_mode: LabelMode,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            shrink: ShrinkConfig::default(),
            parallel_tolerance: default_parallel_tolerance(),
            projection: ProjectionKind::default(),
            label_mode: LabelMode::default(),
        }
    }
}

fn default_parallel_tolerance() -> f64 {
    1e-9
}

///Bounded iterative shrinking of a footprint that does not fit its envelope
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ShrinkConfig {
    ///Maximum number of shrink steps before giving up
    pub max_attempts: usize,
    ///Linear scale factor applied per step, in (0, 1)
    pub factor: f64,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            max_attempts: 80,
            factor: 0.98,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Pair values with edges by rank of magnitude
    #[default]
    RankMatched,
    /// `s1` to edge 0, `s2` to edge 1, ...
    Identity,
}
