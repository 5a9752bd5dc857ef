use anyhow::{Result, ensure};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::SPolygon;
use crate::util::assertions;

/// How the permitted floor area of a lot is expressed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FsrRule {
    /// Floor space ratio: permitted floor area = lot area × ratio
    Ratio(f64),
    /// Absolute permitted floor area in m²
    TargetArea(f64),
}

/// Target area of the FSR envelope: the permitted floor area, capped at the area of the setback envelope.
pub fn fsr_target_area(lot_area: f64, rule: FsrRule, setback_area: f64) -> Result<f64> {
    let permitted = match rule {
        FsrRule::Ratio(ratio) => lot_area * ratio,
        FsrRule::TargetArea(area) => area,
    };
    ensure!(
        permitted.is_finite() && permitted > 0.0,
        "permitted floor area must be positive, got {permitted} ({rule:?})"
    );
    Ok(permitted.min(setback_area))
}

/// Linear scale factor that turns an area of `current` into `target`
pub fn area_scale_factor(current: f64, target: f64) -> Result<f64> {
    ensure!(
        current.is_finite() && current > 0.0,
        "polygon area must be positive, got {current}"
    );
    ensure!(
        target.is_finite() && target > 0.0,
        "target area must be positive, got {target}"
    );
    Ok((target / current).sqrt())
}

/// Uniformly scales `polygon` about its centroid so its area equals `target_area`.
/// The result is similar to the input (same angles, same vertex order).
pub fn scale_to_area(polygon: &SPolygon, target_area: f64) -> Result<SPolygon> {
    let factor = area_scale_factor(polygon.area(), target_area)?;
    if factor > 1.0 {
        debug!("[FSR] target area {target_area:.2} m² exceeds polygon area, scaling up by {factor:.4}");
    }
    let t = Transformation::scaling_about(factor, polygon.centroid());
    let scaled = polygon.transform_clone(&t);
    debug_assert!(assertions::area_matches(&scaled, target_area));

    Ok(scaled)
}
