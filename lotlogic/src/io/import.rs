use anyhow::{Context, Result, bail, ensure};
use log::warn;

use crate::io::ext_repr::{ExtLineString, ExtPolygon, ExtSite};
use crate::planning::Site;
use crate::planning::orientation::Rotation;
use crate::projection::{GeoRing, LngLat};

/// Converts the first ring of a GeoJSON polygon into a [`GeoRing`]
pub fn import_polygon(ext_polygon: &ExtPolygon) -> Result<GeoRing> {
    let Some(outer) = ext_polygon.coordinates.first() else {
        bail!("polygon has no rings");
    };
    if ext_polygon.coordinates.len() > 1 {
        warn!(
            "polygon has {} rings, only the outer one is used",
            ext_polygon.coordinates.len()
        );
    }
    GeoRing::try_new(outer.iter().map(|c| LngLat::from(*c)).collect())
}

/// A frontage line must consist of exactly 2 positions
pub fn import_frontage(ext_line: &ExtLineString) -> Result<[LngLat; 2]> {
    match ext_line.coordinates.as_slice() {
        [a, b] => {
            let (a, b) = (LngLat::from(*a), LngLat::from(*b));
            ensure!(
                a.is_valid() && b.is_valid(),
                "frontage contains invalid coordinates: {a:?}, {b:?}"
            );
            Ok([a, b])
        }
        coords => bail!(
            "frontage must contain exactly 2 positions, got {}",
            coords.len()
        ),
    }
}

pub fn import_site(ext_site: &ExtSite) -> Result<Site> {
    let parcel = import_polygon(&ext_site.parcel)
        .with_context(|| format!("invalid parcel for site {}", ext_site.id))?;
    let frontage = ext_site
        .frontage
        .as_ref()
        .map(import_frontage)
        .transpose()
        .with_context(|| format!("invalid frontage for site {}", ext_site.id))?;
    let Some(rotation) = Rotation::from_degrees(ext_site.rotation) else {
        bail!(
            "rotation of site {} must be 0 or 180 degrees, got {}",
            ext_site.id,
            ext_site.rotation
        );
    };

    Ok(Site {
        parcel,
        frontage,
        setbacks: ext_site.setbacks,
        fsr: ext_site.fsr,
        design: ext_site.design.clone(),
        side_values: ext_site.side_values,
        rotation,
    })
}
