use crate::io::ext_repr::{ExtEnvelope, ExtHouse, ExtLabel, ExtPolygon, ExtSitePlan};
use crate::planning::{Envelope, PlacedHouse, SitePlan};
use crate::projection::GeoRing;

pub fn export_ring(ring: &GeoRing) -> ExtPolygon {
    ExtPolygon {
        coordinates: vec![ring.coordinates()],
    }
}

pub fn export_envelope(envelope: &Envelope) -> ExtEnvelope {
    ExtEnvelope {
        geometry: export_ring(&envelope.ring),
        area: envelope.area,
    }
}

pub fn export_house(house: &PlacedHouse) -> ExtHouse {
    ExtHouse {
        design_id: house.design_id.clone(),
        title: house.title.clone(),
        geometry: export_ring(&house.ring),
        area: house.area,
        bearing: house.bearing,
        fit: house.outcome,
        rotation: house.rotation.degrees(),
    }
}

pub fn export_plan(id: &str, plan: &SitePlan) -> ExtSitePlan {
    ExtSitePlan {
        id: id.to_string(),
        lot_area: plan.lot_area,
        setback_envelope: plan.setback_envelope.as_ref().map(export_envelope),
        degenerate_corners: plan.degenerate_corners.clone(),
        fsr_envelope: plan.fsr_envelope.as_ref().map(export_envelope),
        house: plan.house.as_ref().map(export_house),
        frontage_midpoint: plan.frontage_midpoint.into(),
        should_flip: plan.orientation.is_some_and(|o| o.should_flip),
        side_values: plan.side_values,
        edge_labels: plan
            .edge_labels
            .iter()
            .map(|l| ExtLabel {
                position: l.position.into(),
                text: l.text.clone(),
            })
            .collect(),
    }
}
