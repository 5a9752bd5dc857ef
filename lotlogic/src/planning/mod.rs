//! The site-planning pipeline, leaf-first:
//! [`setback`] insets the parcel per side, [`fsr`] scales the result down to the permitted floor area,
//! [`footprint`] places a house inside that envelope, [`orientation`] decides whether the house faces the street
//! and [`side_labels`] assigns per-side length annotations to parcel edges.
//! [`SitePlanner`] composes all of them for a single site.

pub mod footprint;
pub mod fsr;
pub mod orientation;
pub mod setback;
pub mod side_labels;

mod planner;

#[doc(inline)]
pub use planner::{Envelope, GeoLabel, PlacedHouse, Site, SitePlan, SitePlanner};
