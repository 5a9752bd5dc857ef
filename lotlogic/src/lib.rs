#![doc = document_features::document_features!()]
//! Geometric site-planning engine for residential land parcels.
//!
//! Given a parcel boundary and a set of planning parameters, `lotlogic` derives the setback
//! envelope, the floor-space-ratio (FSR) envelope and a house footprint placed inside it,
//! together with the orientation of that footprint relative to the street frontage.
//! All computations are pure: inputs are plain values, outputs are freshly allocated.

/// Geometric primitives and base algorithms in the planar (metric) space
pub mod geometry;

/// Conversion between geographic (longitude/latitude) and planar metric coordinates
pub mod projection;

/// The site-planning components: setbacks, FSR scaling, footprint placement, orientation and side labels
pub mod planning;

/// Caller-side state that survives between placements (rotation, pending rotation, run tracking)
pub mod session;

/// Importing site descriptions into and exporting site plans out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
