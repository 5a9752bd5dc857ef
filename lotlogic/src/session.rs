//! State owned by the calling (rendering) layer across successive placements.
//!
//! The geometry engine never mutates any of this: it reads the current [`Rotation`] as input and
//! recommends a new one. The types here apply those recommendations with two rules:
//! a newer placement run supersedes older ones ([`RunTracker`]), and a rotation requested before the
//! visual layer exists is held back until it is ready, the latest request winning ([`PendingRotation`]).

use log::debug;

use crate::planning::SitePlan;
use crate::planning::orientation::{Rotation, RotationDecision};
use crate::projection::LngLat;

/// The rotation currently applied to the house footprint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationState {
    rotation: Rotation,
}

impl RotationState {
    pub fn current(&self) -> Rotation {
        self.rotation
    }

    /// Applies an orientation decision, returns the resulting rotation
    pub fn apply(&mut self, decision: &RotationDecision) -> Rotation {
        self.rotation = decision.recommended(self.rotation);
        self.rotation
    }

    /// Manual override by the user
    pub fn set(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn reset(&mut self) {
        self.rotation = Rotation::Deg0;
    }
}

/// Two-phase application of rotations to a visual layer that may not exist yet.
///
/// While the layer is not ready, at most one rotation is pending; a newer request replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingRotation {
    ready: bool,
    pending: Option<Rotation>,
}

impl PendingRotation {
    /// Returns the rotation to apply right away if the layer is ready, otherwise holds on to it.
    pub fn request(&mut self, rotation: Rotation) -> Option<Rotation> {
        match self.ready {
            true => Some(rotation),
            false => {
                if let Some(superseded) = self.pending.replace(rotation) {
                    debug!("[SESSION] pending rotation {superseded:?} superseded by {rotation:?}");
                }
                None
            }
        }
    }

    /// Signals that the layer exists, returns the pending rotation (if any) to apply now.
    pub fn mark_ready(&mut self) -> Option<Rotation> {
        self.ready = true;
        self.pending.take()
    }

    /// Signals that the layer is gone (e.g. a new overlay is being created)
    pub fn mark_not_ready(&mut self) {
        self.ready = false;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn pending(&self) -> Option<Rotation> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Identifier of a placement run, increasing monotonically
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTracker {
    latest: u64,
}

impl RunTracker {
    /// Starts a new run, superseding all previous ones
    pub fn begin(&mut self) -> RunId {
        self.latest += 1;
        RunId(self.latest)
    }

    /// Results of runs that are no longer current should be discarded
    pub fn is_current(&self, run: RunId) -> bool {
        run.0 == self.latest
    }
}

/// Per-selection context of the calling layer: frontage, rotation, pending rotation and runs.
#[derive(Clone, Debug, Default)]
pub struct SelectionContext {
    parcel_id: Option<String>,
    design_id: Option<String>,
    frontage_midpoint: Option<LngLat>,
    rotation: RotationState,
    pending: PendingRotation,
    runs: RunTracker,
}

impl SelectionContext {
    /// A different parcel was selected: rotation resets to 0° and a new run starts.
    pub fn select_parcel(&mut self, parcel_id: impl Into<String>) -> RunId {
        self.parcel_id = Some(parcel_id.into());
        self.frontage_midpoint = None;
        self.restart()
    }

    /// A different design was selected: rotation resets to 0° and a new run starts.
    pub fn select_design(&mut self, design_id: impl Into<String>) -> RunId {
        self.design_id = Some(design_id.into());
        self.restart()
    }

    fn restart(&mut self) -> RunId {
        self.rotation.reset();
        self.pending.clear();
        self.pending.mark_not_ready();
        self.runs.begin()
    }

    /// Incorporates the result of a placement run.
    ///
    /// Results of stale runs are ignored (`None`). Otherwise, the frontage midpoint is recorded,
    /// the orientation decision (if any) is applied and the resulting rotation is requested;
    /// the returned value is the rotation to apply to the layer right now, if any.
    pub fn complete(&mut self, run: RunId, plan: &SitePlan) -> Option<Rotation> {
        if !self.runs.is_current(run) {
            debug!("[SESSION] discarding result of stale run {run:?}");
            return None;
        }
        self.frontage_midpoint = Some(plan.frontage_midpoint);
        let decision = plan.orientation.as_ref()?;
        let rotation = self.rotation.apply(decision);
        self.pending.request(rotation)
    }

    /// The house layer now exists, returns the rotation to apply to it, if any
    pub fn layer_ready(&mut self) -> Option<Rotation> {
        self.pending.mark_ready()
    }

    /// Manual rotation by the user, returns the rotation to apply right now, if any
    pub fn rotate_manually(&mut self, rotation: Rotation) -> Option<Rotation> {
        self.rotation.set(rotation);
        self.pending.request(rotation)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation.current()
    }

    pub fn frontage_midpoint(&self) -> Option<LngLat> {
        self.frontage_midpoint
    }

    pub fn pending_rotation(&self) -> Option<Rotation> {
        self.pending.pending()
    }

    pub fn parcel_id(&self) -> Option<&str> {
        self.parcel_id.as_deref()
    }

    pub fn design_id(&self) -> Option<&str> {
        self.design_id.as_deref()
    }
}
