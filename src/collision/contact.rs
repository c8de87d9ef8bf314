use std::cell::Cell;
use std::rc::Rc;

use crate::dynamics::BodyHandle;
use crate::math::Vec2;

/// Impulse accumulators shared by every contact of one manifold.
///
/// The response solver adds its per-iteration moments here once per
/// manifold rather than once per contact; each `Contact` holds a counted
/// handle to the pair.
#[derive(Debug, Default)]
pub struct ManifoldMoments {
    pub acc: Cell<Vec2>,
    pub split_acc: Cell<Vec2>,
}

impl ManifoldMoments {
    #[inline]
    pub fn add_acc(&self, dp: Vec2) {
        self.acc.set(self.acc.get() + dp);
    }

    #[inline]
    pub fn add_split_acc(&self, dp: Vec2) {
        self.split_acc.set(self.split_acc.get() + dp);
    }
}

/// One contact point of a manifold, in world space.
#[derive(Clone, Debug)]
pub struct Contact {
    pub body_ref: BodyHandle,
    pub body_inc: BodyHandle,
    /// World-space contact position.
    pub pos: Vec2,
    /// Unit normal pointing from the reference body into the incident body.
    pub normal: Vec2,
    /// Summed penetration depth of the whole manifold.
    pub depth: f64,
    /// Precomputed impulse denominator.
    pub k_factor: f64,
    /// Manifold size at emission; lets the solver average duplicates.
    pub weight: usize,
    pub moments: Rc<ManifoldMoments>,
}

impl Contact {
    /// An empty contact bound to `moments`' manifold; the narrow phase
    /// stamps the remaining fields before emission.
    pub fn new(body_ref: BodyHandle, body_inc: BodyHandle, moments: Rc<ManifoldMoments>) -> Self {
        Self {
            body_ref,
            body_inc,
            pos: Vec2::default(),
            normal: Vec2::default(),
            depth: 0.0,
            k_factor: 0.0,
            weight: 0,
            moments,
        }
    }
}
