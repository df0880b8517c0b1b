//! Pose values and uniform pose sampling.
//!
//! [`Pose`] is the value handed back to callers that speak in
//! position-plus-orientation terms (the shape of a robotics framework's pose
//! message). It carries no behavior beyond construction; serialization into
//! any host framework's types is the caller's business.

use crate::matrix::Vector3;
use crate::quaternion::Quaternion;
use rand::Rng;
use std::fmt;

/// A position and orientation pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vector3,
    pub orientation: Quaternion,
}

impl Pose {
    /// Creates a pose from a position and an orientation quaternion.
    pub fn new(position: Vector3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pose({}, {})", self.position, self.orientation)
    }
}

/// Draws a random pose with each position component uniform in `[min, max]`
/// and a uniformly random orientation.
///
/// The orientation comes from [`Quaternion::random`], which is uniform over
/// rotation space rather than per-component.
///
/// ```
/// use pose_core::pose::random_pose;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let pose = random_pose(-1.0, 1.0, &mut rng);
/// assert!(pose.position.x >= -1.0 && pose.position.x <= 1.0);
/// ```
pub fn random_pose<R: Rng>(min: f64, max: f64, rng: &mut R) -> Pose {
    let position = Vector3::new(
        rng.gen_range(min..=max),
        rng.gen_range(min..=max),
        rng.gen_range(min..=max),
    );
    Pose::new(position, Quaternion::random(rng))
}
