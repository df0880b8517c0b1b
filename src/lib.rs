//! 3D geometry primitives for robotics and perception code.
//!
//! `pose-core` provides the numerical building blocks that higher-level
//! robotics code needs for consistent handling of rigid-body orientation:
//! vector normalization and clipping, conversions between rotation
//! representations (rotation matrix, quaternion, rotation vector, Euler
//! angles), construction of a rotation that aligns one vector onto another,
//! and basic affine-transform composition.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`], [`Matrix3`], [`HomogeneousTransform`] value types |
//! | [`quaternion`] | [`Quaternion`] and its representation conversions |
//! | [`align`] | Rodrigues-based A-onto-B rotation construction |
//! | [`pose`] | [`Pose`] values and uniform pose sampling |
//! | [`constants`] | High-precision angular constants |
//! | [`errors`] | [`GeomError`] and [`GeomResult`] |
//!
//! # Conversion pipeline
//!
//! A typical orientation round trip through the library:
//!
//! ```
//! use pose_core::{Quaternion, Vector3};
//!
//! // Orientation as roll/pitch/yaw from a state estimator...
//! let q = Quaternion::from_euler(Vector3::new(0.1, -0.2, 0.3));
//!
//! // ...as a rotation matrix for frame transformation...
//! let r = q.to_rotation_matrix();
//! assert!(r.is_rotation_matrix(1e-13));
//!
//! // ...or as an axis-angle rotation vector for a controller error term.
//! let rotvec = q.to_rotation_vector();
//! assert!(rotvec.magnitude() < std::f64::consts::PI);
//! ```
//!
//! # Design notes
//!
//! - **Pure value types**: every entity is constructed, used, and discarded
//!   within a single call. No shared mutable state, no I/O, no locking; all
//!   operations are safely callable from multiple threads.
//!
//! - **Visible numerical failures**: normalizing a zero vector or clipping a
//!   zero norm returns a [`GeomError`] instead of silently producing NaN.
//!
//! - **Quaternion double cover**: `q` and `-q` are the same rotation. Only
//!   [`Quaternion::to_rotation_vector`] canonicalizes the sign (`w >= 0`);
//!   no other operation does, and callers must not assume a canonical sign.
//!
//! - **Radians everywhere**: all angles are radians; [`constants`] provides
//!   degree conversion factors for display.
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root for convenience:
//!
//! ```
//! use pose_core::{Vector3, Matrix3, Quaternion, HomogeneousTransform, Pose};
//! use pose_core::{GeomError, GeomResult, MathErrorKind};
//! ```

pub mod align;
pub mod constants;
pub mod errors;
pub mod matrix;
pub mod pose;
pub mod quaternion;

pub use errors::{GeomError, GeomResult, MathErrorKind};
pub use matrix::{HomogeneousTransform, Matrix3, Vector3};
pub use pose::Pose;
pub use quaternion::Quaternion;
