//! Matrices and vectors for pose geometry.
//!
//! - [`Vector3`]: 3D Cartesian vector (also carries rotation vectors and
//!   Euler vectors)
//! - [`Matrix3`]: 3×3 matrix for rotations and skew-symmetric cross-product
//!   maps
//! - [`HomogeneousTransform`]: 4×4 rotation-plus-translation transform

mod matrix3;
mod transform;
mod vector3;

pub use matrix3::Matrix3;
pub use transform::HomogeneousTransform;
pub use vector3::Vector3;
